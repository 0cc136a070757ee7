// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for score entry construction and decoding.

/// Errors raised when a score entry or its stored form is invalid.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum EntryError {
    /// A score entry must name at least one participant.
    #[error("Score entry has no participants")]
    EmptyParticipants,

    /// The comma-separated participant list could not be parsed.
    #[error("Invalid participant list '{raw}': {reason}")]
    InvalidParticipantList {
        /// The raw participant list as stored
        raw: String,
        /// Why parsing failed
        reason: String,
    },

    /// The stored win flag was neither `0` nor `1`.
    #[error("Invalid win flag {value}, expected 0 or 1")]
    InvalidWinFlag {
        /// The stored flag value
        value: i64,
    },
}

impl EntryError {
    /// Create an `InvalidParticipantList` error.
    pub fn invalid_participant_list(raw: impl Into<String>, reason: impl Into<String>) -> Self {
        EntryError::InvalidParticipantList {
            raw: raw.into(),
            reason: reason.into(),
        }
    }
}
