// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Errors for parsing leaderboard query parameters

/// Errors that can occur when parsing a clear type or score type name.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseKindError {
    /// The name is not one of `DAILY`, `WEEKLY`, `MONTHLY`, `ALLTIME`.
    #[error("Unknown clear type: {value}")]
    UnknownClearType {
        /// The rejected input
        value: String,
    },

    /// The name is not one of `CLASSIC`, `PERTEAM`, `MOSTWIN`.
    #[error("Unknown score type: {value}")]
    UnknownScoreType {
        /// The rejected input
        value: String,
    },
}

impl ParseKindError {
    /// Create an `UnknownClearType` error.
    pub fn unknown_clear_type(value: impl Into<String>) -> Self {
        ParseKindError::UnknownClearType {
            value: value.into(),
        }
    }

    /// Create an `UnknownScoreType` error.
    pub fn unknown_score_type(value: impl Into<String>) -> Self {
        ParseKindError::UnknownScoreType {
            value: value.into(),
        }
    }
}
