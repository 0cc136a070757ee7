// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for time window calculations.

use chrono::NaiveDate;

/// Errors that can occur while computing leaderboard time windows.
///
/// These only occur at the edges of the representable calendar or for time
/// zones that cannot place a local midnight on the timeline at all.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum WindowError {
    /// The local midnight of a date could not be mapped to an instant.
    #[error("Cannot resolve local midnight for {date}")]
    UnresolvableMidnight {
        /// The local calendar date
        date: NaiveDate,
    },

    /// Calendar arithmetic left the representable date range.
    #[error("Date arithmetic overflow from {date}: {details}")]
    DateOverflow {
        /// The date the arithmetic started from
        date: NaiveDate,
        /// The operation that overflowed
        details: String,
    },
}

impl WindowError {
    /// Create an `UnresolvableMidnight` error.
    pub fn unresolvable_midnight(date: NaiveDate) -> Self {
        WindowError::UnresolvableMidnight { date }
    }

    /// Create a `DateOverflow` error.
    pub fn date_overflow(date: NaiveDate, details: impl Into<String>) -> Self {
        WindowError::DateOverflow {
            date,
            details: details.into(),
        }
    }
}
