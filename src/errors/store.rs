// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for durable highscore storage.
//!
//! These errors are produced by [`HighscoreStore`](crate::HighscoreStore)
//! implementations. The manager never propagates them to game logic; they are
//! reported through an [`ErrorSink`](crate::ErrorSink) instead.

use super::EntryError;

/// Errors that can occur while loading or appending highscore records.
///
/// # Examples
///
/// ```rust,ignore
/// use highscores::{DiskStore, HighscoreStore, StoreError};
///
/// match store.load_all().await {
///     Ok(entries) => println!("Loaded {} entries", entries.len()),
///     Err(StoreError::IoError { path, .. }) => eprintln!("Cannot read {path}"),
///     Err(StoreError::InvalidRecord { line, .. }) => eprintln!("Corrupt line {line}"),
///     Err(e) => eprintln!("Other error: {e}"),
/// }
/// ```
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// Error reading from or writing to the backing file.
    #[error("Store I/O error at {path}: {details}")]
    IoError {
        /// Path to the file that caused the error
        path: String,
        /// Details about the I/O error
        details: String,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Error serializing or deserializing a stored record.
    #[error("Serialization error: {details}")]
    SerializationError {
        /// Details about the serialization error
        details: String,
        /// The underlying serialization error
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// A stored record decoded but does not describe a valid score entry.
    #[error("Invalid record at line {line}: {source}")]
    InvalidRecord {
        /// 1-based line (or row) number of the record
        line: usize,
        /// What was wrong with the record
        #[source]
        source: EntryError,
    },

    /// The backend could not be reached at all.
    #[error("Store unavailable: {details}")]
    Unavailable {
        /// Details about the outage
        details: String,
    },
}

impl StoreError {
    /// Create an `IoError` from an I/O error and path.
    pub fn io_error(
        path: impl Into<String>,
        details: impl Into<String>,
        source: std::io::Error,
    ) -> Self {
        StoreError::IoError {
            path: path.into(),
            details: details.into(),
            source,
        }
    }

    /// Create a `SerializationError` from any serialization error.
    pub fn serialization_error(
        details: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        StoreError::SerializationError {
            details: details.into(),
            source: Box::new(source),
        }
    }

    /// Create an `InvalidRecord` error for the given line.
    pub fn invalid_record(line: usize, source: EntryError) -> Self {
        StoreError::InvalidRecord { line, source }
    }

    /// Create an `Unavailable` error with details.
    pub fn unavailable(details: impl Into<String>) -> Self {
        StoreError::Unavailable {
            details: details.into(),
        }
    }
}
