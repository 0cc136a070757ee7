// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Error types for the highscores library.
//!
//! This module provides strongly-typed errors for all public APIs in highscores.
//! It follows a hybrid approach:
//!
//! - **Module-specific errors** for fine-grained error handling (`EntryError`,
//!   `ParseKindError`, `StoreError`, `WindowError`)
//! - **Unified error type** (`HighscoreError`) for convenience when you don't need
//!   to distinguish between error sources
//!
//! # Architecture
//!
//! - [`EntryError`] - Invalid score entries or malformed stored records
//! - [`ParseKindError`] - Unknown clear type or score type names
//! - [`StoreError`] - Failures reading from or appending to durable storage
//! - [`WindowError`] - Failures converting local calendar dates into instants
//!
//! Storage failures are normally absorbed by the manager and handed to an
//! [`ErrorSink`](crate::ErrorSink) rather than returned to callers.
//!
//! # Examples
//!
//! ```rust,ignore
//! use highscores::{ClearType, HighscoreError, ObjectId, ScoreType};
//!
//! async fn top_rows(manager: &Manager) -> Result<usize, HighscoreError> {
//!     let rows = manager
//!         .query(ObjectId(42), ClearType::Daily, ScoreType::Classic)
//!         .await?;
//!     Ok(rows.map(|rows| rows.len()).unwrap_or_default())
//! }
//! ```

mod entry;
mod kind;
mod store;
mod window;

pub use entry::EntryError;
pub use kind::ParseKindError;
pub use store::StoreError;
pub use window::WindowError;

/// Unified error type for all highscores operations.
///
/// All module-specific error types automatically convert to `HighscoreError` via
/// `From` implementations, so you can use `?` to propagate errors naturally.
#[derive(Debug, thiserror::Error)]
pub enum HighscoreError {
    /// Error from constructing or decoding a score entry.
    #[error("Entry error: {0}")]
    Entry(#[from] EntryError),

    /// Error parsing a clear type or score type name.
    #[error("Parse error: {0}")]
    ParseKind(#[from] ParseKindError),

    /// Error from the durable storage backend.
    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    /// Error from time window calculations.
    #[error("Time window error: {0}")]
    Window(#[from] WindowError),
}
