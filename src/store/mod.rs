// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Durable storage backends for score entries
//!
//! This module provides different persistence strategies behind the
//! [`HighscoreStore`] trait:
//!
//! - [`DiskStore`]: Append-only JSON Lines file with file locking
//! - [`MemoryStore`]: Process-local store (data lost on exit)
//! - [`NoOpStore`]: Loads nothing and discards writes
//!
//! # Examples
//!
//! ```rust,ignore
//! use highscores::{DiskStore, HighscoreManager, MemoryStore, NoOpStore};
//!
//! // Persistent store
//! let store = DiskStore::new("data/highscores.jsonl").validate()?;
//! let manager = HighscoreManager::builder(store).build();
//!
//! // Ephemeral store
//! let manager = HighscoreManager::builder(MemoryStore::new()).build();
//! ```

use async_trait::async_trait;
use std::fmt;

use crate::errors::StoreError;
use crate::types::entry::ScoreEntry;

mod disk;
mod memory;
mod noop;
pub mod record;

pub use disk::DiskStore;
pub use memory::MemoryStore;
pub use noop::NoOpStore;
pub use record::StoredRecord;

/// Which storage operation failed
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StoreOperation {
    /// Reading the full record set during `load()`
    Load,
    /// Persisting one entry during `append()`
    Append,
}

impl fmt::Display for StoreOperation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreOperation::Load => f.write_str("load"),
            StoreOperation::Append => f.write_str("append"),
        }
    }
}

/// Trait for durable highscore storage
///
/// The store is an opaque read/append record set. The manager treats its
/// failures as non-fatal and reports them to an
/// [`ErrorSink`](crate::ErrorSink).
///
/// # Thread Safety
///
/// Implementations must be thread-safe and support concurrent access. Use
/// interior mutability (e.g., `Mutex`) as needed.
#[async_trait]
pub trait HighscoreStore: Send + Sync {
    /// Reads every stored entry
    ///
    /// Entries are returned in whatever order the backend yields them; the
    /// cache preserves that order for tie-breaking.
    async fn load_all(&self) -> Result<Vec<ScoreEntry>, StoreError>;

    /// Persists exactly one entry
    async fn append(&self, entry: &ScoreEntry) -> Result<(), StoreError>;

    /// Returns a human-readable name for this store backend
    ///
    /// Used for logging and debugging.
    fn name(&self) -> &'static str;
}
