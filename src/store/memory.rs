// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory store implementation

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use super::HighscoreStore;
use crate::errors::StoreError;
use crate::types::entry::ScoreEntry;

/// Process-local store keeping records in insertion order
///
/// Data is lost when the program exits. Use this for:
/// - Short-lived processes
/// - Testing
/// - Seeding a manager with fixed history
///
/// # Examples
///
/// ```rust,ignore
/// use highscores::{HighscoreManager, MemoryStore};
///
/// let store = MemoryStore::with_entries(history);
/// let manager = HighscoreManager::builder(store).build();
/// ```
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Mutex<Vec<ScoreEntry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a store pre-populated with `entries`
    pub fn with_entries(entries: Vec<ScoreEntry>) -> Self {
        Self {
            records: Mutex::new(entries),
        }
    }

    /// Number of persisted records
    pub async fn len(&self) -> usize {
        self.records.lock().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.lock().await.is_empty()
    }
}

#[async_trait]
impl HighscoreStore for MemoryStore {
    async fn load_all(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        let records = self.records.lock().await;
        debug!(records = records.len(), "Loading records from memory store");
        Ok(records.clone())
    }

    async fn append(&self, entry: &ScoreEntry) -> Result<(), StoreError> {
        let mut records = self.records.lock().await;
        records.push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "MemoryStore"
    }
}
