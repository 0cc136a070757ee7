// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! No-operation store that disables persistence entirely

use async_trait::async_trait;

use super::HighscoreStore;
use crate::errors::StoreError;
use crate::types::entry::ScoreEntry;

/// A store that loads nothing and accepts every write without keeping it
///
/// Leaderboards backed by this store only reflect entries appended during
/// the lifetime of the manager, and every `load()` empties them.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpStore;

#[async_trait]
impl HighscoreStore for NoOpStore {
    async fn load_all(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(Vec::new())
    }

    async fn append(&self, _entry: &ScoreEntry) -> Result<(), StoreError> {
        // Ignore writes
        Ok(())
    }

    fn name(&self) -> &'static str {
        "NoOpStore"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entry::{ObjectId, ParticipantId, UnixTimestamp};

    #[tokio::test]
    async fn test_noop_store_ignores_writes() {
        let store = NoOpStore;
        let entry =
            ScoreEntry::new(ObjectId(1), vec![ParticipantId(1)], 1, true, UnixTimestamp(0))
                .unwrap();

        assert!(store.append(&entry).await.is_ok());
        assert!(store.load_all().await.unwrap().is_empty());
    }
}
