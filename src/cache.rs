// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! In-memory cache of score entries keyed by object
//!
//! The cache is the single shared mutable resource of a
//! [`HighscoreManager`](crate::HighscoreManager). It is touched by the load
//! path (full rebuild), the append path and the query path, plus the midnight
//! task. All access goes through one `tokio::sync::RwLock`:
//!
//! - readers clone the entries they need and release the lock before ranking
//! - a rebuild holds the write lock for its whole duration, so no reader sees a
//!   half-built map
//! - appends hold the write lock only for the push, never across storage I/O

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;
use std::future::Future;
use tokio::sync::RwLock;
use tracing::debug;

use crate::types::entry::{ObjectId, ScoreEntry};

/// Statistics about cache contents and activity
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of distinct objects with at least one entry
    pub objects: usize,
    /// Total number of cached entries
    pub entries: usize,
    /// Number of entries appended since creation
    pub appends: u64,
    /// Number of completed rebuilds
    pub loads: u64,
}

impl fmt::Display for CacheStats {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "objects={}, entries={}, appends={}, loads={}",
            self.objects, self.entries, self.appends, self.loads
        )
    }
}

#[derive(Debug, Default)]
struct CacheState {
    entries: HashMap<ObjectId, Vec<ScoreEntry>>,
    total: usize,
    appends: u64,
    loads: u64,
}

impl CacheState {
    fn push(&mut self, entry: ScoreEntry) {
        self.entries.entry(entry.object_id()).or_default().push(entry);
        self.total += 1;
    }

    fn clear(&mut self) {
        self.entries.clear();
        self.total = 0;
    }
}

/// Exclusion-guarded map from object id to its append-only entry list
#[derive(Debug, Default)]
pub struct EntryCache {
    state: RwLock<CacheState>,
}

impl EntryCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends an entry to its object's list
    pub async fn push(&self, entry: ScoreEntry) {
        let mut state = self.state.write().await;
        debug!(object_id = %entry.object_id(), "Caching score entry");
        state.push(entry);
        state.appends += 1;
    }

    /// Returns a snapshot of an object's entries in recording order
    ///
    /// `None` means the object has never had an entry, which is distinct
    /// from `Some` of an empty list.
    pub async fn get(&self, object_id: ObjectId) -> Option<Vec<ScoreEntry>> {
        let state = self.state.read().await;
        state.entries.get(&object_id).cloned()
    }

    pub async fn contains(&self, object_id: ObjectId) -> bool {
        self.state.read().await.entries.contains_key(&object_id)
    }

    /// Clears the cache, then refills it from `source` under one write lock
    ///
    /// On `Err` the cache stays cleared and the error is returned. The
    /// future runs while the lock is held; it must not touch this cache.
    pub async fn rebuild<F, E>(&self, source: F) -> Result<usize, E>
    where
        F: Future<Output = Result<Vec<ScoreEntry>, E>>,
    {
        let mut state = self.state.write().await;
        state.clear();

        let entries = source.await?;
        let count = entries.len();
        for entry in entries {
            state.push(entry);
        }
        state.loads += 1;

        debug!(objects = state.entries.len(), entries = count, "Rebuilt entry cache");
        Ok(count)
    }

    pub async fn clear(&self) {
        let mut state = self.state.write().await;
        debug!(entries = state.total, "Clearing entry cache");
        state.clear();
    }

    pub async fn stats(&self) -> CacheStats {
        let state = self.state.read().await;
        CacheStats {
            objects: state.entries.len(),
            entries: state.total,
            appends: state.appends,
            loads: state.loads,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::entry::{ParticipantId, UnixTimestamp};

    fn entry(object: u32, participant: u32, score: i32) -> ScoreEntry {
        ScoreEntry::new(
            ObjectId(object),
            vec![ParticipantId(participant)],
            score,
            true,
            UnixTimestamp(1_760_486_400),
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_push_and_get() {
        let cache = EntryCache::new();
        assert!(cache.get(ObjectId(1)).await.is_none());

        cache.push(entry(1, 7, 10)).await;
        cache.push(entry(1, 8, 20)).await;
        cache.push(entry(2, 7, 30)).await;

        let entries = cache.get(ObjectId(1)).await.unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].score(), 10);
        assert_eq!(entries[1].score(), 20);

        let stats = cache.stats().await;
        assert_eq!(stats.objects, 2);
        assert_eq!(stats.entries, 3);
        assert_eq!(stats.appends, 3);
    }

    #[tokio::test]
    async fn test_rebuild_replaces_contents() {
        let cache = EntryCache::new();
        cache.push(entry(1, 7, 10)).await;

        let loaded = cache
            .rebuild(async { Ok::<_, ()>(vec![entry(5, 1, 1), entry(5, 2, 2)]) })
            .await
            .unwrap();

        assert_eq!(loaded, 2);
        assert!(!cache.contains(ObjectId(1)).await);
        assert_eq!(cache.get(ObjectId(5)).await.unwrap().len(), 2);
        assert_eq!(cache.stats().await.loads, 1);
    }

    #[tokio::test]
    async fn test_failed_rebuild_leaves_cache_cleared() {
        let cache = EntryCache::new();
        cache.push(entry(1, 7, 10)).await;

        let result = cache.rebuild(async { Err::<Vec<ScoreEntry>, _>("offline") }).await;

        assert_eq!(result, Err("offline"));
        assert!(cache.get(ObjectId(1)).await.is_none());
        let stats = cache.stats().await;
        assert_eq!(stats.entries, 0);
        assert_eq!(stats.loads, 0);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = EntryCache::new();
        cache.push(entry(1, 7, 10)).await;
        cache.clear().await;

        assert!(cache.get(ObjectId(1)).await.is_none());
        assert_eq!(cache.stats().await.objects, 0);
    }
}
