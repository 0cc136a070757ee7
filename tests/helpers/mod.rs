// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Test helpers for highscores integration tests
//!
//! Provides mock stores, a recording error sink and entry builders so
//! managers can be exercised without touching the filesystem.

#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use highscores::{
    ErrorSink, HighscoreStore, ObjectId, ParticipantId, ScoreEntry, StoreError, StoreOperation,
    UnixTimestamp,
};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use tokio::sync::Notify;

/// Wednesday 2025-10-15 00:00:00 UTC
pub const WEDNESDAY_MIDNIGHT: i64 = 1_760_486_400;

pub const DAY: i64 = 86_400;

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

/// Builds an entry for `object` played by `team` in the given order
pub fn entry(object: u32, team: &[u32], score: i32, is_win: bool, ts: i64) -> ScoreEntry {
    ScoreEntry::new(
        ObjectId(object),
        team.iter().copied().map(ParticipantId).collect(),
        score,
        is_win,
        UnixTimestamp(ts),
    )
    .unwrap()
}

/// Store whose reads and writes can be made to fail
///
/// Successful appends are kept in memory and returned by later loads.
///
/// # Example
///
/// ```rust,ignore
/// let store = FlakyStore::new(history).failing_appends();
/// let manager = HighscoreManager::builder(store.clone()).build();
/// ```
#[derive(Clone, Default)]
pub struct FlakyStore {
    records: Arc<Mutex<Vec<ScoreEntry>>>,
    fail_loads: Arc<AtomicBool>,
    fail_appends: Arc<AtomicBool>,
}

impl FlakyStore {
    pub fn new(records: Vec<ScoreEntry>) -> Self {
        Self {
            records: Arc::new(Mutex::new(records)),
            ..Self::default()
        }
    }

    pub fn failing_loads(self) -> Self {
        self.fail_loads.store(true, Ordering::SeqCst);
        self
    }

    pub fn failing_appends(self) -> Self {
        self.fail_appends.store(true, Ordering::SeqCst);
        self
    }

    pub fn set_fail_loads(&self, fail: bool) {
        self.fail_loads.store(fail, Ordering::SeqCst);
    }

    pub fn set_fail_appends(&self, fail: bool) {
        self.fail_appends.store(fail, Ordering::SeqCst);
    }

    pub fn persisted(&self) -> Vec<ScoreEntry> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl HighscoreStore for FlakyStore {
    async fn load_all(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        if self.fail_loads.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("database offline"));
        }
        Ok(self.records.lock().unwrap().clone())
    }

    async fn append(&self, entry: &ScoreEntry) -> Result<(), StoreError> {
        if self.fail_appends.load(Ordering::SeqCst) {
            return Err(StoreError::unavailable("database offline"));
        }
        self.records.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "FlakyStore"
    }
}

/// Store whose appends wait until the test releases them
///
/// Lets a test hold a write between the cache push and the persist.
#[derive(Clone, Default)]
pub struct GatedStore {
    records: Arc<Mutex<Vec<ScoreEntry>>>,
    release: Arc<Notify>,
}

impl GatedStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Lets one pending (or the next) append complete
    pub fn release(&self) {
        self.release.notify_one();
    }

    pub fn persisted(&self) -> Vec<ScoreEntry> {
        self.records.lock().unwrap().clone()
    }
}

#[async_trait]
impl HighscoreStore for GatedStore {
    async fn load_all(&self) -> Result<Vec<ScoreEntry>, StoreError> {
        Ok(self.records.lock().unwrap().clone())
    }

    async fn append(&self, entry: &ScoreEntry) -> Result<(), StoreError> {
        self.release.notified().await;
        self.records.lock().unwrap().push(entry.clone());
        Ok(())
    }

    fn name(&self) -> &'static str {
        "GatedStore"
    }
}

/// Error sink that remembers every report
#[derive(Clone, Default)]
pub struct RecordingSink {
    reports: Arc<Mutex<Vec<(StoreOperation, String)>>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn reports(&self) -> Vec<(StoreOperation, String)> {
        self.reports.lock().unwrap().clone()
    }

    pub fn count(&self, operation: StoreOperation) -> usize {
        self.reports
            .lock()
            .unwrap()
            .iter()
            .filter(|(op, _)| *op == operation)
            .count()
    }
}

impl ErrorSink for RecordingSink {
    fn report(&self, operation: StoreOperation, error: &StoreError) {
        self.reports
            .lock()
            .unwrap()
            .push((operation, error.to_string()));
    }
}

/// Installs a test subscriber honoring `RUST_LOG`; safe to call repeatedly
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_test_writer()
        .try_init();
}
