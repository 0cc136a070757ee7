// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Highscore manager: the owned entry point for games
//!
//! A [`HighscoreManager`] ties together the entry cache, a durable
//! [`HighscoreStore`], the window calculator, the name resolver and the
//! midnight scheduler. There is no process-wide state; every manager owns its
//! own cache and timer.
//!
//! # Failure policy
//!
//! Storage failures never surface as errors from [`load`](HighscoreManager::load)
//! or [`append`](HighscoreManager::append). They are reported to the configured
//! [`ErrorSink`] and the manager keeps serving from memory:
//!
//! - a failed load leaves the cache empty
//! - a failed append keeps the entry cached (the cache runs ahead of storage)
//!
//! # Examples
//!
//! ```
//! use highscores::{
//!     ClearType, HighscoreConfig, HighscoreManager, MemoryStore, ObjectId, ParticipantId,
//!     ScoreEntry, ScoreType, UnixTimestamp,
//! };
//!
//! # #[tokio::main(flavor = "current_thread")]
//! # async fn main() {
//! let manager = HighscoreManager::builder(MemoryStore::new())
//!     .config(HighscoreConfig::minimal())
//!     .build();
//! manager.load().await;
//!
//! let entry = ScoreEntry::new(
//!     ObjectId(42),
//!     vec![ParticipantId(1)],
//!     10,
//!     true,
//!     UnixTimestamp::now(),
//! )
//! .unwrap();
//! manager.append(entry).await;
//!
//! let rows = manager
//!     .query(ObjectId(42), ClearType::AllTime, ScoreType::Classic)
//!     .await
//!     .unwrap()
//!     .unwrap();
//! assert_eq!(rows[0].value, 10);
//!
//! assert!(manager
//!     .query(ObjectId(7), ClearType::AllTime, ScoreType::Classic)
//!     .await
//!     .unwrap()
//!     .is_none());
//! manager.dispose().await;
//! # }
//! ```

use async_trait::async_trait;
use chrono::{Local, TimeZone};
use serde::Serialize;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::{info, Instrument};

use crate::cache::{CacheStats, EntryCache};
use crate::clock::{DefaultSystemClock, SystemClock};
use crate::config::HighscoreConfig;
use crate::errors::WindowError;
use crate::leaderboard::rank_entries;
use crate::resolver::{IdNameResolver, NameResolver};
use crate::scheduler::{MidnightScheduler, MidnightTask};
use crate::sink::{ErrorSink, TracingErrorSink};
use crate::store::{HighscoreStore, StoreOperation};
use crate::tracing::spans;
use crate::types::entry::{ObjectId, ScoreEntry};
use crate::types::kinds::{ClearType, ScoreType};
use crate::types::row::LeaderboardRow;
use crate::window::WindowCalculator;

/// Result of a cache rebuild
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LoadSummary {
    /// Distinct objects in the cache after the load
    pub objects: usize,
    /// Entries in the cache after the load
    pub entries: usize,
    pub elapsed: Duration,
}

/// Whether an appended entry reached durable storage
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AppendOutcome {
    Persisted,
    /// Cached but the store write failed; the failure went to the error sink
    CachedOnly,
}

/// Default midnight task: logs the day rollover with cache statistics
pub struct CacheSummaryTask {
    cache: Arc<EntryCache>,
}

impl CacheSummaryTask {
    pub fn new(cache: Arc<EntryCache>) -> Self {
        Self { cache }
    }
}

#[async_trait]
impl MidnightTask for CacheSummaryTask {
    async fn run(&self) {
        let stats = self.cache.stats().await;
        info!(
            objects = stats.objects,
            entries = stats.entries,
            "Day rolled over, daily highscores reset"
        );
    }
}

/// Owns the highscore cache and everything that reads or writes it
pub struct HighscoreManager<Z: TimeZone = Local> {
    cache: Arc<EntryCache>,
    /// Shared by appends from cache push to persist, exclusive for a reload
    persist_gate: RwLock<()>,
    store: Box<dyn HighscoreStore>,
    resolver: Box<dyn NameResolver>,
    sink: Box<dyn ErrorSink>,
    clock: Arc<dyn SystemClock>,
    calculator: WindowCalculator<Z>,
    scheduler: MidnightScheduler<Z>,
    config: HighscoreConfig,
}

impl HighscoreManager<Local> {
    /// Starts building a manager over `store` in the local time zone
    pub fn builder(store: impl HighscoreStore + 'static) -> HighscoreManagerBuilder<Local> {
        HighscoreManagerBuilder::new(store)
    }
}

impl<Z> HighscoreManager<Z>
where
    Z: TimeZone + Send + Sync + 'static,
{
    /// Rebuilds the cache from storage and (re)arms the midnight timer
    ///
    /// Calling this again yields the same cache contents. A storage failure
    /// is reported to the error sink and leaves the cache empty.
    ///
    /// Waits for in-flight appends to finish persisting, so the rebuilt
    /// cache holds every entry that reached the store.
    pub async fn load(&self) -> LoadSummary {
        let span = spans::load(self.store.name());

        async {
            let started = Instant::now();
            let _gate = self.persist_gate.write().await;

            if let Err(e) = self.cache.rebuild(self.store.load_all()).await {
                self.sink.report(StoreOperation::Load, &e);
            }

            let stats = self.cache.stats().await;
            let summary = LoadSummary {
                objects: stats.objects,
                entries: stats.entries,
                elapsed: started.elapsed(),
            };

            info!(
                elapsed_ms = elapsed_millis(summary.elapsed),
                objects = summary.objects,
                entries = summary.entries,
                "Loaded highscores"
            );

            if self.config.midnight_updates {
                self.scheduler.arm();
            } else {
                self.scheduler.cancel();
            }

            summary
        }
        .instrument(span)
        .await
    }

    /// Records a new entry: cache first, then durable storage
    ///
    /// The cache lock is released before the store write. A reload issued
    /// meanwhile starts only after the write has landed.
    pub async fn append(&self, entry: ScoreEntry) -> AppendOutcome {
        let span = spans::append(entry.object_id(), self.store.name());

        async move {
            let _gate = self.persist_gate.read().await;
            let record = entry.clone();
            self.cache.push(entry).await;

            match self.store.append(&record).await {
                Ok(()) => AppendOutcome::Persisted,
                Err(e) => {
                    self.sink.report(StoreOperation::Append, &e);
                    AppendOutcome::CachedOnly
                }
            }
        }
        .instrument(span)
        .await
    }

    /// Stops the midnight timer and empties the cache
    pub async fn dispose(&self) {
        let was_armed = self.scheduler.cancel();
        self.cache.clear().await;
        info!(was_armed, "Disposed highscore manager");
    }

    /// Ranked rows for one object, window and strategy
    ///
    /// `Ok(None)` means the object has no entries at all. An object whose
    /// entries all fall outside the window yields `Ok(Some(vec![]))`.
    pub async fn query(
        &self,
        object_id: ObjectId,
        clear_type: ClearType,
        score_type: ScoreType,
    ) -> Result<Option<Vec<LeaderboardRow>>, WindowError> {
        let span = spans::query(object_id, clear_type, score_type);

        async {
            let Some(entries) = self.cache.get(object_id).await else {
                return Ok(None);
            };

            let now = self.clock.now().with_timezone(self.calculator.zone());
            let window = self.calculator.window(clear_type, &now)?;

            Ok(Some(rank_entries(
                &entries,
                &window,
                score_type,
                self.resolver.as_ref(),
            )))
        }
        .instrument(span)
        .await
    }

    /// Snapshot of an object's entries in recording order
    pub async fn entries(&self, object_id: ObjectId) -> Option<Vec<ScoreEntry>> {
        self.cache.get(object_id).await
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.stats().await
    }

    pub fn cache(&self) -> Arc<EntryCache> {
        Arc::clone(&self.cache)
    }

    pub fn config(&self) -> &HighscoreConfig {
        &self.config
    }

    pub fn calculator(&self) -> &WindowCalculator<Z> {
        &self.calculator
    }

    pub fn scheduler(&self) -> &MidnightScheduler<Z> {
        &self.scheduler
    }
}

/// Builder for [`HighscoreManager`]
///
/// Everything except the store has a default: the process configuration
/// from [`HighscoreConfig::default`], [`IdNameResolver`],
/// [`TracingErrorSink`], the system clock and the local time zone.
pub struct HighscoreManagerBuilder<Z: TimeZone = Local> {
    store: Box<dyn HighscoreStore>,
    config: Option<HighscoreConfig>,
    resolver: Box<dyn NameResolver>,
    sink: Box<dyn ErrorSink>,
    clock: Arc<dyn SystemClock>,
    midnight_task: Option<Arc<dyn MidnightTask>>,
    zone: Z,
}

impl HighscoreManagerBuilder<Local> {
    pub fn new(store: impl HighscoreStore + 'static) -> Self {
        Self {
            store: Box::new(store),
            config: None,
            resolver: Box::new(IdNameResolver),
            sink: Box::new(TracingErrorSink),
            clock: Arc::new(DefaultSystemClock),
            midnight_task: None,
            zone: Local,
        }
    }
}

impl<Z> HighscoreManagerBuilder<Z>
where
    Z: TimeZone + Send + Sync + 'static,
{
    pub fn config(mut self, config: HighscoreConfig) -> Self {
        self.config = Some(config);
        self
    }

    pub fn resolver(mut self, resolver: impl NameResolver + 'static) -> Self {
        self.resolver = Box::new(resolver);
        self
    }

    pub fn error_sink(mut self, sink: impl ErrorSink + 'static) -> Self {
        self.sink = Box::new(sink);
        self
    }

    pub fn clock(mut self, clock: Arc<dyn SystemClock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the default [`CacheSummaryTask`]
    pub fn midnight_task(mut self, task: Arc<dyn MidnightTask>) -> Self {
        self.midnight_task = Some(task);
        self
    }

    /// Time zone whose calendar defines days, weeks, months and midnight
    pub fn zone<Z2>(self, zone: Z2) -> HighscoreManagerBuilder<Z2>
    where
        Z2: TimeZone + Send + Sync + 'static,
    {
        HighscoreManagerBuilder {
            store: self.store,
            config: self.config,
            resolver: self.resolver,
            sink: self.sink,
            clock: self.clock,
            midnight_task: self.midnight_task,
            zone,
        }
    }

    pub fn build(self) -> HighscoreManager<Z> {
        let config = self.config.unwrap_or_default();
        let cache = Arc::new(EntryCache::new());
        let task = self
            .midnight_task
            .unwrap_or_else(|| Arc::new(CacheSummaryTask::new(Arc::clone(&cache))));

        HighscoreManager {
            persist_gate: RwLock::new(()),
            calculator: WindowCalculator::new(self.zone.clone(), config.week_start),
            scheduler: MidnightScheduler::new(self.zone, Arc::clone(&self.clock), task),
            cache,
            store: self.store,
            resolver: self.resolver,
            sink: self.sink,
            clock: self.clock,
            config,
        }
    }
}

/// Whole milliseconds, saturating at `u64::MAX`
fn elapsed_millis(elapsed: Duration) -> u64 {
    u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX)
}
