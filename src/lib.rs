// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Highscore boards for games
//!
//! Records scored attempts against game objects (typically a placed furniture
//! item) and ranks them into leaderboards over daily, weekly, monthly or
//! all-time windows, using one of three strategies:
//!
//! - `CLASSIC`: every attempt is a row
//! - `PERTEAM`: each team's best attempt is a row
//! - `MOSTWIN`: each team's number of wins is a row
//!
//! [`HighscoreManager`] is the entry point. It owns an in-memory cache built
//! from a [`HighscoreStore`] and a timer that fires at every local midnight.

mod cache;
mod clock;
pub mod config;
pub mod errors;
mod leaderboard;
mod manager;
mod resolver;
mod scheduler;
mod sink;
pub mod store;
mod tracing;
pub mod types;
mod window;

pub use cache::{CacheStats, EntryCache};
pub use clock::{DefaultSystemClock, ManualClock, SystemClock};
pub use config::{week_start_for_locale, HighscoreConfig, HighscoreConfigBuilder};
pub use errors::{EntryError, HighscoreError, ParseKindError, StoreError, WindowError};
pub use leaderboard::{qualifies, rank_entries};
pub use manager::{
    AppendOutcome, CacheSummaryTask, HighscoreManager, HighscoreManagerBuilder, LoadSummary,
};
pub use resolver::{IdNameResolver, MapNameResolver, NameResolver};
pub use scheduler::{MidnightScheduler, MidnightTask};
pub use sink::{ErrorSink, TracingErrorSink};
pub use store::{DiskStore, HighscoreStore, MemoryStore, NoOpStore, StoreOperation, StoredRecord};
pub use types::entry::{ObjectId, ParticipantId, ScoreEntry, TeamKey, UnixTimestamp};
pub use types::kinds::{ClearType, ScoreType};
pub use types::row::LeaderboardRow;
pub use window::{local_midnight, next_midnight, TimeWindow, WindowCalculator};
