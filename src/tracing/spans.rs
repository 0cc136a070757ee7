// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Span creation helpers for highscore operations.
//!
//! Telemetry concerns are kept out of business logic: instead of using
//! `#[instrument]` attributes directly on functions, each instrumented
//! operation has a corresponding span helper in this module.
//!
//! Usage pattern:
//! ```rust,ignore
//! pub async fn my_operation(&self, param: Type) -> Result<T> {
//!     let span = spans::my_operation(param_value);
//!     let _guard = span.enter();
//!     // Business logic here
//! }
//! ```

use tracing::{Level, Span};

use crate::types::entry::ObjectId;
use crate::types::kinds::{ClearType, ScoreType};

/// Create span for a full cache rebuild from the store.
///
/// Parent: None (root span for this operation)
#[inline]
pub(crate) fn load(store: &'static str) -> Span {
    tracing::span!(Level::INFO, "highscores.load", store = store)
}

/// Create span for appending one entry.
#[inline]
pub(crate) fn append(object_id: ObjectId, store: &'static str) -> Span {
    tracing::debug_span!("highscores.append", object_id = %object_id, store = store)
}

/// Create span for a leaderboard query.
///
/// Children: none; ranking runs synchronously inside this span
#[inline]
pub(crate) fn query(object_id: ObjectId, clear_type: ClearType, score_type: ScoreType) -> Span {
    tracing::debug_span!(
        "highscores.query",
        object_id = %object_id,
        clear_type = %clear_type,
        score_type = %score_type,
    )
}

/// Create span for one firing of the midnight task.
#[inline]
pub(crate) fn midnight(generation: u64) -> Span {
    tracing::info_span!("highscores.midnight", generation = generation)
}
