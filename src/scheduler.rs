// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Midnight scheduler: runs a task at every local midnight
//!
//! The scheduler is a two-state machine:
//!
//! - **Idle**: no timer pending
//! - **Armed**: a Tokio task is sleeping until the next local midnight
//!
//! [`arm`](MidnightScheduler::arm) moves Idle to Armed, or replaces the
//! pending timer (Armed to Armed). After each firing the task re-arms itself
//! for the following midnight. [`cancel`](MidnightScheduler::cancel) moves any
//! state to Idle and is safe to call when nothing is pending or while the
//! task is running.
//!
//! # Examples
//!
//! ```rust,ignore
//! use highscores::{DefaultSystemClock, MidnightScheduler, MidnightTask};
//! use std::sync::Arc;
//!
//! struct Refresh;
//!
//! #[async_trait::async_trait]
//! impl MidnightTask for Refresh {
//!     async fn run(&self) {
//!         println!("new day");
//!     }
//! }
//!
//! let scheduler = MidnightScheduler::new(
//!     chrono::Local,
//!     Arc::new(DefaultSystemClock),
//!     Arc::new(Refresh),
//! );
//! scheduler.arm();
//! // ...
//! scheduler.cancel();
//! ```

use async_trait::async_trait;
use chrono::{DateTime, TimeZone, Utc};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::task::JoinHandle;
use tracing::{debug, error, info, warn, Instrument};

use crate::clock::SystemClock;
use crate::errors::WindowError;
use crate::tracing::spans;
use crate::window::next_midnight;

/// Work performed at every local midnight
#[async_trait]
pub trait MidnightTask: Send + Sync {
    async fn run(&self);
}

enum SchedulerState {
    Idle,
    Armed { handle: JoinHandle<()>, generation: u64 },
}

/// Owns the single recurring midnight timer
pub struct MidnightScheduler<Z: TimeZone> {
    zone: Z,
    clock: Arc<dyn SystemClock>,
    task: Arc<dyn MidnightTask>,
    state: Mutex<SchedulerState>,
    generation: AtomicU64,
    /// Generation allowed to fire; 0 when idle
    active: Arc<AtomicU64>,
    firings: Arc<AtomicU64>,
}

impl<Z> MidnightScheduler<Z>
where
    Z: TimeZone + Send + Sync + 'static,
{
    /// Creates an idle scheduler
    pub fn new(zone: Z, clock: Arc<dyn SystemClock>, task: Arc<dyn MidnightTask>) -> Self {
        Self {
            zone,
            clock,
            task,
            state: Mutex::new(SchedulerState::Idle),
            generation: AtomicU64::new(0),
            active: Arc::new(AtomicU64::new(0)),
            firings: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Arms the timer for the next local midnight, replacing any pending timer
    ///
    /// Must be called from within a Tokio runtime; outside one the scheduler
    /// logs a warning and stays idle.
    pub fn arm(&self) {
        let runtime = match tokio::runtime::Handle::try_current() {
            Ok(runtime) => runtime,
            Err(e) => {
                warn!(error = %e, "No Tokio runtime, midnight updates not armed");
                return;
            }
        };

        let mut state = self.lock_state();
        if let SchedulerState::Armed { handle, generation } = &*state {
            debug!(generation, "Replacing armed midnight timer");
            handle.abort();
        }

        let generation = self.generation.fetch_add(1, Ordering::SeqCst) + 1;
        self.active.store(generation, Ordering::SeqCst);
        let handle = runtime.spawn(run_timer(
            self.zone.clone(),
            Arc::clone(&self.clock),
            Arc::clone(&self.task),
            Arc::clone(&self.firings),
            Arc::clone(&self.active),
            generation,
        ));

        *state = SchedulerState::Armed { handle, generation };
    }

    /// Stops the timer; returns true if one was pending
    ///
    /// A timer that wakes after this call returns skips the task. On a
    /// multi-threaded runtime a timer that passed that check just before the
    /// call can still start one run. A run in progress is abandoned at its
    /// next await point.
    pub fn cancel(&self) -> bool {
        let mut state = self.lock_state();
        self.active.store(0, Ordering::SeqCst);
        match std::mem::replace(&mut *state, SchedulerState::Idle) {
            SchedulerState::Armed { handle, generation } => {
                handle.abort();
                debug!(generation, "Cancelled midnight timer");
                true
            }
            SchedulerState::Idle => false,
        }
    }

    pub fn is_armed(&self) -> bool {
        matches!(
            &*self.lock_state(),
            SchedulerState::Armed { handle, .. } if !handle.is_finished()
        )
    }

    /// Number of completed task runs across all arms
    pub fn firings(&self) -> u64 {
        self.firings.load(Ordering::SeqCst)
    }

    /// The next local midnight after the clock's current instant
    pub fn next_run(&self) -> Result<DateTime<Z>, WindowError> {
        next_midnight(&self.clock.now().with_timezone(&self.zone))
    }

    fn lock_state(&self) -> std::sync::MutexGuard<'_, SchedulerState> {
        self.state.lock().unwrap_or_else(|e| e.into_inner())
    }
}

impl<Z: TimeZone> Drop for MidnightScheduler<Z> {
    fn drop(&mut self) {
        let state = self.state.get_mut().unwrap_or_else(|e| e.into_inner());
        if let SchedulerState::Armed { handle, .. } = state {
            handle.abort();
        }
    }
}

/// Timer loop: sleep until midnight, run the task, repeat
///
/// Each target is computed from the later of "now" and the previous target,
/// so an early wake-up never fires the same midnight twice. The loop exits
/// without running the task once `active` no longer holds its generation.
async fn run_timer<Z: TimeZone>(
    zone: Z,
    clock: Arc<dyn SystemClock>,
    task: Arc<dyn MidnightTask>,
    firings: Arc<AtomicU64>,
    active: Arc<AtomicU64>,
    generation: u64,
) {
    let mut previous: Option<DateTime<Utc>> = None;

    loop {
        let now = clock.now();
        let (target, delay) = match next_target(&zone, now, previous) {
            Ok(next) => next,
            Err(e) => {
                error!(generation, error = %e, "Cannot compute next midnight, timer stopped");
                return;
            }
        };

        debug!(
            generation,
            target = %target,
            delay_secs = delay.as_secs(),
            "Midnight timer armed"
        );
        tokio::time::sleep(delay).await;

        if active.load(Ordering::SeqCst) != generation {
            debug!(generation, "Midnight timer superseded, skipping task");
            return;
        }

        task.run().instrument(spans::midnight(generation)).await;
        let total = firings.fetch_add(1, Ordering::SeqCst) + 1;
        info!(generation, target = %target, firings = total, "Midnight task completed");

        previous = Some(target);
    }
}

fn next_target<Z: TimeZone>(
    zone: &Z,
    now: DateTime<Utc>,
    previous: Option<DateTime<Utc>>,
) -> Result<(DateTime<Utc>, Duration), WindowError> {
    let base = previous.map_or(now, |previous| previous.max(now));
    let target = next_midnight(&base.with_timezone(zone))?.with_timezone(&Utc);
    let delay = (target - now).to_std().unwrap_or_default();
    Ok((target, delay))
}
