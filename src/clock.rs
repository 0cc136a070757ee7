// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Wall clock abstraction used for window calculation and midnight scheduling

use chrono::{DateTime, Utc};
use std::sync::Mutex;

/// Defines the physical clock used to evaluate "now" for leaderboard windows
/// and to compute the delay until the next local midnight.
pub trait SystemClock: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

/// Reads the operating system clock
#[derive(Debug, Clone, Copy, Default)]
pub struct DefaultSystemClock;

impl DefaultSystemClock {
    pub fn new() -> Self {
        Self
    }
}

impl SystemClock for DefaultSystemClock {
    fn now(&self) -> DateTime<Utc> {
        Utc::now()
    }
}

/// A clock that returns a settable instant
///
/// Useful for tests and for replaying leaderboards as of a past date.
///
/// # Examples
///
/// ```
/// use chrono::{TimeZone, Utc};
/// use highscores::{ManualClock, SystemClock};
///
/// let clock = ManualClock::new(Utc.with_ymd_and_hms(2025, 10, 15, 12, 0, 0).unwrap());
/// clock.advance(chrono::TimeDelta::hours(13));
/// assert_eq!(clock.now(), Utc.with_ymd_and_hms(2025, 10, 16, 1, 0, 0).unwrap());
/// ```
#[derive(Debug)]
pub struct ManualClock {
    now: Mutex<DateTime<Utc>>,
}

impl ManualClock {
    pub fn new(now: DateTime<Utc>) -> Self {
        Self {
            now: Mutex::new(now),
        }
    }

    pub fn set(&self, now: DateTime<Utc>) {
        *self.now.lock().unwrap_or_else(|e| e.into_inner()) = now;
    }

    pub fn advance(&self, delta: chrono::TimeDelta) {
        let mut now = self.now.lock().unwrap_or_else(|e| e.into_inner());
        *now += delta;
    }
}

impl SystemClock for ManualClock {
    fn now(&self) -> DateTime<Utc> {
        *self.now.lock().unwrap_or_else(|e| e.into_inner())
    }
}
