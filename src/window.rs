// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Time window calculation for leaderboard clear types
//!
//! Converts "now" plus a [`ClearType`] into a half-open epoch-second interval
//! `[start, end)` evaluated in a local time zone. Both boundaries are derived
//! from a single captured instant, so a query evaluated exactly at midnight
//! never mixes yesterday's start with today's end.
//!
//! # Examples
//!
//! ```rust
//! use chrono::{TimeZone, Utc, Weekday};
//! use highscores::{ClearType, TimeWindow, UnixTimestamp, WindowCalculator};
//!
//! let calculator = WindowCalculator::new(Utc, Weekday::Mon);
//! let now = Utc.with_ymd_and_hms(2025, 10, 15, 12, 30, 0).unwrap();
//!
//! let daily = calculator.window(ClearType::Daily, &now).unwrap();
//! assert_eq!(
//!     daily,
//!     TimeWindow::Bounded {
//!         start: UnixTimestamp(1_760_486_400),
//!         end: UnixTimestamp(1_760_572_800),
//!     }
//! );
//! assert!(calculator.window(ClearType::AllTime, &now).unwrap().is_unbounded());
//! ```

use chrono::{
    DateTime, Datelike, LocalResult, NaiveDate, NaiveTime, Offset, TimeDelta, TimeZone, Weekday,
};
use serde::{Deserialize, Serialize};
use tracing::trace;

use crate::errors::WindowError;
use crate::types::entry::UnixTimestamp;
use crate::types::kinds::ClearType;

/// A leaderboard time window
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TimeWindow {
    /// Half-open interval: `start` inclusive, `end` exclusive
    Bounded {
        start: UnixTimestamp,
        end: UnixTimestamp,
    },
    /// Matches every timestamp
    Unbounded,
}

impl TimeWindow {
    /// Returns true if `ts` falls inside the window
    ///
    /// An entry recorded exactly at `end` belongs to the next window.
    pub fn contains(&self, ts: UnixTimestamp) -> bool {
        match self {
            TimeWindow::Bounded { start, end } => *start <= ts && ts < *end,
            TimeWindow::Unbounded => true,
        }
    }

    pub fn is_unbounded(&self) -> bool {
        matches!(self, TimeWindow::Unbounded)
    }

    /// Window length in seconds, `None` when unbounded
    pub fn duration_secs(&self) -> Option<i64> {
        match self {
            TimeWindow::Bounded { start, end } => Some(end.0 - start.0),
            TimeWindow::Unbounded => None,
        }
    }
}

/// Computes leaderboard windows in a given time zone
///
/// The zone is usually [`chrono::Local`]; tests use [`chrono::Utc`] or a
/// [`chrono::FixedOffset`] for deterministic boundaries.
#[derive(Debug, Clone)]
pub struct WindowCalculator<Z: TimeZone> {
    zone: Z,
    week_start: Weekday,
}

impl<Z: TimeZone> WindowCalculator<Z> {
    pub fn new(zone: Z, week_start: Weekday) -> Self {
        Self { zone, week_start }
    }

    pub fn zone(&self) -> &Z {
        &self.zone
    }

    pub fn week_start(&self) -> Weekday {
        self.week_start
    }

    /// Computes the window for `clear_type` containing `now`
    ///
    /// `now` may be in any zone; it is converted to the calculator's zone
    /// before the local calendar date is taken.
    ///
    /// # Errors
    ///
    /// Returns [`WindowError`] if a boundary date leaves chrono's supported
    /// range or its local midnight cannot be placed on the timeline.
    pub fn window<Tz: TimeZone>(
        &self,
        clear_type: ClearType,
        now: &DateTime<Tz>,
    ) -> Result<TimeWindow, WindowError> {
        let today = now.with_timezone(&self.zone).date_naive();

        let (first, next_first) = match clear_type {
            ClearType::AllTime => return Ok(TimeWindow::Unbounded),
            ClearType::Daily => (today, add_days(today, 1)?),
            ClearType::Weekly => {
                let first = week_start_on_or_before(today, self.week_start)?;
                (first, add_days(first, 7)?)
            }
            ClearType::Monthly => {
                let first = today.with_day(1).ok_or_else(|| {
                    WindowError::date_overflow(today, "first day of month")
                })?;
                (first, first_of_next_month(first)?)
            }
        };

        let start = local_midnight(&self.zone, first)?;
        let end = local_midnight(&self.zone, next_first)?;

        let window = TimeWindow::Bounded {
            start: UnixTimestamp::from_datetime(&start),
            end: UnixTimestamp::from_datetime(&end),
        };

        trace!(
            clear_type = %clear_type,
            first = %first,
            next_first = %next_first,
            ?window,
            "Computed leaderboard window"
        );

        Ok(window)
    }
}

/// Resolves 00:00 local time on `date` to an instant in `zone`
///
/// An ambiguous midnight (clocks set back across it) resolves to the earlier
/// instant. A midnight skipped by a forward jump is interpreted with the
/// offset in effect before the jump, which lands at the first valid instant
/// of the day.
pub fn local_midnight<Z: TimeZone>(zone: &Z, date: NaiveDate) -> Result<DateTime<Z>, WindowError> {
    let midnight = date.and_time(NaiveTime::MIN);

    match zone.from_local_datetime(&midnight) {
        LocalResult::Single(dt) => Ok(dt),
        LocalResult::Ambiguous(earliest, _) => Ok(earliest),
        LocalResult::None => {
            let day_before = midnight
                .checked_sub_signed(TimeDelta::days(1))
                .ok_or_else(|| WindowError::date_overflow(date, "day before midnight gap"))?;
            let offset_before = zone
                .from_local_datetime(&day_before)
                .earliest()
                .ok_or_else(|| WindowError::unresolvable_midnight(date))?
                .offset()
                .fix();
            let utc = midnight
                .checked_sub_signed(TimeDelta::seconds(i64::from(
                    offset_before.local_minus_utc(),
                )))
                .ok_or_else(|| WindowError::unresolvable_midnight(date))?;
            Ok(zone.from_utc_datetime(&utc))
        }
    }
}

/// First local midnight strictly after `now`, in `now`'s zone
pub fn next_midnight<Z: TimeZone>(now: &DateTime<Z>) -> Result<DateTime<Z>, WindowError> {
    let tomorrow = add_days(now.date_naive(), 1)?;
    local_midnight(&now.timezone(), tomorrow)
}

fn add_days(date: NaiveDate, days: u64) -> Result<NaiveDate, WindowError> {
    date.checked_add_days(chrono::Days::new(days))
        .ok_or_else(|| WindowError::date_overflow(date, format!("adding {days} days")))
}

/// Most recent `week_start` on or before `date`
fn week_start_on_or_before(date: NaiveDate, week_start: Weekday) -> Result<NaiveDate, WindowError> {
    let back = (7 + date.weekday().num_days_from_monday() - week_start.num_days_from_monday()) % 7;
    date.checked_sub_days(chrono::Days::new(u64::from(back)))
        .ok_or_else(|| WindowError::date_overflow(date, format!("going back {back} days")))
}

fn first_of_next_month(first: NaiveDate) -> Result<NaiveDate, WindowError> {
    let (year, month) = if first.month() == 12 {
        (first.year() + 1, 1)
    } else {
        (first.year(), first.month() + 1)
    };
    NaiveDate::from_ymd_opt(year, month, 1)
        .ok_or_else(|| WindowError::date_overflow(first, "first day of next month"))
}
