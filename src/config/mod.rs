// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Configuration for highscore boards
//!
//! This module controls the calendar conventions used by leaderboard windows
//! and whether the midnight rollover scheduler runs.
//!
//! # Example: Using defaults
//!
//! ```rust
//! use highscores::HighscoreConfig;
//!
//! // Week start derived from LC_ALL / LC_TIME / LANG, midnight updates enabled
//! let config = HighscoreConfig::default();
//! assert!(config.midnight_updates);
//! ```
//!
//! # Example: Custom configuration
//!
//! ```rust
//! use chrono::Weekday;
//! use highscores::HighscoreConfigBuilder;
//!
//! let config = HighscoreConfigBuilder::new()
//!     .locale("en_US.UTF-8")
//!     .midnight_updates(false)
//!     .build();
//! assert_eq!(config.week_start, Weekday::Sun);
//! ```

use chrono::Weekday;

pub mod constants;

use constants::{week_start_for_region, LOCALE_ENV_VARS};

/// Configuration for a [`HighscoreManager`](crate::HighscoreManager)
///
/// Use [`HighscoreConfigBuilder`] for a fluent API to construct instances.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HighscoreConfig {
    /// First day of the weekly leaderboard window
    /// Default: derived from the process locale, Monday if unknown
    pub week_start: Weekday,

    /// Arm a timer that fires at every local midnight after `load()`
    /// Default: true
    pub midnight_updates: bool,
}

impl Default for HighscoreConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

impl HighscoreConfig {
    /// Create config with the week start taken from the process locale
    ///
    /// Reads `LC_ALL`, `LC_TIME` and `LANG` in that order and uses the first
    /// non-empty value.
    pub fn from_env() -> Self {
        let locale = LOCALE_ENV_VARS
            .iter()
            .filter_map(|var| std::env::var(var).ok())
            .find(|value| !value.trim().is_empty());

        Self {
            week_start: locale
                .as_deref()
                .map(week_start_for_locale)
                .unwrap_or(Weekday::Mon),
            midnight_updates: true,
        }
    }

    /// Create minimal config: ISO weeks starting Monday, no midnight timer
    ///
    /// Suitable for tests and for short-lived processes.
    ///
    /// # Example
    ///
    /// ```rust
    /// use chrono::Weekday;
    /// use highscores::HighscoreConfig;
    ///
    /// let config = HighscoreConfig::minimal();
    /// assert_eq!(config.week_start, Weekday::Mon);
    /// assert!(!config.midnight_updates);
    /// ```
    pub fn minimal() -> Self {
        Self {
            week_start: Weekday::Mon,
            midnight_updates: false,
        }
    }

    /// Last day of the weekly window: six days after `week_start`, wrapping
    pub fn week_end(&self) -> Weekday {
        self.week_start.pred()
    }
}

/// First day of week for a POSIX or BCP 47 locale string
///
/// Accepts `en_US.UTF-8`, `en-US`, `pt_BR@euro` and similar. Locales without a
/// region (`C`, `POSIX`, `en`) fall back to Monday.
///
/// # Example
///
/// ```rust
/// use chrono::Weekday;
/// use highscores::week_start_for_locale;
///
/// assert_eq!(week_start_for_locale("en_US.UTF-8"), Weekday::Sun);
/// assert_eq!(week_start_for_locale("de-DE"), Weekday::Mon);
/// assert_eq!(week_start_for_locale("ar_EG"), Weekday::Sat);
/// assert_eq!(week_start_for_locale("C"), Weekday::Mon);
/// ```
pub fn week_start_for_locale(locale: &str) -> Weekday {
    let tag = locale
        .split(['.', '@'])
        .next()
        .unwrap_or_default()
        .trim();

    tag.split(['_', '-'])
        .skip(1)
        .find(|part| part.len() == 2 && part.chars().all(|c| c.is_ascii_alphabetic()))
        .map(week_start_for_region)
        .unwrap_or(Weekday::Mon)
}

/// Builder for [`HighscoreConfig`]
///
/// # Example
///
/// ```rust
/// use chrono::Weekday;
/// use highscores::HighscoreConfigBuilder;
///
/// let config = HighscoreConfigBuilder::new()
///     .week_start(Weekday::Sun)
///     .build();
/// assert_eq!(config.week_end(), Weekday::Sat);
/// ```
pub struct HighscoreConfigBuilder {
    config: HighscoreConfig,
}

impl Default for HighscoreConfigBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl HighscoreConfigBuilder {
    /// Create a new builder starting from [`HighscoreConfig::minimal`]
    pub fn new() -> Self {
        Self {
            config: HighscoreConfig::minimal(),
        }
    }

    /// Start from the environment-derived defaults
    pub fn from_env() -> Self {
        Self {
            config: HighscoreConfig::from_env(),
        }
    }

    /// Set the first day of the weekly window explicitly
    pub fn week_start(mut self, day: Weekday) -> Self {
        self.config.week_start = day;
        self
    }

    /// Derive the first day of the weekly window from a locale string
    pub fn locale(mut self, locale: &str) -> Self {
        self.config.week_start = week_start_for_locale(locale);
        self
    }

    /// Enable or disable the midnight rollover timer
    pub fn midnight_updates(mut self, enabled: bool) -> Self {
        self.config.midnight_updates = enabled;
        self
    }

    /// Build the final configuration
    pub fn build(self) -> HighscoreConfig {
        self.config
    }
}
