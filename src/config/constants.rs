// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Week-start conventions by region
//!
//! This module centralizes the CLDR "first day of week" territory data used to
//! derive the weekly leaderboard window from the process locale. Regions not
//! listed start their week on Monday.

use chrono::Weekday;

/// Environment variables consulted, in priority order, for the process locale
pub const LOCALE_ENV_VARS: [&str; 3] = ["LC_ALL", "LC_TIME", "LANG"];

/// Regions whose week starts on Sunday
pub const SUNDAY_START_REGIONS: &[&str] = &[
    "AG", "AS", "BD", "BR", "BS", "BT", "BW", "BZ", "CA", "CN", "CO", "DM", "DO", "ET", "GT", "GU",
    "HK", "HN", "ID", "IL", "IN", "JM", "JP", "KE", "KH", "KR", "LA", "MH", "MM", "MO", "MT", "MX",
    "MZ", "NI", "NP", "PA", "PE", "PH", "PK", "PR", "PT", "PY", "SA", "SG", "SV", "TH", "TT", "TW",
    "UM", "US", "VE", "VI", "WS", "YE", "ZA", "ZW",
];

/// Regions whose week starts on Saturday
pub const SATURDAY_START_REGIONS: &[&str] = &[
    "AE", "AF", "BH", "DJ", "DZ", "EG", "IQ", "IR", "JO", "KW", "LY", "OM", "QA", "SD", "SY",
];

/// Regions whose week starts on Friday
pub const FRIDAY_START_REGIONS: &[&str] = &["MV"];

/// First day of week for a two-letter region code
pub fn week_start_for_region(region: &str) -> Weekday {
    let region = region.to_ascii_uppercase();
    let region = region.as_str();
    if SUNDAY_START_REGIONS.contains(&region) {
        Weekday::Sun
    } else if SATURDAY_START_REGIONS.contains(&region) {
        Weekday::Sat
    } else if FRIDAY_START_REGIONS.contains(&region) {
        Weekday::Fri
    } else {
        Weekday::Mon
    }
}
