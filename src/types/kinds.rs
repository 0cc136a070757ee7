// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Leaderboard query parameters: clear type (time window) and score type (strategy)
//!
//! Both enums print and parse as their upper-case names (`DAILY`, `PERTEAM`)
//! and convert from the numeric type ids stored in game item configuration.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::errors::ParseKindError;

/// Recurrence granularity bounding which entries qualify for a query
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ClearType {
    /// From local midnight today until local midnight tomorrow
    Daily,
    /// From the start of the configured week until seven days later
    Weekly,
    /// From the first of the month until the first of the next month
    Monthly,
    /// No time bound
    AllTime,
}

impl ClearType {
    pub const ALL: [ClearType; 4] = [
        ClearType::Daily,
        ClearType::Weekly,
        ClearType::Monthly,
        ClearType::AllTime,
    ];

    /// Converts the item configuration type id (ALLTIME=0, DAILY=1, WEEKLY=2, MONTHLY=3)
    pub fn from_type_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(ClearType::AllTime),
            1 => Some(ClearType::Daily),
            2 => Some(ClearType::Weekly),
            3 => Some(ClearType::Monthly),
            _ => None,
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            ClearType::AllTime => 0,
            ClearType::Daily => 1,
            ClearType::Weekly => 2,
            ClearType::Monthly => 3,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ClearType::Daily => "DAILY",
            ClearType::Weekly => "WEEKLY",
            ClearType::Monthly => "MONTHLY",
            ClearType::AllTime => "ALLTIME",
        }
    }
}

impl fmt::Display for ClearType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClearType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ClearType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError::unknown_clear_type(s))
    }
}

/// Scoring strategy used to reduce qualifying entries into rows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ScoreType {
    /// Every qualifying entry is ranked by score
    Classic,
    /// Best entry per team
    PerTeam,
    /// Number of wins per team
    MostWin,
}

impl ScoreType {
    pub const ALL: [ScoreType; 3] = [ScoreType::Classic, ScoreType::PerTeam, ScoreType::MostWin];

    /// Converts the item configuration type id (PERTEAM=0, MOSTWIN=1, CLASSIC=2)
    pub fn from_type_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(ScoreType::PerTeam),
            1 => Some(ScoreType::MostWin),
            2 => Some(ScoreType::Classic),
            _ => None,
        }
    }

    pub fn type_id(&self) -> u8 {
        match self {
            ScoreType::PerTeam => 0,
            ScoreType::MostWin => 1,
            ScoreType::Classic => 2,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ScoreType::Classic => "CLASSIC",
            ScoreType::PerTeam => "PERTEAM",
            ScoreType::MostWin => "MOSTWIN",
        }
    }
}

impl fmt::Display for ScoreType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScoreType {
    type Err = ParseKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ScoreType::ALL
            .into_iter()
            .find(|kind| kind.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ParseKindError::unknown_score_type(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clear_type_ids() {
        for kind in ClearType::ALL {
            assert_eq!(ClearType::from_type_id(kind.type_id()), Some(kind));
        }
        assert_eq!(ClearType::from_type_id(1), Some(ClearType::Daily));
        assert_eq!(ClearType::from_type_id(4), None);
    }

    #[test]
    fn test_score_type_ids() {
        assert_eq!(ScoreType::from_type_id(0), Some(ScoreType::PerTeam));
        assert_eq!(ScoreType::from_type_id(1), Some(ScoreType::MostWin));
        assert_eq!(ScoreType::from_type_id(2), Some(ScoreType::Classic));
        assert_eq!(ScoreType::from_type_id(3), None);
    }

    #[test]
    fn test_parse_names() {
        assert_eq!("weekly".parse::<ClearType>().unwrap(), ClearType::Weekly);
        assert_eq!("ALLTIME".parse::<ClearType>().unwrap(), ClearType::AllTime);
        assert_eq!(" PerTeam ".parse::<ScoreType>().unwrap(), ScoreType::PerTeam);
    }

    #[test]
    fn test_parse_unknown_names() {
        assert_eq!(
            "hourly".parse::<ClearType>(),
            Err(ParseKindError::unknown_clear_type("hourly"))
        );

        let err = "TOPTEN".parse::<ScoreType>().unwrap_err();
        assert!(matches!(err, ParseKindError::UnknownScoreType { .. }));
        assert_eq!(err.to_string(), "Unknown score type: TOPTEN");
    }

    #[test]
    fn test_serde_names_match_display() {
        let json = serde_json::to_string(&ScoreType::MostWin).unwrap();
        assert_eq!(json, "\"MOSTWIN\"");
        let kind: ClearType = serde_json::from_str("\"MONTHLY\"").unwrap();
        assert_eq!(kind.to_string(), "MONTHLY");
    }
}
