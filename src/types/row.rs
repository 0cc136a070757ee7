// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Ranked leaderboard rows

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// One ranked row of a leaderboard
///
/// Rows are derived per query and never persisted. `value` is the raw score
/// for `CLASSIC` and `PERTEAM` boards and the win count for `MOSTWIN` boards.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LeaderboardRow {
    /// Display names of the team, in participant order
    pub display_names: Vec<String>,
    /// Score or win count
    pub value: i64,
}

impl LeaderboardRow {
    pub fn new(display_names: Vec<String>, value: i64) -> Self {
        Self {
            display_names,
            value,
        }
    }

    /// Row ordering: highest value first
    ///
    /// Equal values compare equal; callers use a stable sort so tied rows keep
    /// the order in which their entries were recorded.
    pub fn rank_cmp(&self, other: &Self) -> Ordering {
        other.value.cmp(&self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rank_cmp_orders_descending() {
        let low = LeaderboardRow::new(vec!["a".into()], 5);
        let high = LeaderboardRow::new(vec!["b".into()], 50);

        assert_eq!(high.rank_cmp(&low), Ordering::Less);
        assert_eq!(low.rank_cmp(&high), Ordering::Greater);
        assert_eq!(low.rank_cmp(&low.clone()), Ordering::Equal);
    }
}
