// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Leaderboard aggregation: filter, group and rank score entries
//!
//! [`rank_entries`] is the pure core of a leaderboard query. Given an object's
//! entries in recording order, a [`TimeWindow`] and a [`ScoreType`], it:
//!
//! 1. keeps entries whose timestamp falls inside the window (and, for
//!    `MOSTWIN`, only wins)
//! 2. reduces them per strategy:
//!    - `CLASSIC`: every qualifying entry is a row
//!    - `PERTEAM`: the best entry of each team is a row
//!    - `MOSTWIN`: each team's win count is a row
//! 3. sorts rows by descending value
//!
//! # Ordering
//!
//! Rows with equal values keep the order in which their entries were
//! recorded (cache order), because every sort here is stable. Teams are
//! ordered by their first qualifying entry before sorting, and a team with
//! several tied best scores is represented by the earliest of them.
//!
//! # Team identity
//!
//! Teams are grouped by the exact ordered participant sequence. The same
//! players recorded in a different order form a different team.

use std::collections::HashMap;

use crate::resolver::NameResolver;
use crate::types::entry::{ScoreEntry, TeamKey};
use crate::types::kinds::ScoreType;
use crate::types::row::LeaderboardRow;
use crate::window::TimeWindow;

/// Ranks an object's entries for one window and strategy
///
/// # Examples
///
/// ```
/// use highscores::{
///     rank_entries, IdNameResolver, LeaderboardRow, ObjectId, ParticipantId, ScoreEntry,
///     ScoreType, TimeWindow, UnixTimestamp,
/// };
///
/// let entry = |team: u32, score: i32, win: bool| {
///     ScoreEntry::new(ObjectId(42), vec![ParticipantId(team)], score, win, UnixTimestamp(100))
///         .unwrap()
/// };
/// let entries = vec![entry(1, 10, true), entry(1, 15, true), entry(2, 20, false)];
///
/// let rows = rank_entries(&entries, &TimeWindow::Unbounded, ScoreType::PerTeam, &IdNameResolver);
/// assert_eq!(
///     rows,
///     vec![
///         LeaderboardRow::new(vec!["2".into()], 20),
///         LeaderboardRow::new(vec!["1".into()], 15),
///     ]
/// );
/// ```
pub fn rank_entries(
    entries: &[ScoreEntry],
    window: &TimeWindow,
    score_type: ScoreType,
    resolver: &dyn NameResolver,
) -> Vec<LeaderboardRow> {
    let qualifying: Vec<&ScoreEntry> = entries
        .iter()
        .filter(|entry| qualifies(entry, window, score_type))
        .collect();

    let mut rows: Vec<LeaderboardRow> = match score_type {
        ScoreType::Classic => qualifying
            .iter()
            .map(|entry| score_row(entry, resolver))
            .collect(),
        ScoreType::PerTeam => group_by_team(&qualifying)
            .into_iter()
            .filter_map(|team| best_entry(&team))
            .map(|entry| score_row(entry, resolver))
            .collect(),
        ScoreType::MostWin => group_by_team(&qualifying)
            .into_iter()
            .filter_map(|team| {
                let first = team.first()?;
                Some(LeaderboardRow::new(
                    resolver.display_names(first.participants()),
                    team.len() as i64,
                ))
            })
            .collect(),
    };

    rows.sort_by(LeaderboardRow::rank_cmp);
    rows
}

/// Time-and-strategy filter applied before any grouping
pub fn qualifies(entry: &ScoreEntry, window: &TimeWindow, score_type: ScoreType) -> bool {
    window.contains(entry.timestamp()) && (score_type != ScoreType::MostWin || entry.is_win())
}

fn score_row(entry: &ScoreEntry, resolver: &dyn NameResolver) -> LeaderboardRow {
    LeaderboardRow::new(
        resolver.display_names(entry.participants()),
        i64::from(entry.score()),
    )
}

/// Groups entries by ordered participant sequence, teams in first-seen order
///
/// Every returned group is non-empty and keeps its entries in input order.
fn group_by_team<'a>(entries: &[&'a ScoreEntry]) -> Vec<Vec<&'a ScoreEntry>> {
    let mut index: HashMap<TeamKey<'a>, usize> = HashMap::new();
    let mut teams: Vec<Vec<&'a ScoreEntry>> = Vec::new();

    for &entry in entries {
        let slot = *index.entry(entry.team()).or_insert_with(|| {
            teams.push(Vec::new());
            teams.len() - 1
        });
        teams[slot].push(entry);
    }

    teams
}

/// Highest-scoring entry of a team; the earliest one wins a tie
fn best_entry<'a>(team: &[&'a ScoreEntry]) -> Option<&'a ScoreEntry> {
    team.iter()
        .copied()
        .reduce(|best, entry| if entry.score() > best.score() { entry } else { best })
}
