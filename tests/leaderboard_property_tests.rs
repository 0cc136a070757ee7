// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Property-based tests for leaderboard ranking
//!
//! These tests use proptest to validate invariants of `rank_entries` across
//! arbitrary entry histories and windows.

use highscores::{
    qualifies, rank_entries, IdNameResolver, ObjectId, ParticipantId, ScoreEntry, ScoreType,
    TimeWindow, UnixTimestamp,
};
use proptest::prelude::*;
use std::collections::HashSet;

const BASE: i64 = 1_760_486_400;

// Helper to generate a small team so collisions between entries are common
fn arb_team() -> impl Strategy<Value = Vec<ParticipantId>> {
    prop::collection::vec((0u32..4).prop_map(ParticipantId), 1..=3)
}

fn arb_entry() -> impl Strategy<Value = ScoreEntry> {
    (arb_team(), -50i32..=50, any::<bool>(), 0i64..(3 * 86_400)).prop_map(
        |(team, score, is_win, offset)| {
            ScoreEntry::new(ObjectId(42), team, score, is_win, UnixTimestamp(BASE + offset))
                .unwrap()
        },
    )
}

fn arb_window() -> impl Strategy<Value = TimeWindow> {
    prop_oneof![
        Just(TimeWindow::Unbounded),
        (0i64..(2 * 86_400), 1i64..=86_400).prop_map(|(start, len)| TimeWindow::Bounded {
            start: UnixTimestamp(BASE + start),
            end: UnixTimestamp(BASE + start + len),
        }),
    ]
}

fn arb_score_type() -> impl Strategy<Value = ScoreType> {
    prop_oneof![
        Just(ScoreType::Classic),
        Just(ScoreType::PerTeam),
        Just(ScoreType::MostWin),
    ]
}

fn qualifying_teams(entries: &[ScoreEntry], window: &TimeWindow, score_type: ScoreType) -> usize {
    entries
        .iter()
        .filter(|e| qualifies(e, window, score_type))
        .map(|e| e.participants().to_vec())
        .collect::<HashSet<_>>()
        .len()
}

proptest! {
    /// Property: Classic yields one row per qualifying entry
    #[test]
    fn prop_classic_length_matches_filter(
        entries in prop::collection::vec(arb_entry(), 0..40),
        window in arb_window(),
    ) {
        let rows = rank_entries(&entries, &window, ScoreType::Classic, &IdNameResolver);
        let expected = entries.iter().filter(|e| window.contains(e.timestamp())).count();
        prop_assert_eq!(rows.len(), expected);
    }

    /// Property: grouped strategies yield exactly one row per distinct ordered team
    #[test]
    fn prop_grouped_rows_match_team_count(
        entries in prop::collection::vec(arb_entry(), 0..40),
        window in arb_window(),
        score_type in prop_oneof![Just(ScoreType::PerTeam), Just(ScoreType::MostWin)],
    ) {
        let rows = rank_entries(&entries, &window, score_type, &IdNameResolver);
        prop_assert_eq!(rows.len(), qualifying_teams(&entries, &window, score_type));
    }

    /// Property: rows are always sorted by descending value
    #[test]
    fn prop_rows_sorted_descending(
        entries in prop::collection::vec(arb_entry(), 0..40),
        window in arb_window(),
        score_type in arb_score_type(),
    ) {
        let rows = rank_entries(&entries, &window, score_type, &IdNameResolver);
        prop_assert!(rows.windows(2).all(|pair| pair[0].value >= pair[1].value));
    }

    /// Property: MostWin counts sum to the number of qualifying wins
    #[test]
    fn prop_most_win_counts_only_wins(
        entries in prop::collection::vec(arb_entry(), 0..40),
        window in arb_window(),
    ) {
        let rows = rank_entries(&entries, &window, ScoreType::MostWin, &IdNameResolver);
        let wins = entries
            .iter()
            .filter(|e| e.is_win() && window.contains(e.timestamp()))
            .count() as i64;

        prop_assert_eq!(rows.iter().map(|r| r.value).sum::<i64>(), wins);
        prop_assert!(rows.iter().all(|r| r.value >= 1));
    }

    /// Property: PerTeam value is the team's maximum qualifying score
    #[test]
    fn prop_per_team_keeps_team_maximum(
        entries in prop::collection::vec(arb_entry(), 1..40),
    ) {
        let rows = rank_entries(&entries, &TimeWindow::Unbounded, ScoreType::PerTeam, &IdNameResolver);

        for row in rows {
            let best = entries
                .iter()
                .filter(|e| {
                    e.participants().iter().map(ToString::to_string).collect::<Vec<_>>()
                        == row.display_names
                })
                .map(|e| i64::from(e.score()))
                .max();
            prop_assert_eq!(Some(row.value), best);
        }
    }
}
