// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Stored record format for score entries
//!
//! Mirrors the `items_highscore_data` table layout: participants are kept as a
//! comma-separated id list and the win flag as `0`/`1`.

use serde::{Deserialize, Serialize};

use crate::errors::EntryError;
use crate::types::entry::{ObjectId, ParticipantId, ScoreEntry, UnixTimestamp};

/// One persisted highscore record
///
/// # Examples
///
/// ```
/// use highscores::{ObjectId, ParticipantId, ScoreEntry, StoredRecord, UnixTimestamp};
///
/// let record = StoredRecord {
///     item_id: 42,
///     user_ids: "3,1".to_string(),
///     score: 250,
///     is_win: 1,
///     timestamp: 1_760_486_400,
/// };
///
/// let entry = ScoreEntry::try_from(record).unwrap();
/// assert_eq!(entry.object_id(), ObjectId(42));
/// assert_eq!(entry.participants(), &[ParticipantId(3), ParticipantId(1)]);
/// assert!(entry.is_win());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoredRecord {
    pub item_id: u32,
    pub user_ids: String,
    pub score: i32,
    pub is_win: i64,
    pub timestamp: i64,
}

/// Parses a comma-separated participant list such as `"1,2,3"`
///
/// Whitespace around ids is ignored. The list must not be empty.
pub fn parse_participants(raw: &str) -> Result<Vec<ParticipantId>, EntryError> {
    if raw.trim().is_empty() {
        return Err(EntryError::EmptyParticipants);
    }

    raw.split(',')
        .map(|part| {
            part.trim()
                .parse::<u32>()
                .map(ParticipantId)
                .map_err(|e| EntryError::invalid_participant_list(raw, format!("'{part}': {e}")))
        })
        .collect()
}

/// Formats participants as a comma-separated id list
pub fn format_participants(participants: &[ParticipantId]) -> String {
    participants
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(",")
}

impl From<&ScoreEntry> for StoredRecord {
    fn from(entry: &ScoreEntry) -> Self {
        Self {
            item_id: entry.object_id().0,
            user_ids: format_participants(entry.participants()),
            score: entry.score(),
            is_win: i64::from(entry.is_win()),
            timestamp: entry.timestamp().0,
        }
    }
}

impl TryFrom<StoredRecord> for ScoreEntry {
    type Error = EntryError;

    fn try_from(record: StoredRecord) -> Result<Self, Self::Error> {
        let is_win = match record.is_win {
            0 => false,
            1 => true,
            value => return Err(EntryError::InvalidWinFlag { value }),
        };

        ScoreEntry::new(
            ObjectId(record.item_id),
            parse_participants(&record.user_ids)?,
            record.score,
            is_win,
            UnixTimestamp(record.timestamp),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_participants() {
        assert_eq!(
            parse_participants("1, 2,3").unwrap(),
            vec![ParticipantId(1), ParticipantId(2), ParticipantId(3)]
        );
        assert_eq!(parse_participants("7").unwrap(), vec![ParticipantId(7)]);
    }

    #[test]
    fn test_parse_participants_rejects_bad_input() {
        assert_eq!(
            parse_participants("").unwrap_err(),
            EntryError::EmptyParticipants
        );
        assert!(matches!(
            parse_participants("1,,2"),
            Err(EntryError::InvalidParticipantList { .. })
        ));
        assert!(matches!(
            parse_participants("1,abc"),
            Err(EntryError::InvalidParticipantList { .. })
        ));
    }

    #[test]
    fn test_record_from_entry() {
        let entry = ScoreEntry::new(
            ObjectId(9),
            vec![ParticipantId(2), ParticipantId(1)],
            -5,
            false,
            UnixTimestamp(1_700_000_000),
        )
        .unwrap();

        let record = StoredRecord::from(&entry);
        assert_eq!(record.item_id, 9);
        assert_eq!(record.user_ids, "2,1");
        assert_eq!(record.score, -5);
        assert_eq!(record.is_win, 0);
        assert_eq!(record.timestamp, 1_700_000_000);

        assert_eq!(ScoreEntry::try_from(record).unwrap(), entry);
    }

    #[test]
    fn test_invalid_win_flag() {
        let record = StoredRecord {
            item_id: 1,
            user_ids: "1".to_string(),
            score: 0,
            is_win: 2,
            timestamp: 0,
        };
        assert_eq!(
            ScoreEntry::try_from(record).unwrap_err(),
            EntryError::InvalidWinFlag { value: 2 }
        );
    }
}
