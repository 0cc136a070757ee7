// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Score entries and the identifiers they are keyed by

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::EntryError;

/// Identifier of the scored game object (e.g. a highscore board item)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ObjectId(pub u32);

impl fmt::Display for ObjectId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifier of a participant (player) on a score entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParticipantId(pub u32);

impl fmt::Display for ParticipantId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unix timestamp in seconds (always UTC)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UnixTimestamp(pub i64);

impl UnixTimestamp {
    pub fn from_datetime<Tz: chrono::TimeZone>(dt: &DateTime<Tz>) -> Self {
        Self(dt.timestamp())
    }

    /// Current wall-clock time
    pub fn now() -> Self {
        Self::from_datetime(&Utc::now())
    }
}

impl fmt::Display for UnixTimestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Borrowed team identity: the ordered participant sequence of an entry
///
/// Two entries belong to the same team only when their participant sequences
/// are equal element-for-element in the same order. `[1, 2]` and `[2, 1]` are
/// different teams.
pub type TeamKey<'a> = &'a [ParticipantId];

/// A single recorded score, immutable once created
///
/// Serializes with its field names; decoding goes through
/// [`StoredRecord`](crate::StoredRecord) so every entry passes validation.
///
/// # Examples
///
/// ```
/// use highscores::{ObjectId, ParticipantId, ScoreEntry, UnixTimestamp};
///
/// let entry = ScoreEntry::new(
///     ObjectId(42),
///     vec![ParticipantId(1), ParticipantId(2)],
///     150,
///     true,
///     UnixTimestamp(1_760_000_000),
/// )
/// .unwrap();
/// assert_eq!(entry.team(), &[ParticipantId(1), ParticipantId(2)]);
///
/// assert!(ScoreEntry::new(ObjectId(42), vec![], 0, false, UnixTimestamp(0)).is_err());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScoreEntry {
    object_id: ObjectId,
    participants: Vec<ParticipantId>,
    score: i32,
    is_win: bool,
    timestamp: UnixTimestamp,
}

impl ScoreEntry {
    /// Creates a new score entry
    ///
    /// # Errors
    ///
    /// Returns [`EntryError::EmptyParticipants`] if `participants` is empty.
    pub fn new(
        object_id: ObjectId,
        participants: Vec<ParticipantId>,
        score: i32,
        is_win: bool,
        timestamp: UnixTimestamp,
    ) -> Result<Self, EntryError> {
        if participants.is_empty() {
            return Err(EntryError::EmptyParticipants);
        }
        Ok(Self {
            object_id,
            participants,
            score,
            is_win,
            timestamp,
        })
    }

    pub fn object_id(&self) -> ObjectId {
        self.object_id
    }

    pub fn participants(&self) -> &[ParticipantId] {
        &self.participants
    }

    /// The team identity used to group entries per team
    pub fn team(&self) -> TeamKey<'_> {
        &self.participants
    }

    pub fn score(&self) -> i32 {
        self.score
    }

    pub fn is_win(&self) -> bool {
        self.is_win
    }

    pub fn timestamp(&self) -> UnixTimestamp {
        self.timestamp
    }
}
