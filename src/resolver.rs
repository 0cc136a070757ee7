// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Display name resolution for participants

use std::collections::HashMap;

use crate::types::entry::ParticipantId;

/// Maps participant ids to display names
///
/// Resolution is assumed to always succeed for ids that appear in recorded
/// entries. Implementations that cannot find a name should return a
/// placeholder rather than fail.
pub trait NameResolver: Send + Sync {
    fn display_name(&self, id: ParticipantId) -> String;

    /// Resolves a team in participant order
    fn display_names(&self, ids: &[ParticipantId]) -> Vec<String> {
        ids.iter().map(|id| self.display_name(*id)).collect()
    }
}

/// Uses the numeric id as the display name
#[derive(Debug, Clone, Copy, Default)]
pub struct IdNameResolver;

impl NameResolver for IdNameResolver {
    fn display_name(&self, id: ParticipantId) -> String {
        id.to_string()
    }
}

/// Lookup table of display names, falling back to the numeric id
///
/// # Examples
///
/// ```
/// use highscores::{MapNameResolver, NameResolver, ParticipantId};
///
/// let resolver = MapNameResolver::new().with_name(ParticipantId(1), "Alice");
/// assert_eq!(resolver.display_name(ParticipantId(1)), "Alice");
/// assert_eq!(resolver.display_name(ParticipantId(2)), "2");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MapNameResolver {
    names: HashMap<ParticipantId, String>,
}

impl MapNameResolver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_name(mut self, id: ParticipantId, name: impl Into<String>) -> Self {
        self.names.insert(id, name.into());
        self
    }
}

impl FromIterator<(ParticipantId, String)> for MapNameResolver {
    fn from_iter<I: IntoIterator<Item = (ParticipantId, String)>>(iter: I) -> Self {
        Self {
            names: iter.into_iter().collect(),
        }
    }
}

impl NameResolver for MapNameResolver {
    fn display_name(&self, id: ParticipantId) -> String {
        self.names
            .get(&id)
            .cloned()
            .unwrap_or_else(|| id.to_string())
    }
}
