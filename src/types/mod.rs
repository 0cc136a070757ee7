// SPDX-FileCopyrightText: 2025 Semiotic AI, Inc.
//
// SPDX-License-Identifier: Apache-2.0

//! Strong types for type safety across highscores.
//!
//! This module provides newtype wrappers and domain types for:
//! - Object and participant identifiers
//! - Epoch-second timestamps
//! - Recorded score entries and team identity
//! - Query parameters (clear type, score type)
//! - Ranked leaderboard rows

pub mod entry;
pub mod kinds;
pub mod row;

// Note: Public types are re-exported from lib.rs, not here
