//! Core records shared by the engine and the persistence layer.
//!
//! Records serialize with camelCase field names; this is the on-disk save
//! format and must stay stable across releases.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use uuid::Uuid;

/// A player's registered set of six chosen numbers.
///
/// Immutable once created except for deletion. Numbers are kept sorted
/// ascending.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Game {
    pub id: Uuid,
    pub player_name: String,
    pub numbers: Vec<u8>,
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,
    /// Match count against the current last draw. Derived annotation only;
    /// persisted games always carry `None`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub matches: Option<u8>,
}

impl Game {
    /// Build a new game: fresh id, creation timestamp, numbers sorted.
    pub fn new(player_name: impl Into<String>, mut numbers: Vec<u8>) -> Self {
        numbers.sort_unstable();
        Self {
            id: Uuid::new_v4(),
            player_name: player_name.into(),
            numbers,
            created_at: OffsetDateTime::now_utc(),
            matches: None,
        }
    }
}

/// Instrumentation recorded by the until-winner search.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SearchStats {
    /// 1-based attempt count, winning attempt included.
    pub attempts: u32,
    /// Wall time of the search in milliseconds.
    pub time_ms: u64,
    /// Every attempted number set, in order. The last entry is the draw
    /// that was reported.
    pub all_attempts: Vec<Vec<u8>>,
}

/// The officially "drawn" set of six numbers games are compared against.
///
/// At most one is retained at a time; a new draw replaces the prior one
/// wholesale.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DrawResult {
    pub id: Uuid,
    pub numbers: Vec<u8>,
    #[serde(with = "time::serde::rfc3339")]
    pub drawn_at: OffsetDateTime,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub search_stats: Option<SearchStats>,
}

impl DrawResult {
    pub fn new(mut numbers: Vec<u8>, search_stats: Option<SearchStats>) -> Self {
        numbers.sort_unstable();
        Self {
            id: Uuid::new_v4(),
            numbers,
            drawn_at: OffsetDateTime::now_utc(),
            search_stats,
        }
    }
}

/// How game generation treats numbers already in play.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RandomMode {
    /// No exclusion; numbers may repeat across games.
    Free,
    /// Exclude every number appearing in any existing game.
    AvoidAll,
    /// Exclude the `n` most frequent numbers across existing games.
    AvoidSome(usize),
}

/// Draw policies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DrawMode {
    /// Uniform over the full board range.
    Random,
    /// Restricted to numbers someone actually played (topped up from the
    /// board range when those are too few).
    FromGames,
    /// Repeat random draws until some game wins a prize.
    UntilWinner,
}
