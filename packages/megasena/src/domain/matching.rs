//! Match counting and prize classification.

use serde::{Deserialize, Serialize};

use crate::domain::types::Game;

/// Prize tiers, lowest to highest.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Prize {
    Quadra,
    Quina,
    Sena,
}

impl Prize {
    /// Display label, as shown to players.
    pub fn label(self) -> &'static str {
        match self {
            Prize::Quadra => "Quadra (4 acertos)",
            Prize::Quina => "Quina (5 acertos)",
            Prize::Sena => "SENA! (6 acertos)",
        }
    }
}

/// A game that hit a prize tier against a draw.
///
/// Derived on demand from the current collections, never persisted.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct Winner {
    /// The winning game, match-annotated.
    pub game: Game,
    pub matches: u8,
    pub prize: Prize,
}

/// Number of values shared between a game and a draw (0..=6).
pub fn match_count(game_numbers: &[u8], draw_numbers: &[u8]) -> u8 {
    game_numbers
        .iter()
        .filter(|n| draw_numbers.contains(n))
        .count() as u8
}

/// Prize tier for a match count; `None` below four matches.
pub fn prize_for_matches(matches: u8) -> Option<Prize> {
    match matches {
        6 => Some(Prize::Sena),
        5 => Some(Prize::Quina),
        4 => Some(Prize::Quadra),
        _ => None,
    }
}

/// All games winning a prize against `draw_numbers`, highest match count
/// first (registration order within a tier).
pub fn find_winners(games: &[Game], draw_numbers: &[u8]) -> Vec<Winner> {
    let mut winners: Vec<Winner> = games
        .iter()
        .filter_map(|game| {
            let matches = match_count(&game.numbers, draw_numbers);
            prize_for_matches(matches).map(|prize| Winner {
                game: Game {
                    matches: Some(matches),
                    ..game.clone()
                },
                matches,
                prize,
            })
        })
        .collect();
    winners.sort_by(|a, b| b.matches.cmp(&a.matches));
    winners
}
