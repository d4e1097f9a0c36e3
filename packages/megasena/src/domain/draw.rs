//! Official draw generation.

use std::collections::HashSet;

use rand::Rng;

use crate::domain::rules::{number_range, NUMBERS_PER_DRAW};
use crate::domain::sampler::pick_unique;
use crate::domain::types::{DrawMode, Game};

/// Generate the six numbers of one official draw, sorted ascending.
///
/// `UntilWinner` attempts are individually plain random draws; the retry
/// loop itself lives in `domain::search`.
pub fn generate_draw_numbers<R: Rng + ?Sized>(
    rng: &mut R,
    mode: DrawMode,
    games: &[Game],
) -> Vec<u8> {
    match mode {
        DrawMode::Random | DrawMode::UntilWinner => {
            let pool: Vec<u8> = number_range().collect();
            pick_unique(rng, &pool, NUMBERS_PER_DRAW)
        }
        DrawMode::FromGames => {
            if games.is_empty() {
                return generate_draw_numbers(rng, DrawMode::Random, games);
            }

            let played: HashSet<u8> = games
                .iter()
                .flat_map(|g| g.numbers.iter().copied())
                .collect();
            let mut pool: Vec<u8> = played.iter().copied().collect();

            // Top up with unplayed numbers when too few distinct numbers
            // are in play.
            if pool.len() < NUMBERS_PER_DRAW {
                pool.extend(number_range().filter(|n| !played.contains(n)));
            }

            pick_unique(rng, &pool, NUMBERS_PER_DRAW)
        }
    }
}
