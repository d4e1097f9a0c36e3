//! Per-number occurrence counts across the game collection.

use std::collections::HashMap;

use crate::domain::types::Game;

/// Count every occurrence of every number across all games.
///
/// A number picked in three games counts 3, not 1.
pub fn number_frequencies(games: &[Game]) -> HashMap<u8, u32> {
    let mut freq = HashMap::new();
    for game in games {
        for &n in &game.numbers {
            *freq.entry(n).or_insert(0u32) += 1;
        }
    }
    freq
}

/// The `k` numbers with the highest occurrence count across all games.
///
/// Frequency ties break in first-observed order: counts accumulate in the
/// order numbers are first seen while scanning the games, and the stable
/// sort preserves that order within equal counts.
pub fn most_frequent(games: &[Game], k: usize) -> Vec<u8> {
    let mut counts: Vec<(u8, u32)> = Vec::new();
    for game in games {
        for &n in &game.numbers {
            match counts.iter_mut().find(|(num, _)| *num == n) {
                Some((_, count)) => *count += 1,
                None => counts.push((n, 1)),
            }
        }
    }
    counts.sort_by(|a, b| b.1.cmp(&a.1));
    counts.into_iter().take(k).map(|(n, _)| n).collect()
}
