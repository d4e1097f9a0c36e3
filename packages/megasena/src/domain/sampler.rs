//! Constrained sampling of unique numbers from the board range.

use std::collections::HashSet;

use rand::Rng;
use tracing::debug;

use crate::domain::frequency::most_frequent;
use crate::domain::rules::{number_range, NUMBERS_PER_GAME};
use crate::domain::types::{Game, RandomMode};

/// Iteration guard for the rejection-sampling loop. The fallback guarantees
/// the pool has at least `NUMBERS_PER_GAME` members, so the guard only
/// bounds the loop if that invariant ever breaks.
const MAX_PICK_ITERATIONS: u32 = 1_000_000;

/// Outcome of one sampling call.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SampleOutcome {
    /// Six unique numbers, sorted ascending.
    pub numbers: Vec<u8>,
    /// True when the exclusion set left fewer than six candidates and was
    /// dropped in favor of the full range.
    pub exclusion_relaxed: bool,
}

/// Build the exclusion set for a generation mode.
pub fn exclusion_set(mode: RandomMode, games: &[Game]) -> HashSet<u8> {
    match mode {
        RandomMode::Free => HashSet::new(),
        RandomMode::AvoidAll => games
            .iter()
            .flat_map(|g| g.numbers.iter().copied())
            .collect(),
        RandomMode::AvoidSome(k) => most_frequent(games, k).into_iter().collect(),
    }
}

/// Draw six unique numbers from the board range, honoring `exclude` when
/// feasible.
///
/// When the exclusion leaves fewer than six candidates it is dropped
/// entirely and the full range is used, so sampling always succeeds. The
/// caller learns about the relaxation through the outcome flag.
pub fn sample_numbers<R: Rng + ?Sized>(rng: &mut R, exclude: &HashSet<u8>) -> SampleOutcome {
    let mut pool: Vec<u8> = number_range().filter(|n| !exclude.contains(n)).collect();

    let exclusion_relaxed = pool.len() < NUMBERS_PER_GAME;
    if exclusion_relaxed {
        debug!(
            excluded = exclude.len(),
            remaining = pool.len(),
            "exclusion leaves too few candidates; using the full range"
        );
        pool = number_range().collect();
    }

    SampleOutcome {
        numbers: pick_unique(rng, &pool, NUMBERS_PER_GAME),
        exclusion_relaxed,
    }
}

/// Rejection-sample `count` unique values from `pool`, sorted ascending.
///
/// Duplicate index hits are discarded and redrawn; the pool is never shrunk
/// in place. Callers must hand in a pool with at least `count` distinct
/// members.
pub(crate) fn pick_unique<R: Rng + ?Sized>(rng: &mut R, pool: &[u8], count: usize) -> Vec<u8> {
    debug_assert!(pool.len() >= count, "pool smaller than requested count");

    let mut picked: HashSet<u8> = HashSet::with_capacity(count);
    let mut iterations = 0u32;
    while picked.len() < count && iterations < MAX_PICK_ITERATIONS {
        iterations += 1;
        picked.insert(pool[rng.random_range(0..pool.len())]);
    }

    let mut numbers: Vec<u8> = picked.into_iter().collect();
    numbers.sort_unstable();
    numbers
}
