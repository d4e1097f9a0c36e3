//! Bounded draw-until-winner search.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Instant;

use rand::Rng;
use tracing::{debug, warn};

use crate::domain::draw::generate_draw_numbers;
use crate::domain::matching::find_winners;
use crate::domain::rules::MAX_SEARCH_ATTEMPTS;
use crate::domain::types::{DrawMode, Game};

/// Shared cancellation flag, checked once per attempt.
///
/// Clone one end into the search and keep the other on the caller's side
/// (e.g. a UI thread wiring up a cancel button).
#[derive(Clone, Debug, Default)]
pub struct AbortFlag(Arc<AtomicBool>);

impl AbortFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn abort(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_aborted(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

/// Tunables for the search loop.
#[derive(Clone, Copy, Debug)]
pub struct SearchOptions {
    /// Hard ceiling on attempts: the safety valve against collections that
    /// can never win (an empty one, for instance).
    pub max_attempts: u32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            max_attempts: MAX_SEARCH_ATTEMPTS,
        }
    }
}

/// Result of one search run.
///
/// When no attempt won (ceiling reached or aborted) `numbers` holds the
/// last attempt made; callers distinguish the two shapes by recomputing
/// winners against the returned numbers.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// The reported draw; always the final entry of `all_attempts`.
    pub numbers: Vec<u8>,
    /// 1-based count of attempts made, winning attempt included.
    pub attempts: u32,
    /// Wall time in milliseconds.
    pub time_ms: u64,
    /// Every attempt in order.
    pub all_attempts: Vec<Vec<u8>>,
}

/// Draw random sets until at least one game wins a prize.
///
/// Each attempt is recorded and checked against the whole collection. The
/// loop stops at the first attempt with a winner, when `abort` is raised,
/// or at `opts.max_attempts`; the non-winning terminations return the last
/// attempt as a degraded result rather than an error. An abort raised
/// before the first attempt yields an empty number set.
///
/// `progress` is invoked with the running attempt count after every
/// attempt, so a host offloading the search to a worker thread can surface
/// progress while keeping its interaction thread free.
pub fn search_until_winner<R, F>(
    rng: &mut R,
    games: &[Game],
    opts: &SearchOptions,
    abort: &AbortFlag,
    mut progress: F,
) -> SearchOutcome
where
    R: Rng + ?Sized,
    F: FnMut(u32),
{
    let start = Instant::now();
    let mut all_attempts: Vec<Vec<u8>> = Vec::new();
    let mut attempts = 0u32;

    while attempts < opts.max_attempts && !abort.is_aborted() {
        attempts += 1;
        let numbers = generate_draw_numbers(rng, DrawMode::Random, games);
        all_attempts.push(numbers.clone());
        progress(attempts);

        if !find_winners(games, &numbers).is_empty() {
            debug!(attempts, "search found a winning draw");
            return SearchOutcome {
                numbers,
                attempts,
                time_ms: start.elapsed().as_millis() as u64,
                all_attempts,
            };
        }
    }

    warn!(
        attempts,
        aborted = abort.is_aborted(),
        "search ended without a winner"
    );
    SearchOutcome {
        numbers: all_attempts.last().cloned().unwrap_or_default(),
        attempts,
        time_ms: start.elapsed().as_millis() as u64,
        all_attempts,
    }
}
