#![deny(clippy::wildcard_imports)]
#![cfg_attr(test, allow(clippy::wildcard_imports))]

//! Mega Sena lottery simulator engine.
//!
//! The crate is layered: `domain` holds the pure draw-and-matching logic
//! (validation, sampling, frequency analysis, draw generation, matching,
//! winner search), `store` is the key-value persistence seam, and
//! `services` owns the persisted collections and the derived views.

pub mod config;
pub mod domain;
pub mod errors;
pub mod services;
pub mod store;

#[cfg(test)]
pub mod test_bootstrap;

// Re-exports for public API
pub use domain::draw::generate_draw_numbers;
pub use domain::matching::{find_winners, match_count, prize_for_matches, Prize, Winner};
pub use domain::numbers::validate_numbers;
pub use domain::sampler::{exclusion_set, sample_numbers, SampleOutcome};
pub use domain::search::{search_until_winner, AbortFlag, SearchOptions, SearchOutcome};
pub use domain::types::{DrawMode, DrawResult, Game, RandomMode, SearchStats};
pub use errors::DomainError;
pub use services::mega_sena::{MegaSena, PlayerGroup};
pub use store::{JsonFileStore, KvStore, MemoryStore};

// Auto-initialize logging for unit tests
#[cfg(test)]
#[ctor::ctor]
fn init_test_logging() {
    test_bootstrap::logging::init();
}
