//! Domain layer: pure draw-and-matching logic.

pub mod draw;
pub mod frequency;
pub mod matching;
pub mod numbers;
pub mod rules;
pub mod sampler;
pub mod search;
pub mod types;

#[cfg(test)]
mod tests_frequency;
#[cfg(test)]
mod tests_matching;
#[cfg(test)]
mod tests_numbers;

// Re-exports for ergonomics
pub use draw::generate_draw_numbers;
pub use frequency::{most_frequent, number_frequencies};
pub use matching::{find_winners, match_count, prize_for_matches, Prize, Winner};
pub use numbers::validate_numbers;
pub use sampler::{exclusion_set, sample_numbers, SampleOutcome};
pub use search::{search_until_winner, AbortFlag, SearchOptions, SearchOutcome};
pub use types::{DrawMode, DrawResult, Game, RandomMode, SearchStats};
