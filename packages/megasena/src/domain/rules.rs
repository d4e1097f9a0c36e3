use std::ops::RangeInclusive;

pub const MIN_NUMBER: u8 = 1;
pub const MAX_NUMBER: u8 = 60;
pub const NUMBERS_PER_GAME: usize = 6;
pub const NUMBERS_PER_DRAW: usize = 6;

/// Hard ceiling for the until-winner search loop (see `domain::search`).
pub const MAX_SEARCH_ATTEMPTS: u32 = 100_000;

/// The full board range a number may be drawn from.
pub fn number_range() -> RangeInclusive<u8> {
    MIN_NUMBER..=MAX_NUMBER
}
