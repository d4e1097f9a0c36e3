//! Validation of user-supplied number sets.

use std::collections::HashSet;

use crate::domain::rules::{number_range, MAX_NUMBER, MIN_NUMBER, NUMBERS_PER_GAME};
use crate::errors::domain::{DomainError, ValidationKind};

/// Validate a candidate six-number set.
///
/// Checks run in order and report the first failure: count, then
/// uniqueness, then range. Shared by manual game entry and manual draw
/// entry.
pub fn validate_numbers(numbers: &[u8]) -> Result<(), DomainError> {
    if numbers.len() != NUMBERS_PER_GAME {
        return Err(DomainError::validation(
            ValidationKind::WrongCount,
            format!("select exactly {NUMBERS_PER_GAME} numbers"),
        ));
    }

    let unique: HashSet<u8> = numbers.iter().copied().collect();
    if unique.len() != numbers.len() {
        return Err(DomainError::validation(
            ValidationKind::DuplicateNumber,
            "numbers cannot repeat",
        ));
    }

    for &n in numbers {
        if !number_range().contains(&n) {
            return Err(DomainError::validation(
                ValidationKind::OutOfRange,
                format!("numbers must be between {MIN_NUMBER} and {MAX_NUMBER}"),
            ));
        }
    }

    Ok(())
}
