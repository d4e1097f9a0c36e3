//! Tests for number-set validation.

use crate::domain::numbers::validate_numbers;
use crate::errors::domain::{DomainError, ValidationKind};

fn kind_of(result: Result<(), DomainError>) -> ValidationKind {
    match result {
        Err(DomainError::Validation(kind, _)) => kind,
        other => panic!("expected a validation error, got {other:?}"),
    }
}

#[test]
fn accepts_a_well_formed_set() {
    assert!(validate_numbers(&[1, 7, 15, 30, 45, 60]).is_ok());
}

#[test]
fn accepts_range_boundaries() {
    assert!(validate_numbers(&[1, 2, 3, 4, 5, 60]).is_ok());
}

#[test]
fn rejects_wrong_count() {
    assert_eq!(
        kind_of(validate_numbers(&[1, 2, 3, 4, 5])),
        ValidationKind::WrongCount
    );
    assert_eq!(
        kind_of(validate_numbers(&[1, 2, 3, 4, 5, 6, 7])),
        ValidationKind::WrongCount
    );
    assert_eq!(kind_of(validate_numbers(&[])), ValidationKind::WrongCount);
}

#[test]
fn rejects_duplicates() {
    assert_eq!(
        kind_of(validate_numbers(&[1, 2, 3, 4, 5, 5])),
        ValidationKind::DuplicateNumber
    );
}

#[test]
fn rejects_out_of_range() {
    assert_eq!(
        kind_of(validate_numbers(&[0, 2, 3, 4, 5, 6])),
        ValidationKind::OutOfRange
    );
    assert_eq!(
        kind_of(validate_numbers(&[1, 2, 3, 4, 5, 61])),
        ValidationKind::OutOfRange
    );
}

#[test]
fn checks_run_in_order() {
    // Count is checked before anything else.
    assert_eq!(
        kind_of(validate_numbers(&[61, 61, 61])),
        ValidationKind::WrongCount
    );
    // Duplicates are reported before range violations.
    assert_eq!(
        kind_of(validate_numbers(&[61, 61, 1, 2, 3, 4])),
        ValidationKind::DuplicateNumber
    );
}
