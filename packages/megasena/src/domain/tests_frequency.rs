//! Tests for the frequency analyzer.

use crate::domain::frequency::{most_frequent, number_frequencies};
use crate::domain::test_prelude::game;

#[test]
fn empty_collection_has_no_frequencies() {
    assert!(number_frequencies(&[]).is_empty());
    assert!(most_frequent(&[], 10).is_empty());
}

#[test]
fn occurrences_count_per_game_not_per_number() {
    let games = vec![
        game("ana", &[1, 2, 3, 4, 5, 6]),
        game("bob", &[1, 2, 3, 4, 5, 6]),
    ];
    let freq = number_frequencies(&games);
    assert_eq!(freq.len(), 6);
    for n in 1..=6u8 {
        assert_eq!(freq[&n], 2);
    }
}

#[test]
fn mixed_games_count_each_occurrence() {
    let games = vec![
        game("ana", &[1, 2, 3, 4, 5, 6]),
        game("bob", &[1, 2, 10, 20, 30, 40]),
        game("eva", &[1, 50, 51, 52, 53, 54]),
    ];
    let freq = number_frequencies(&games);
    assert_eq!(freq[&1], 3);
    assert_eq!(freq[&2], 2);
    assert_eq!(freq[&10], 1);
}

#[test]
fn most_frequent_takes_highest_counts_first() {
    let games = vec![
        game("ana", &[1, 2, 3, 4, 5, 6]),
        game("bob", &[1, 2, 3, 10, 11, 12]),
        game("eva", &[1, 2, 20, 21, 22, 23]),
    ];
    // Counts: 1 -> 3, 2 -> 3, 3 -> 2, everything else 1.
    assert_eq!(most_frequent(&games, 3), vec![1, 2, 3]);
}

#[test]
fn frequency_ties_break_in_first_observed_order() {
    let games = vec![
        game("ana", &[9, 8, 7, 30, 31, 32]),
        game("bob", &[9, 8, 7, 40, 41, 42]),
    ];
    // 9, 8, 7 all count 2; Game::new sorts picks ascending, so observation
    // order is 7, 8, 9.
    assert_eq!(most_frequent(&games, 3), vec![7, 8, 9]);
    // The singles follow in their own observation order.
    assert_eq!(most_frequent(&games, 5), vec![7, 8, 9, 30, 31]);
}

#[test]
fn most_frequent_caps_at_distinct_numbers() {
    let games = vec![game("ana", &[1, 2, 3, 4, 5, 6])];
    assert_eq!(most_frequent(&games, 50).len(), 6);
}
