//! Tests for match counting and prize classification.

use crate::domain::matching::{find_winners, match_count, prize_for_matches, Prize};
use crate::domain::test_prelude::game;

#[test]
fn identical_sets_match_six() {
    assert_eq!(match_count(&[1, 2, 3, 4, 5, 6], &[1, 2, 3, 4, 5, 6]), 6);
}

#[test]
fn disjoint_sets_match_zero() {
    assert_eq!(match_count(&[1, 2, 3, 4, 5, 6], &[7, 8, 9, 10, 11, 12]), 0);
}

#[test]
fn partial_overlap_counts_the_intersection() {
    assert_eq!(match_count(&[1, 2, 3, 4, 5, 6], &[3, 4, 5, 6, 7, 8]), 4);
    assert_eq!(match_count(&[1, 2, 3, 4, 5, 6], &[6, 10, 20, 30, 40, 50]), 1);
}

#[test]
fn prize_mapping_matches_the_tiers() {
    assert_eq!(prize_for_matches(6), Some(Prize::Sena));
    assert_eq!(prize_for_matches(5), Some(Prize::Quina));
    assert_eq!(prize_for_matches(4), Some(Prize::Quadra));
    for n in 0..=3u8 {
        assert_eq!(prize_for_matches(n), None);
    }
}

#[test]
fn prize_labels_are_stable() {
    assert_eq!(Prize::Quadra.label(), "Quadra (4 acertos)");
    assert_eq!(Prize::Quina.label(), "Quina (5 acertos)");
    assert_eq!(Prize::Sena.label(), "SENA! (6 acertos)");
}

#[test]
fn prize_serializes_lowercase() {
    assert_eq!(serde_json::to_string(&Prize::Sena).unwrap(), r#""sena""#);
    assert_eq!(serde_json::to_string(&Prize::Quina).unwrap(), r#""quina""#);
    assert_eq!(serde_json::to_string(&Prize::Quadra).unwrap(), r#""quadra""#);
}

#[test]
fn winners_are_filtered_annotated_and_sorted() {
    let games = vec![
        game("ana", &[1, 2, 3, 40, 50, 60]),  // 3 matches, no prize
        game("bob", &[1, 2, 3, 4, 50, 60]),   // quadra
        game("eva", &[1, 2, 3, 4, 5, 6]),     // sena
        game("gil", &[1, 2, 3, 4, 5, 60]),    // quina
    ];
    let winners = find_winners(&games, &[1, 2, 3, 4, 5, 6]);

    assert_eq!(winners.len(), 3);
    assert_eq!(winners[0].prize, Prize::Sena);
    assert_eq!(winners[0].game.player_name, "eva");
    assert_eq!(winners[0].game.matches, Some(6));
    assert_eq!(winners[1].prize, Prize::Quina);
    assert_eq!(winners[2].prize, Prize::Quadra);
}

#[test]
fn winner_order_is_stable_within_a_tier() {
    let games = vec![
        game("first", &[1, 2, 3, 4, 50, 60]),
        game("second", &[1, 2, 3, 4, 51, 59]),
    ];
    let winners = find_winners(&games, &[1, 2, 3, 4, 5, 6]);
    assert_eq!(winners[0].game.player_name, "first");
    assert_eq!(winners[1].game.player_name, "second");
}

#[test]
fn no_draw_overlap_means_no_winners() {
    let games = vec![game("ana", &[1, 2, 3, 4, 5, 6])];
    assert!(find_winners(&games, &[10, 20, 30, 40, 50, 55]).is_empty());
}
