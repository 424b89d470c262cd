//! Property-based checks for win detection and fan scoring.
//!
//! Hands are generated either at random from the 34 tile codes or built as
//! four melds plus a pair, then shuffled so input order never matters.

use mahjong_core::{
    calculate_fan, calculate_fan_with, check_win, enumerate_decompositions, evaluate,
    has_decomposition, EvalConfig, Hand, Tile,
};
use proptest::prelude::*;

fn all_codes() -> Vec<i32> {
    Tile::ALL.iter().map(|t| t.code() as i32).collect()
}

fn any_code() -> impl Strategy<Value = i32> {
    prop::sample::select(all_codes())
}

/// Either a triplet of any tile or a run in one of the three numeric suits.
fn meld() -> impl Strategy<Value = Vec<i32>> {
    prop_oneof![
        any_code().prop_map(|c| vec![c, c, c]),
        (0i32..3, 1i32..=7).prop_map(|(suit, start)| {
            let low = suit * 10 + start;
            vec![low, low + 1, low + 2]
        }),
    ]
}

fn winning_hand() -> impl Strategy<Value = Vec<i32>> {
    (prop::collection::vec(meld(), 4), any_code())
        .prop_map(|(melds, pair)| {
            let mut tiles = melds.concat();
            tiles.extend([pair, pair]);
            tiles
        })
        .prop_shuffle()
}

fn any_hand() -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any_code(), 14)
}

fn hand_and_permutation() -> impl Strategy<Value = (Vec<i32>, Vec<i32>)> {
    prop_oneof![any_hand(), winning_hand()]
        .prop_flat_map(|h| (Just(h.clone()), Just(h).prop_shuffle()))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn built_hands_always_win(tiles in winning_hand()) {
        prop_assert!(check_win(&tiles));
        let eval = evaluate(&tiles, None, &EvalConfig::casual()).unwrap();
        prop_assert!(eval.is_win);
        prop_assert!(eval.decompositions >= 1);
    }

    #[test]
    fn order_does_not_matter((original, shuffled) in hand_and_permutation()) {
        prop_assert_eq!(check_win(&original), check_win(&shuffled));
        prop_assert_eq!(calculate_fan(&original, None), calculate_fan(&shuffled, None));
        prop_assert_eq!(
            calculate_fan_with(&original, None, &EvalConfig::casual()),
            calculate_fan_with(&shuffled, None, &EvalConfig::casual())
        );
    }

    #[test]
    fn no_pair_means_no_win(
        tiles in prop::sample::subsequence(all_codes(), 14).prop_shuffle()
    ) {
        prop_assert!(!check_win(&tiles));
        prop_assert_eq!(calculate_fan_with(&tiles, None, &EvalConfig::casual()), 0);
    }

    #[test]
    fn existence_check_agrees_with_enumeration(tiles in prop_oneof![any_hand(), winning_hand()]) {
        let hand = Hand::from_codes(&tiles).unwrap();
        let decompositions = enumerate_decompositions(hand.counts());
        prop_assert_eq!(has_decomposition(hand.counts()), !decompositions.is_empty());
        prop_assert_eq!(check_win(&tiles), !decompositions.is_empty());
        for d in &decompositions {
            prop_assert_eq!(&d.tile_counts(), hand.counts());
        }
    }

    #[test]
    fn fan_is_gated_and_implies_win(tiles in prop_oneof![any_hand(), winning_hand()]) {
        let fan = calculate_fan(&tiles, None);
        prop_assert!(fan == 0 || fan >= 8);
        if fan > 0 {
            prop_assert!(check_win(&tiles));
        }
        let raw = calculate_fan_with(&tiles, None, &EvalConfig::casual());
        prop_assert!(raw <= 30);
        prop_assert!(fan == 0 || fan == raw);
    }

    #[test]
    fn split_last_tile_matches_full_hand(tiles in prop_oneof![any_hand(), winning_hand()]) {
        let (concealed, last) = tiles.split_at(13);
        prop_assert_eq!(calculate_fan(concealed, Some(last[0])), calculate_fan(&tiles, None));
        prop_assert_eq!(calculate_fan(concealed, None), 0);
    }

    #[test]
    fn decompositions_are_distinct(tiles in prop_oneof![any_hand(), winning_hand()]) {
        let hand = Hand::from_codes(&tiles).unwrap();
        let decompositions = enumerate_decompositions(hand.counts());
        for (i, a) in decompositions.iter().enumerate() {
            for b in &decompositions[i + 1..] {
                prop_assert_ne!(a, b);
            }
        }
    }

    #[test]
    fn evaluation_is_idempotent(tiles in prop_oneof![any_hand(), winning_hand()]) {
        let first = evaluate(&tiles, None, &EvalConfig::official());
        let second = evaluate(&tiles, None, &EvalConfig::official());
        prop_assert_eq!(first, second);
    }
}
