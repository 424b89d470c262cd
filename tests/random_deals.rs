//! Randomized consistency checks over hands dealt from a shuffled
//! 136-tile set, so every hand respects the four-copies limit.

use mahjong_core::{
    calculate_fan, check_win, check_win_batch, check_win_with, evaluate, winning_tiles,
    EvalConfig, Hand, Tile, MAX_COPIES,
};
use rand::{rngs::StdRng, seq::SliceRandom, SeedableRng};

const DEALS: u64 = 400;

/// Four copies of every tile kind, shuffled with a fixed seed.
fn shuffled_wall(seed: u64) -> Vec<i32> {
    let mut wall: Vec<i32> = Tile::ALL
        .iter()
        .flat_map(|t| std::iter::repeat(t.code() as i32).take(MAX_COPIES as usize))
        .collect();
    assert_eq!(wall.len(), 136);
    let mut rng = StdRng::seed_from_u64(seed);
    wall.shuffle(&mut rng);
    wall
}

#[test]
fn dealt_hands_are_consistent() {
    let strict = EvalConfig { enforce_copy_limit: true, ..EvalConfig::official() };
    for seed in 0..DEALS {
        let wall = shuffled_wall(seed);
        let tiles = &wall[..14];

        assert!(Hand::from_codes(tiles).unwrap().check_copy_limit().is_ok());
        assert_eq!(check_win(tiles), check_win_with(tiles, None, &strict));

        let eval = evaluate(tiles, None, &strict).unwrap();
        assert_eq!(eval.is_win, check_win(tiles), "seed {}", seed);
        assert_eq!(eval.fan, calculate_fan(tiles, None), "seed {}", seed);
        assert_eq!(eval.is_win, eval.breakdown.is_some());
    }
}

#[test]
fn waits_are_exactly_the_completing_tiles() {
    for seed in 0..DEALS {
        let wall = shuffled_wall(seed);
        let concealed = &wall[..13];
        let waits = winning_tiles(concealed);

        for tile in Tile::ALL {
            let held = concealed.iter().filter(|&&c| c == tile.code() as i32).count();
            if held == MAX_COPIES as usize {
                assert!(!waits.contains(&tile));
                continue;
            }
            let mut hand = concealed.to_vec();
            hand.push(tile.code() as i32);
            assert_eq!(waits.contains(&tile), check_win(&hand), "seed {} tile {:?}", seed, tile);
        }
    }
}

#[test]
fn batch_agrees_with_single_calls() {
    let hands: Vec<Vec<i32>> = (0..DEALS).map(|seed| shuffled_wall(seed)[..14].to_vec()).collect();
    let singles: Vec<bool> = hands.iter().map(|h| check_win(h)).collect();
    assert_eq!(check_win_batch(&hands, &EvalConfig::default()), singles);
    // dealt hands never exceed four copies, so the strict limit changes nothing
    let strict = EvalConfig { enforce_copy_limit: true, ..EvalConfig::default() };
    assert_eq!(check_win_batch(&hands, &strict), singles);
}
