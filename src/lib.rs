// src/lib.rs
//! Hand evaluation for Chinese official Mahjong: win detection (one pair
//! plus four melds) and fan scoring over every way the hand can be read.
//!
//! The entry points are permissive: malformed input is "not a win" and
//! scores 0. Use [`evaluate`] to get the reason instead.

pub mod tiles;
pub mod hand;
pub mod hand_parser;
pub mod fan_calculation;
pub mod config;
pub mod batch;
#[cfg(feature = "python")]
mod python;

pub use tiles::{is_numeric, rank_of, suit_of, Suit, Tile};
pub use hand::{Hand, HandError, TileCounts, HAND_SIZE, MAX_COPIES};
pub use hand_parser::{enumerate_decompositions, has_decomposition, Decomposition, Meld, MeldKind};
pub use fan_calculation::{best_breakdown, default_rules, score, FanBreakdown, FanRule};
pub use config::EvalConfig;
pub use batch::{calculate_fan_batch, check_win_batch};

/// Full result of evaluating one hand.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    /// At least one pair + four-meld reading exists.
    pub is_win: bool,
    /// Gated fan (0 below `min_fan`).
    pub fan: u32,
    /// Best-scoring reading, ungated. `None` when not a win.
    pub breakdown: Option<FanBreakdown>,
    /// How many distinct readings the hand has (each split counted once).
    pub decompositions: usize,
}

/// True iff the 14 tiles form a pair plus four melds. Wrong length or
/// invalid codes give `false`.
pub fn check_win(tiles: &[i32]) -> bool {
    check_win_with(tiles, None, &EvalConfig::default())
}

pub fn check_win_with(tiles: &[i32], last_tile: Option<i32>, config: &EvalConfig) -> bool {
    build_hand(tiles, last_tile, config).is_ok_and(|hand| has_decomposition(hand.counts()))
}

/// Fan of `tiles` (+ `last_tile`) under official rules: the best total over
/// all readings, or 0 if it is not a win or scores below 8.
pub fn calculate_fan(tiles: &[i32], last_tile: Option<i32>) -> u32 {
    calculate_fan_with(tiles, last_tile, &EvalConfig::official())
}

pub fn calculate_fan_with(tiles: &[i32], last_tile: Option<i32>, config: &EvalConfig) -> u32 {
    match build_hand(tiles, last_tile, config) {
        Ok(hand) => {
            let decompositions = enumerate_decompositions(hand.counts());
            score(&hand, &decompositions, &default_rules(), config.min_fan)
        }
        Err(_) => 0,
    }
}

/// Strict evaluation: malformed input is an error rather than a non-win.
pub fn evaluate(
    tiles: &[i32],
    last_tile: Option<i32>,
    config: &EvalConfig,
) -> Result<Evaluation, HandError> {
    let hand = build_hand(tiles, last_tile, config)?;
    let decompositions = enumerate_decompositions(hand.counts());
    let rules = default_rules();
    Ok(Evaluation {
        is_win: !decompositions.is_empty(),
        fan: score(&hand, &decompositions, &rules, config.min_fan),
        breakdown: best_breakdown(&hand, &decompositions, &rules),
        decompositions: decompositions.len(),
    })
}

/// Tile kinds that would complete a 13-tile hand. Kinds the hand already
/// holds four of are skipped. Malformed input gives an empty list.
pub fn winning_tiles(tiles: &[i32]) -> Vec<Tile> {
    if tiles.len() != HAND_SIZE - 1 {
        return Vec::new();
    }
    let Ok(parsed) = tiles.iter().map(|&c| Tile::try_from(c)).collect::<Result<Vec<_>, _>>() else {
        return Vec::new();
    };
    let counts = TileCounts::from_tiles(&parsed);
    Tile::ALL
        .into_iter()
        .filter(|&t| counts.count(t) < MAX_COPIES)
        .filter(|&t| {
            let mut with_tile = counts;
            with_tile.add(t);
            has_decomposition(&with_tile)
        })
        .collect()
}

/// The legacy host passes `-1` for "no last tile".
pub const NO_LAST_TILE: i64 = -1;

/// Narrows a host integer to a tile code. Values outside `i32` become an
/// invalid code, so they read as "not a win" rather than overflowing.
pub fn host_code(code: i64) -> i32 {
    i32::try_from(code).unwrap_or(i32::MIN)
}

pub fn host_codes(codes: &[i64]) -> Vec<i32> {
    codes.iter().map(|&c| host_code(c)).collect()
}

/// Host last-tile argument: absent or [`NO_LAST_TILE`] both mean "none".
pub fn host_last_tile(last_tile: Option<i64>) -> Option<i32> {
    last_tile.filter(|&t| t != NO_LAST_TILE).map(host_code)
}

fn build_hand(tiles: &[i32], last_tile: Option<i32>, config: &EvalConfig) -> Result<Hand, HandError> {
    let hand = Hand::from_parts(tiles, last_tile)?;
    if config.enforce_copy_limit {
        hand.check_copy_limit()?;
    }
    Ok(hand)
}

#[cfg(feature = "python")]
#[pyo3::pymodule]
fn mahjong_core(m: &pyo3::Bound<'_, pyo3::types::PyModule>) -> pyo3::PyResult<()> {
    python::register(m)
}
