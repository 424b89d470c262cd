// src/batch.rs
use rayon::prelude::*;

use crate::config::EvalConfig;
use crate::{calculate_fan_with, check_win_with};

/// `check_win_with` over many complete hands in parallel. Output order
/// matches input order.
pub fn check_win_batch<H>(hands: &[H], config: &EvalConfig) -> Vec<bool>
where
    H: AsRef<[i32]> + Sync,
{
    hands
        .par_iter()
        .map(|h| check_win_with(h.as_ref(), None, config))
        .collect()
}

/// `calculate_fan_with` over many complete hands in parallel.
pub fn calculate_fan_batch<H>(hands: &[H], config: &EvalConfig) -> Vec<u32>
where
    H: AsRef<[i32]> + Sync,
{
    hands
        .par_iter()
        .map(|h| calculate_fan_with(h.as_ref(), None, config))
        .collect()
}
