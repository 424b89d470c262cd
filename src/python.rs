// src/python.rs
//! Python bindings. The module is importable as `mahjong_core`, the name the
//! game server already loads; `is_win` is kept for that caller.

use numpy::{PyArray1, PyReadonlyArray2};
use pyo3::prelude::*;
use pyo3::types::PyDict;

use crate::config::EvalConfig;
use crate::hand_parser::MeldKind;
use crate::{host_code, host_codes, host_last_tile};

/// Batch input: numpy's default integer arrays (int64) and the int32 arrays
/// the server builds from its tile lists are both accepted.
#[derive(FromPyObject)]
enum HandRows<'py> {
    I32(PyReadonlyArray2<'py, i32>),
    I64(PyReadonlyArray2<'py, i64>),
}

impl HandRows<'_> {
    fn rows(&self) -> Vec<Vec<i32>> {
        match self {
            HandRows::I32(hands) => hands.as_array().rows().into_iter().map(|row| row.to_vec()).collect(),
            HandRows::I64(hands) => hands
                .as_array()
                .rows()
                .into_iter()
                .map(|row| row.iter().map(|&c| host_code(c)).collect())
                .collect(),
        }
    }
}

/// True if `tiles` (plus `last_tile`) is a pair and four melds.
#[pyfunction]
#[pyo3(signature = (tiles, last_tile=None))]
fn check_win(tiles: Vec<i64>, last_tile: Option<i64>) -> bool {
    crate::check_win_with(&host_codes(&tiles), host_last_tile(last_tile), &EvalConfig::default())
}

#[pyfunction]
fn is_win(tiles: Vec<i64>) -> bool {
    crate::check_win(&host_codes(&tiles))
}

#[pyfunction]
#[pyo3(signature = (tiles, last_tile=None, config=None))]
fn calculate_fan(tiles: Vec<i64>, last_tile: Option<i64>, config: Option<EvalConfig>) -> u32 {
    crate::calculate_fan_with(
        &host_codes(&tiles),
        host_last_tile(last_tile),
        &config.unwrap_or_default(),
    )
}

/// Like `calculate_fan`, but returns the full breakdown and raises
/// `ValueError` for malformed input.
#[pyfunction]
#[pyo3(signature = (tiles, last_tile=None, config=None))]
fn evaluate<'py>(
    py: Python<'py>,
    tiles: Vec<i64>,
    last_tile: Option<i64>,
    config: Option<EvalConfig>,
) -> PyResult<Bound<'py, PyDict>> {
    let eval = crate::evaluate(&host_codes(&tiles), host_last_tile(last_tile), &config.unwrap_or_default())?;

    let out = PyDict::new_bound(py);
    out.set_item("is_win", eval.is_win)?;
    out.set_item("fan", eval.fan)?;
    out.set_item("decompositions", eval.decompositions)?;
    match eval.breakdown {
        Some(b) => {
            let melds: Vec<(&str, Vec<u8>)> = b
                .decomposition
                .melds
                .iter()
                .map(|m| {
                    let kind = match m.kind {
                        MeldKind::Sequence => "sequence",
                        MeldKind::Triplet => "triplet",
                    };
                    (kind, m.tiles.iter().map(|t| t.code()).collect())
                })
                .collect();
            out.set_item("raw_fan", b.total)?;
            out.set_item("matched", b.matched)?;
            out.set_item("pair", b.decomposition.pair.code())?;
            out.set_item("melds", melds)?;
        }
        None => {
            out.set_item("raw_fan", 0u32)?;
            out.set_item("matched", Vec::<&str>::new())?;
            out.set_item("pair", py.None())?;
            out.set_item("melds", Vec::<(&str, Vec<u8>)>::new())?;
        }
    }
    Ok(out)
}

/// Tile codes that would complete a 13-tile hand.
#[pyfunction]
fn winning_tiles(tiles: Vec<i64>) -> Vec<u8> {
    crate::winning_tiles(&host_codes(&tiles)).into_iter().map(|t| t.code()).collect()
}

/// `check_win` over an (N, 14) int32 or int64 array. Runs without the GIL.
#[pyfunction]
#[pyo3(signature = (hands, config=None))]
fn check_win_batch<'py>(
    py: Python<'py>,
    hands: HandRows<'py>,
    config: Option<EvalConfig>,
) -> Bound<'py, PyArray1<bool>> {
    let rows = hands.rows();
    let config = config.unwrap_or_default();
    let wins = py.allow_threads(|| crate::check_win_batch(&rows, &config));
    PyArray1::from_vec_bound(py, wins)
}

/// `calculate_fan` over an (N, 14) int32 or int64 array. Runs without the GIL.
#[pyfunction]
#[pyo3(signature = (hands, config=None))]
fn calculate_fan_batch<'py>(
    py: Python<'py>,
    hands: HandRows<'py>,
    config: Option<EvalConfig>,
) -> Bound<'py, PyArray1<u32>> {
    let rows = hands.rows();
    let config = config.unwrap_or_default();
    let fans = py.allow_threads(|| crate::calculate_fan_batch(&rows, &config));
    PyArray1::from_vec_bound(py, fans)
}

pub(crate) fn register(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<EvalConfig>()?;
    m.add_function(wrap_pyfunction!(check_win, m)?)?;
    m.add_function(wrap_pyfunction!(is_win, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_fan, m)?)?;
    m.add_function(wrap_pyfunction!(evaluate, m)?)?;
    m.add_function(wrap_pyfunction!(winning_tiles, m)?)?;
    m.add_function(wrap_pyfunction!(check_win_batch, m)?)?;
    m.add_function(wrap_pyfunction!(calculate_fan_batch, m)?)?;
    Ok(())
}
