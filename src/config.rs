// src/config.rs
#[cfg(feature = "python")]
use pyo3::{pyclass, pymethods};
use serde::{Deserialize, Serialize};

/// Minimum fan for a win to score under official rules.
pub const OFFICIAL_MIN_FAN: u32 = 8;

/// Knobs for one evaluation call. Plain data, so callers can build it from
/// JSON or keep one per rule variant.
#[cfg_attr(feature = "python", pyclass(module = "mahjong_core", get_all, set_all))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalConfig {
    /// Totals below this are reported as 0 fan.
    pub min_fan: u32,
    /// Treat more than four copies of a tile as malformed input.
    pub enforce_copy_limit: bool,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self::official()
    }
}

impl EvalConfig {
    pub fn official() -> Self {
        Self {
            min_fan: OFFICIAL_MIN_FAN,
            enforce_copy_limit: false,
        }
    }

    /// Reports every win's raw total, no threshold.
    pub fn casual() -> Self {
        Self {
            min_fan: 0,
            enforce_copy_limit: false,
        }
    }
}

#[cfg(feature = "python")]
#[pymethods]
impl EvalConfig {
    #[new]
    #[pyo3(signature = (min_fan=OFFICIAL_MIN_FAN, enforce_copy_limit=false))]
    fn py_new(min_fan: u32, enforce_copy_limit: bool) -> Self {
        Self { min_fan, enforce_copy_limit }
    }

    fn __repr__(&self) -> String {
        format!(
            "EvalConfig(min_fan={}, enforce_copy_limit={})",
            self.min_fan,
            if self.enforce_copy_limit { "True" } else { "False" }
        )
    }
}
