// Suppress warning from PyO3 macro expansion (fixed in newer PyO3 versions)
#![cfg_attr(feature = "python", allow(non_local_definitions))]

//! windowta - windowed technical-analysis indicators.
//!
//! Every indicator takes a price series as a slice and returns a `Vec<f64>`
//! of the same length, with NaN at positions that lack enough history:
//! - Rolling mean, standard deviation, max and min
//! - RSI with Wilder smoothing (0-100)
//! - Slow stochastic %K, rate of change
//! - SMA and moving-average deviation
//! - Bollinger bands and band proximity
//!
//! Enable the `python` feature to build the numpy extension module.

pub mod core;
pub mod indicators;
#[cfg(feature = "python")]
pub mod python;

pub use crate::core::{IndicatorConfig, IndicatorError, Result};
pub use crate::indicators::IndicatorPanel;

#[cfg(feature = "python")]
use pyo3::prelude::*;

/// Python module entry point
#[cfg(feature = "python")]
#[pymodule]
fn windowta(_py: Python<'_>, m: &PyModule) -> PyResult<()> {
    use python::bindings;

    // Rolling-window primitives
    m.add_function(wrap_pyfunction!(bindings::rolling_mean, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rolling_std, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rolling_max, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rolling_min, m)?)?;

    // Indicators
    m.add_function(wrap_pyfunction!(bindings::rsi, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::slow_stochastic_k, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::rate_of_change, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::simple_moving_average, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::moving_average_deviation, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::bollinger_bands, m)?)?;
    m.add_function(wrap_pyfunction!(bindings::prox_to_bollinger_bands, m)?)?;

    Ok(())
}
