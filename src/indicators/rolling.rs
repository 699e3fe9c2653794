//! Trailing-window primitives shared by every windowed indicator.
//!
//! Each output position `i >= period - 1` is computed from scratch over
//! `data[i + 1 - period..=i]`. Earlier positions are NaN, and so is any
//! position whose window contains a NaN sample.

use crate::core::validation::ensure_period;
use crate::core::Result;

/// Apply `f` to every full trailing window of `period` samples.
///
/// `f` only ever sees windows of exactly `period` defined values.
///
/// # Arguments
/// * `data` - Input data slice
/// * `period` - Lookback period
/// * `f` - Reduction applied to each window
///
/// # Returns
/// Vec of the same length as `data`, NaN for the first (period - 1) values
pub fn rolling_apply<F>(data: &[f64], period: usize, f: F) -> Result<Vec<f64>>
where
    F: Fn(&[f64]) -> f64,
{
    ensure_period("rolling window", period)?;

    let n = data.len();
    let mut result = vec![f64::NAN; n];

    if period > n {
        return Ok(result);
    }

    for (offset, window) in data.windows(period).enumerate() {
        if window.iter().any(|v| v.is_nan()) {
            continue;
        }
        result[offset + period - 1] = f(window);
    }

    Ok(result)
}

#[inline]
fn window_mean(window: &[f64]) -> f64 {
    window.iter().sum::<f64>() / window.len() as f64
}

/// Population standard deviation (divides by the window length).
#[inline]
fn window_std(window: &[f64]) -> f64 {
    // A flat window must be exactly 0; the two-pass sum leaves residue
    // when the value is not representable in binary.
    if window.iter().all(|&x| x == window[0]) {
        return 0.0;
    }
    let mean = window_mean(window);
    let variance =
        window.iter().map(|x| (x - mean).powi(2)).sum::<f64>() / window.len() as f64;
    variance.sqrt()
}

/// Calculate the rolling mean over a period.
pub fn rolling_mean(data: &[f64], period: usize) -> Result<Vec<f64>> {
    rolling_apply(data, period, window_mean)
}

/// Calculate the rolling population standard deviation over a period.
///
/// A flat window (including any one-sample window) is exactly 0.
pub fn rolling_std(data: &[f64], period: usize) -> Result<Vec<f64>> {
    rolling_apply(data, period, window_std)
}

/// Calculate the rolling minimum over a period.
pub fn rolling_min(data: &[f64], period: usize) -> Result<Vec<f64>> {
    rolling_apply(data, period, |window| {
        window.iter().copied().fold(f64::INFINITY, f64::min)
    })
}

/// Calculate the rolling maximum over a period.
pub fn rolling_max(data: &[f64], period: usize) -> Result<Vec<f64>> {
    rolling_apply(data, period, |window| {
        window.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    })
}
