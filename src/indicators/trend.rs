//! Trend indicators: SMA and moving-average deviation.

use super::rolling::rolling_mean;
use crate::core::validation::ensure_same_length;
use crate::core::Result;

/// Simple Moving Average.
///
/// # Arguments
/// * `data` - Price data
/// * `period` - Lookback period
///
/// # Returns
/// Vector of SMA values (NaN for warmup period)
pub fn simple_moving_average(data: &[f64], period: usize) -> Result<Vec<f64>> {
    rolling_mean(data, period)
}

/// Relative distance of `series_a` from `series_b`: `(a - b) / b`.
///
/// Typically `a` is a price series and `b` a moving average of it.
/// NaN wherever either input is NaN or `b` is zero.
pub fn moving_average_deviation(series_a: &[f64], series_b: &[f64]) -> Result<Vec<f64>> {
    ensure_same_length("MA deviation", series_a, series_b)?;

    Ok(series_a
        .iter()
        .zip(series_b)
        .map(|(&a, &b)| if b == 0.0 { f64::NAN } else { (a - b) / b })
        .collect())
}
