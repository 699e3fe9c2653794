//! Volatility indicators: Bollinger bands and band proximity.

use super::rolling::{rolling_mean, rolling_std};
use crate::core::validation::ensure_deviation;
use crate::core::Result;

/// Bollinger band envelope.
#[derive(Debug, Clone)]
pub struct BollingerBandsResult {
    /// Middle band (rolling mean).
    pub middle: Vec<f64>,
    /// Upper band (mean + deviation * std).
    pub upper: Vec<f64>,
    /// Lower band (mean - deviation * std).
    pub lower: Vec<f64>,
}

/// Full Bollinger envelope including the middle band.
///
/// Standard deviation is the population one (divides by `period`).
pub fn bollinger_envelope(
    data: &[f64],
    period: usize,
    deviation: f64,
) -> Result<BollingerBandsResult> {
    ensure_deviation("Bollinger Bands", deviation)?;

    let middle = rolling_mean(data, period)?;
    let std = rolling_std(data, period)?;

    let upper = middle
        .iter()
        .zip(&std)
        .map(|(&mean, &sd)| mean + deviation * sd)
        .collect();
    let lower = middle
        .iter()
        .zip(&std)
        .map(|(&mean, &sd)| mean - deviation * sd)
        .collect();

    Ok(BollingerBandsResult {
        middle,
        upper,
        lower,
    })
}

/// Bollinger Bands.
///
/// # Arguments
/// * `data` - Price data (typically close prices)
/// * `period` - Lookback period
/// * `deviation` - Standard deviation multiplier
///
/// # Returns
/// `(upper, lower)` bands, NaN for the warmup period
pub fn bollinger_bands(
    data: &[f64],
    period: usize,
    deviation: f64,
) -> Result<(Vec<f64>, Vec<f64>)> {
    let bands = bollinger_envelope(data, period, deviation)?;
    Ok((bands.upper, bands.lower))
}

/// Position of each sample within its Bollinger bands.
///
/// 0 on the lower band, 1 on the upper band, 0.5 on the middle band and
/// unbounded outside the bands. NaN when the bands collapse (zero std).
pub fn prox_to_bollinger_bands(data: &[f64], period: usize, deviation: f64) -> Result<Vec<f64>> {
    let (upper, lower) = bollinger_bands(data, period, deviation)?;

    Ok(data
        .iter()
        .zip(upper.iter().zip(&lower))
        .map(|(&value, (&hi, &lo))| {
            let width = hi - lo;
            if width == 0.0 {
                f64::NAN
            } else {
                (value - lo) / width
            }
        })
        .collect())
}
