//! Momentum indicators: RSI, slow stochastic %K, rate of change.

use super::rolling::{rolling_max, rolling_min};
use crate::core::validation::ensure_period;
use crate::core::Result;

/// Default RSI smoothing period.
pub const DEFAULT_RSI_PERIOD: usize = 14;

/// Default slow stochastic lookback.
pub const DEFAULT_STOCHASTIC_PERIOD: usize = 14;

/// Bias added to the seed averages so a one-sided seed window never
/// divides by zero. Spread over the period like any other sample.
pub const RSI_SEED_EPSILON: f64 = 1e-6;

#[inline]
fn rsi_from_averages(up: f64, down: f64) -> f64 {
    if down == 0.0 {
        // Reachable once the seed bias is smoothed away (n == 1) or underflows.
        // No movement at all is neutral; gains only is the limit rs -> inf.
        return if up == 0.0 { 50.0 } else { 100.0 };
    }
    let rs = up / down;
    100.0 - (100.0 / (1.0 + rs))
}

/// Relative Strength Index (RSI).
///
/// The first `n` price changes seed the average gain and loss (both
/// biased by `RSI_SEED_EPSILON / n`); every later change is folded in
/// with Wilder smoothing `avg = (avg * (n - 1) + value) / n`.
///
/// # Arguments
/// * `prices` - Price data (typically close prices)
/// * `n` - Smoothing period (default: 14)
///
/// # Returns
/// Vector of RSI values on the 0-100 scale, NaN for indices `0..n`.
/// All NaN when `prices.len() <= n`.
///
/// The smoothed averages carry state forward, so a NaN price poisons
/// every RSI value from the first change it touches onward. Rolling
/// indicators only lose the windows that contain the NaN.
pub fn rsi(prices: &[f64], n: usize) -> Result<Vec<f64>> {
    ensure_period("RSI", n)?;

    let len = prices.len();
    let mut result = vec![f64::NAN; len];

    if len <= n {
        return Ok(result);
    }

    let deltas: Vec<f64> = prices.windows(2).map(|w| w[1] - w[0]).collect();
    let period = n as f64;
    let bias = RSI_SEED_EPSILON / period;

    let seed = &deltas[..n];
    let mut up = seed.iter().filter(|&&d| d >= 0.0).sum::<f64>() + bias;
    let mut down = -seed.iter().filter(|&&d| d < 0.0).sum::<f64>() + bias;
    result[n] = rsi_from_averages(up, down);

    for i in (n + 1)..len {
        let delta = deltas[i - 1];
        let (upval, downval) = if delta > 0.0 { (delta, 0.0) } else { (0.0, -delta) };

        up = (up * (period - 1.0) + upval) / period;
        down = (down * (period - 1.0) + downval) / period;
        result[i] = rsi_from_averages(up, down);
    }

    Ok(result)
}

/// Slow stochastic %K.
///
/// `%K[i] = (S[i] - min) / (max - min)` over the trailing `period`
/// window, on a 0-1 scale. A flat window (max == min) yields NaN.
///
/// # Arguments
/// * `series` - Input series (typically close prices)
/// * `period` - Lookback period (default: 14)
pub fn slow_stochastic_k(series: &[f64], period: usize) -> Result<Vec<f64>> {
    let highest = rolling_max(series, period)?;
    let lowest = rolling_min(series, period)?;

    Ok(series
        .iter()
        .zip(highest.iter().zip(&lowest))
        .map(|(&value, (&hi, &lo))| {
            let range = hi - lo;
            if range == 0.0 {
                f64::NAN
            } else {
                (value - lo) / range
            }
        })
        .collect())
}

/// Rate of change as a plain lag difference: `S[i] - S[i - period]`.
///
/// NaN for the first `period` values.
pub fn rate_of_change(series: &[f64], period: usize) -> Result<Vec<f64>> {
    ensure_period("ROC", period)?;

    let n = series.len();
    let mut result = vec![f64::NAN; n];

    for i in period..n {
        result[i] = series[i] - series[i - period];
    }

    Ok(result)
}
