//! Every indicator for one price series, computed from one config.

use tracing::trace;

use super::momentum::{rate_of_change, rsi, slow_stochastic_k};
use super::trend::{moving_average_deviation, simple_moving_average};
use super::volatility::{bollinger_envelope, prox_to_bollinger_bands};
use crate::core::series::round_series;
use crate::core::{IndicatorConfig, Result};

/// Indicator series aligned index for index with the input prices.
#[derive(Debug, Clone)]
pub struct IndicatorPanel {
    pub rsi: Vec<f64>,
    pub stochastic_k: Vec<f64>,
    pub rate_of_change: Vec<f64>,
    pub sma: Vec<f64>,
    /// Price relative to its SMA.
    pub ma_deviation: Vec<f64>,
    pub bollinger_upper: Vec<f64>,
    pub bollinger_lower: Vec<f64>,
    pub bollinger_proximity: Vec<f64>,
}

impl IndicatorPanel {
    /// Compute the panel. The config is validated before any series is built.
    pub fn compute(prices: &[f64], config: &IndicatorConfig) -> Result<Self> {
        config.validate()?;
        trace!(len = prices.len(), ?config, "computing indicator panel");

        let sma = simple_moving_average(prices, config.sma_period)?;
        let ma_deviation = moving_average_deviation(prices, &sma)?;
        let bands =
            bollinger_envelope(prices, config.bollinger_period, config.bollinger_deviation)?;

        let mut panel = Self {
            rsi: rsi(prices, config.rsi_period)?,
            stochastic_k: slow_stochastic_k(prices, config.stochastic_period)?,
            rate_of_change: rate_of_change(prices, config.roc_period)?,
            sma,
            ma_deviation,
            bollinger_upper: bands.upper,
            bollinger_lower: bands.lower,
            bollinger_proximity: prox_to_bollinger_bands(
                prices,
                config.bollinger_period,
                config.bollinger_deviation,
            )?,
        };

        if let Some(decimals) = config.round_decimals {
            panel.round(decimals);
        }

        Ok(panel)
    }

    /// Length of every series in the panel.
    #[inline]
    pub fn len(&self) -> usize {
        self.rsi.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.rsi.is_empty()
    }

    fn round(&mut self, decimals: u32) {
        for series in [
            &mut self.rsi,
            &mut self.stochastic_k,
            &mut self.rate_of_change,
            &mut self.sma,
            &mut self.ma_deviation,
            &mut self.bollinger_upper,
            &mut self.bollinger_lower,
            &mut self.bollinger_proximity,
        ] {
            *series = round_series(series, decimals);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::IndicatorError;

    fn prices() -> Vec<f64> {
        (0..60)
            .map(|i| 100.0 + (i as f64 * 0.3).sin() * 4.0 + i as f64 * 0.1)
            .collect()
    }

    #[test]
    fn test_panel_alignment() {
        let prices = prices();
        let panel = IndicatorPanel::compute(&prices, &IndicatorConfig::default()).unwrap();

        assert_eq!(panel.len(), prices.len());
        for series in [
            &panel.stochastic_k,
            &panel.rate_of_change,
            &panel.sma,
            &panel.ma_deviation,
            &panel.bollinger_upper,
            &panel.bollinger_lower,
            &panel.bollinger_proximity,
        ] {
            assert_eq!(series.len(), prices.len());
        }

        assert!(panel.rsi[13].is_nan());
        assert!(!panel.rsi[14].is_nan());
        assert!(panel.sma[18].is_nan());
        assert!(!panel.sma[19].is_nan());
        assert!(panel.rate_of_change[9].is_nan());
        assert!(!panel.rate_of_change[10].is_nan());
    }

    #[test]
    fn test_panel_rounding() {
        let prices = prices();
        let config = IndicatorConfig::default().with_rounding(2);
        let panel = IndicatorPanel::compute(&prices, &config).unwrap();

        for &value in panel.rsi.iter().filter(|v| !v.is_nan()) {
            assert!(((value * 100.0).round() - value * 100.0).abs() < 1e-6);
        }
    }

    #[test]
    fn test_panel_rejects_bad_config() {
        let config = IndicatorConfig {
            sma_period: 0,
            ..Default::default()
        };
        let err = IndicatorPanel::compute(&prices(), &config).unwrap_err();
        assert!(matches!(err, IndicatorError::InvalidConfig { .. }));
    }

    #[test]
    fn test_panel_empty_input() {
        let panel = IndicatorPanel::compute(&[], &IndicatorConfig::default()).unwrap();
        assert!(panel.is_empty());
    }
}
