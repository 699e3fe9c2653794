//! Indicator parameters.

use serde::{Deserialize, Serialize};

use super::error::{IndicatorError, Result};
use super::validation::{ensure_deviation, ensure_period};

fn into_config_error(err: IndicatorError) -> IndicatorError {
    match err {
        IndicatorError::InvalidParameter { message } => IndicatorError::invalid_config(message),
        other => other,
    }
}

/// Parameters for computing a full indicator panel over one price series.
///
/// Missing fields deserialize to their conventional defaults.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IndicatorConfig {
    /// RSI smoothing period.
    pub rsi_period: usize,
    /// Slow stochastic %K lookback.
    pub stochastic_period: usize,
    /// Rate of change lag.
    pub roc_period: usize,
    /// SMA window, also the baseline for moving-average deviation.
    pub sma_period: usize,
    /// Bollinger window.
    pub bollinger_period: usize,
    /// Standard deviation multiplier for the Bollinger bands.
    pub bollinger_deviation: f64,
    /// Round every output series to this many decimals when set.
    pub round_decimals: Option<u32>,
}

impl Default for IndicatorConfig {
    fn default() -> Self {
        Self {
            rsi_period: 14,
            stochastic_period: 14,
            roc_period: 10,
            sma_period: 20,
            bollinger_period: 20,
            bollinger_deviation: 2.0,
            round_decimals: None,
        }
    }
}

impl IndicatorConfig {
    /// Check every parameter before any series is computed.
    ///
    /// Uses the same checks as the indicators themselves; failures are
    /// reported as `InvalidConfig`.
    pub fn validate(&self) -> Result<()> {
        let periods = [
            ("RSI", self.rsi_period),
            ("Stochastic", self.stochastic_period),
            ("ROC", self.roc_period),
            ("SMA", self.sma_period),
            ("Bollinger Bands", self.bollinger_period),
        ];
        for (name, value) in periods {
            ensure_period(name, value).map_err(into_config_error)?;
        }
        ensure_deviation("Bollinger Bands", self.bollinger_deviation).map_err(into_config_error)
    }

    /// Same config with output rounding enabled.
    pub fn with_rounding(mut self, decimals: u32) -> Self {
        self.round_decimals = Some(decimals);
        self
    }
}
