//! Parameter checks shared by every indicator.
//!
//! All checks run before any output is allocated, so a bad call fails
//! fast instead of producing a partially filled series.

use tracing::debug;

use super::error::{IndicatorError, Result};

/// Require a lookback window of at least one sample.
pub fn ensure_period(name: &str, period: usize) -> Result<()> {
    if period == 0 {
        debug!(indicator = name, period, "rejected zero lookback period");
        return Err(IndicatorError::invalid_parameter(format!(
            "{name} period must be > 0"
        )));
    }
    Ok(())
}

/// Require two paired series to line up index for index.
pub fn ensure_same_length(name: &str, a: &[f64], b: &[f64]) -> Result<()> {
    if a.len() != b.len() {
        debug!(
            indicator = name,
            expected = a.len(),
            actual = b.len(),
            "rejected paired series of different lengths"
        );
        return Err(IndicatorError::length_mismatch(a.len(), b.len()));
    }
    Ok(())
}

/// Require a finite, non-negative band multiplier.
pub fn ensure_deviation(name: &str, deviation: f64) -> Result<()> {
    if !deviation.is_finite() || deviation < 0.0 {
        debug!(indicator = name, deviation, "rejected band multiplier");
        return Err(IndicatorError::invalid_parameter(format!(
            "{name} deviation must be finite and >= 0, got {deviation}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_period() {
        assert!(ensure_period("SMA", 1).is_ok());
        assert_eq!(
            ensure_period("SMA", 0),
            Err(IndicatorError::invalid_parameter("SMA period must be > 0"))
        );
    }

    #[test]
    fn test_ensure_same_length() {
        assert!(ensure_same_length("dev", &[1.0, 2.0], &[3.0, 4.0]).is_ok());
        assert_eq!(
            ensure_same_length("dev", &[1.0, 2.0], &[3.0]),
            Err(IndicatorError::length_mismatch(2, 1))
        );
    }

    #[test]
    fn test_ensure_deviation() {
        assert!(ensure_deviation("Bollinger", 0.0).is_ok());
        assert!(ensure_deviation("Bollinger", 2.0).is_ok());
        assert!(ensure_deviation("Bollinger", -0.5).is_err());
        assert!(ensure_deviation("Bollinger", f64::NAN).is_err());
        assert!(ensure_deviation("Bollinger", f64::INFINITY).is_err());
    }
}
