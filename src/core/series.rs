//! Helpers for reading indicator output.
//!
//! Indicator functions return raw `f64` values with NaN marking positions
//! that have no value yet. Rounding is a presentation step and lives here
//! rather than inside the indicators.

/// Round every value to `decimals` places, half away from zero.
///
/// NaN positions stay NaN.
pub fn round_series(values: &[f64], decimals: u32) -> Vec<f64> {
    let scale = 10f64.powi(decimals.min(308) as i32);
    values
        .iter()
        .map(|&v| {
            let scaled = v * scale;
            // Past f64 precision there is nothing left to round.
            if scaled.is_finite() {
                scaled.round() / scale
            } else {
                v
            }
        })
        .collect()
}

/// Index of the first defined (non-NaN) value.
#[inline]
pub fn first_defined(values: &[f64]) -> Option<usize> {
    values.iter().position(|v| !v.is_nan())
}

/// Number of defined (non-NaN) values.
#[inline]
pub fn count_defined(values: &[f64]) -> usize {
    values.iter().filter(|v| !v.is_nan()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round_series() {
        let values = vec![f64::NAN, 12.345_67, -3.005_1, 70.0];
        let rounded = round_series(&values, 2);

        assert!(rounded[0].is_nan());
        assert!((rounded[1] - 12.35).abs() < 1e-12);
        assert!((rounded[2] - -3.01).abs() < 1e-12);
        assert!((rounded[3] - 70.0).abs() < 1e-12);
    }

    #[test]
    fn test_round_series_zero_decimals() {
        let rounded = round_series(&[49.5, 50.4], 0);
        assert_eq!(rounded, vec![50.0, 50.0]);
    }

    #[test]
    fn test_defined_queries() {
        let values = vec![f64::NAN, f64::NAN, 0.0, 1.5];
        assert_eq!(first_defined(&values), Some(2));
        assert_eq!(count_defined(&values), 2);

        let empty: Vec<f64> = vec![f64::NAN; 3];
        assert_eq!(first_defined(&empty), None);
        assert_eq!(count_defined(&empty), 0);
    }
}
