//! PyO3 function bindings for windowta.

use numpy::{PyArray1, PyReadonlyArray1};
use pyo3::prelude::*;

use crate::indicators;

use super::numpy_bridge::*;

/// Rolling mean.
#[pyfunction]
pub fn rolling_mean<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::rolling::rolling_mean(&numpy_to_vec_f64(&data), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Rolling population standard deviation.
#[pyfunction]
pub fn rolling_std<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::rolling::rolling_std(&numpy_to_vec_f64(&data), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Rolling maximum.
#[pyfunction]
pub fn rolling_max<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::rolling::rolling_max(&numpy_to_vec_f64(&data), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Rolling minimum.
#[pyfunction]
pub fn rolling_min<'py>(
    py: Python<'py>,
    data: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::rolling::rolling_min(&numpy_to_vec_f64(&data), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Relative Strength Index (0-100).
#[pyfunction]
#[pyo3(signature = (prices, n=14))]
pub fn rsi<'py>(
    py: Python<'py>,
    prices: PyReadonlyArray1<f64>,
    n: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::momentum::rsi(&numpy_to_vec_f64(&prices), n)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Slow stochastic %K (0-1).
#[pyfunction]
#[pyo3(signature = (series, period=14))]
pub fn slow_stochastic_k<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::momentum::slow_stochastic_k(&numpy_to_vec_f64(&series), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Rate of change.
#[pyfunction]
pub fn rate_of_change<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::momentum::rate_of_change(&numpy_to_vec_f64(&series), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Simple Moving Average.
#[pyfunction]
pub fn simple_moving_average<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
    period: usize,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::trend::simple_moving_average(&numpy_to_vec_f64(&series), period)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Moving-average deviation `(a - b) / b`.
#[pyfunction]
pub fn moving_average_deviation<'py>(
    py: Python<'py>,
    series_a: PyReadonlyArray1<f64>,
    series_b: PyReadonlyArray1<f64>,
) -> PyResult<&'py PyArray1<f64>> {
    let a = numpy_to_vec_f64(&series_a);
    let b = numpy_to_vec_f64(&series_b);
    let result = indicators::trend::moving_average_deviation(&a, &b)?;
    Ok(vec_to_numpy_f64(py, result))
}

/// Bollinger Bands as `(upper, lower)`.
#[pyfunction]
pub fn bollinger_bands<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
    period: usize,
    deviation: f64,
) -> PyResult<(&'py PyArray1<f64>, &'py PyArray1<f64>)> {
    let (upper, lower) =
        indicators::volatility::bollinger_bands(&numpy_to_vec_f64(&series), period, deviation)?;
    Ok((vec_to_numpy_f64(py, upper), vec_to_numpy_f64(py, lower)))
}

/// Position within the Bollinger bands (0 = lower, 1 = upper).
#[pyfunction]
pub fn prox_to_bollinger_bands<'py>(
    py: Python<'py>,
    series: PyReadonlyArray1<f64>,
    period: usize,
    deviation: f64,
) -> PyResult<&'py PyArray1<f64>> {
    let result = indicators::volatility::prox_to_bollinger_bands(
        &numpy_to_vec_f64(&series),
        period,
        deviation,
    )?;
    Ok(vec_to_numpy_f64(py, result))
}
