//! Technical indicators for windowta.
//!
//! All indicators are implemented as pure functions that take slice inputs
//! and return Vec outputs of the same length. NaN values are used for the
//! warmup period.

pub mod momentum;
pub mod panel;
pub mod rolling;
pub mod trend;
pub mod volatility;

pub use momentum::{rate_of_change, rsi, slow_stochastic_k};
pub use panel::IndicatorPanel;
pub use rolling::{rolling_apply, rolling_max, rolling_mean, rolling_min, rolling_std};
pub use trend::{moving_average_deviation, simple_moving_average};
pub use volatility::{
    bollinger_bands, bollinger_envelope, prox_to_bollinger_bands, BollingerBandsResult,
};
