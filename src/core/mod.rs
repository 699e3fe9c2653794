//! Core types and utilities for windowta.

pub mod config;
pub mod error;
pub mod series;
pub mod validation;

pub use config::IndicatorConfig;
pub use error::{IndicatorError, Result};
pub use series::{count_defined, first_defined, round_series};
