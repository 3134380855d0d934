//! # Trade Math
//!
//! Numeric building blocks for price-series analysis.
//! Everything here works on plain `f64` slices ordered oldest to newest and
//! knows nothing about bars, dates or tickers.

use thiserror::Error;

pub mod forecasting;
pub mod moving_averages;
pub mod volatility;

pub use forecasting::LinearRegression;

/// Errors that can occur in trading-related calculations
#[derive(Error, Debug, Clone, PartialEq)]
pub enum MathError {
    #[error("Insufficient data for calculation: need {required} values, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Calculation error: {0}")]
    CalculationError(String),
}

/// Result type for trading math operations
pub type Result<T> = std::result::Result<T, MathError>;
