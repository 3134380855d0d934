//! Error types for the forecast_trade crate

use thiserror::Error;

/// Custom error types for the forecast_trade crate
#[derive(Debug, Error)]
pub enum ForecastError {
    /// Too few bars for the requested calculation
    #[error("Insufficient data: need at least {required} bars, have {actual}")]
    InsufficientData { required: usize, actual: usize },

    /// A price series that breaks ordering or price invariants
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Error from invalid parameters
    #[error("Invalid parameter: {0}")]
    InvalidParameter(String),

    /// Error from mathematical operations
    #[error("Math error: {0}")]
    Math(#[from] trade_math::MathError),

    /// Error from IO operations
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Error from CSV parsing
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Error from JSON (de)serialization
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

impl ForecastError {
    pub(crate) fn insufficient(required: usize, actual: usize) -> Self {
        ForecastError::InsufficientData { required, actual }
    }
}

/// Result type with our custom error
pub type Result<T> = std::result::Result<T, ForecastError>;
