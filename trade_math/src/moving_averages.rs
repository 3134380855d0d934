//! Trailing-window averages and extrema
//!
//! Two window policies are offered, and callers pick explicitly:
//! - `trailing_*` truncates the window to the available data, so a 252-value
//!   window over 10 values covers those 10.
//! - `simple_moving_average` requires a full window and fails otherwise.

use crate::{MathError, Result};

/// The last `window` values, or all of them when fewer are available
pub fn trailing(values: &[f64], window: usize) -> &[f64] {
    let start = values.len().saturating_sub(window);
    &values[start..]
}

/// Mean of `values`, failing on an empty slice
pub fn mean(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }
    Ok(values.iter().sum::<f64>() / values.len() as f64)
}

/// Mean over the truncated trailing window
pub fn trailing_mean(values: &[f64], window: usize) -> Result<f64> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "Window must be greater than zero".to_string(),
        ));
    }
    mean(trailing(values, window))
}

/// Largest value in the truncated trailing window
pub fn trailing_max(values: &[f64], window: usize) -> Result<f64> {
    trailing_fold(values, window, f64::max)
}

/// Smallest value in the truncated trailing window
pub fn trailing_min(values: &[f64], window: usize) -> Result<f64> {
    trailing_fold(values, window, f64::min)
}

fn trailing_fold(values: &[f64], window: usize, pick: fn(f64, f64) -> f64) -> Result<f64> {
    if window == 0 {
        return Err(MathError::InvalidInput(
            "Window must be greater than zero".to_string(),
        ));
    }
    let slice = trailing(values, window);
    let (&first, rest) = slice.split_first().ok_or(MathError::InsufficientData {
        required: 1,
        actual: 0,
    })?;
    Ok(rest.iter().copied().fold(first, pick))
}

/// Simple moving average of the last `period` values.
///
/// Unlike [`trailing_mean`] this never averages a partial window.
pub fn simple_moving_average(values: &[f64], period: usize) -> Result<f64> {
    if period == 0 {
        return Err(MathError::InvalidInput(
            "Period must be greater than zero".to_string(),
        ));
    }
    if values.len() < period {
        return Err(MathError::InsufficientData {
            required: period,
            actual: values.len(),
        });
    }
    mean(trailing(values, period))
}
