//! Return and dispersion calculations
//!
//! Standard deviations here are population (divide by `n`) throughout.

use crate::{MathError, Result};

/// Simple period-over-period returns `(p[i] - p[i-1]) / p[i-1]`.
///
/// Entry `i - 1` of the output belongs to the step ending at `prices[i]`.
/// A step whose previous price is zero has no defined return and yields `None`.
pub fn simple_returns(prices: &[f64]) -> Vec<Option<f64>> {
    prices
        .windows(2)
        .map(|w| {
            if w[0] == 0.0 {
                None
            } else {
                Some((w[1] - w[0]) / w[0])
            }
        })
        .collect()
}

/// Population standard deviation
pub fn std_dev(values: &[f64]) -> Result<f64> {
    if values.is_empty() {
        return Err(MathError::InsufficientData {
            required: 1,
            actual: 0,
        });
    }

    let n = values.len() as f64;
    let mean = values.iter().sum::<f64>() / n;
    let variance = values.iter().map(|&v| (v - mean).powi(2)).sum::<f64>() / n;

    Ok(variance.sqrt())
}
