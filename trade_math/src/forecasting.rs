//! Trend fitting for time series prediction
//!
//! Ordinary least squares over a dense session index `x = 0..n-1`.
//! The index sums are evaluated in closed form with integer arithmetic so the
//! slope denominator is exact for any realistic series length; only the
//! price-weighted sums accumulate in `f64`.

use crate::{MathError, Result};
use serde::{Deserialize, Serialize};

/// Least-squares line `y = slope * x + intercept` fitted against the session index
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LinearRegression {
    slope: f64,
    intercept: f64,
    len: usize,
}

impl LinearRegression {
    /// Fit a line through `values`, using each value's position as its x coordinate
    pub fn fit(values: &[f64]) -> Result<Self> {
        let len = values.len();
        if len < 2 {
            return Err(MathError::InsufficientData {
                required: 2,
                actual: len,
            });
        }
        if let Some(i) = values.iter().position(|v| !v.is_finite()) {
            return Err(MathError::InvalidInput(format!(
                "Value at index {} is not finite",
                i
            )));
        }

        let n = len as u128;
        // sum x = n(n-1)/2, sum x^2 = (n-1)n(2n-1)/6
        let sum_x_exact = n * (n - 1) / 2;
        let sum_xx_exact = (n - 1) * n * (2 * n - 1) / 6;
        // n * sum x^2 - (sum x)^2 = n^2 (n^2 - 1) / 12, always > 0 for n >= 2
        let denominator_exact = n * sum_xx_exact - sum_x_exact * sum_x_exact;

        let mut sum_y = 0.0_f64;
        let mut sum_xy = 0.0_f64;
        for (i, &y) in values.iter().enumerate() {
            sum_y += y;
            sum_xy += i as f64 * y;
        }

        let n_f = len as f64;
        let sum_x = sum_x_exact as f64;
        let slope = (n_f * sum_xy - sum_x * sum_y) / denominator_exact as f64;
        let intercept = (sum_y - slope * sum_x) / n_f;

        Ok(Self {
            slope,
            intercept,
            len,
        })
    }

    /// Fitted value at session index `x`
    pub fn value_at(&self, x: f64) -> f64 {
        self.slope * x + self.intercept
    }

    /// Predict the value `periods_ahead` sessions after the last fitted point.
    ///
    /// `periods_ahead == 0` returns the fitted value at the last index.
    pub fn forecast(&self, periods_ahead: usize) -> f64 {
        self.value_at(self.x_for(periods_ahead))
    }

    /// Session index reached `periods_ahead` steps after the last fitted point
    pub fn x_for(&self, periods_ahead: usize) -> f64 {
        (self.len - 1) as f64 + periods_ahead as f64
    }

    pub fn slope(&self) -> f64 {
        self.slope
    }

    pub fn intercept(&self) -> f64 {
        self.intercept
    }

    /// Number of points the line was fitted on, always at least two
    pub fn observations(&self) -> usize {
        self.len
    }

    /// Mean of the session index, `(n - 1) / 2`
    pub fn mean_x(&self) -> f64 {
        (self.len as f64 - 1.0) / 2.0
    }

    /// Sum of squared deviations of the session index from its mean, `n(n^2 - 1) / 12`
    pub fn sxx(&self) -> f64 {
        let n = self.len as f64;
        n * (n * n - 1.0) / 12.0
    }

    /// Residual standard error with `n - 2` degrees of freedom.
    ///
    /// A two-point fit passes through both points exactly and has no degrees of
    /// freedom left, so it reports zero.
    pub fn residual_std_error(&self, values: &[f64]) -> Result<f64> {
        self.check_same_series(values)?;
        if self.len <= 2 {
            return Ok(0.0);
        }

        let ss_residual: f64 = values
            .iter()
            .enumerate()
            .map(|(i, &y)| (y - self.value_at(i as f64)).powi(2))
            .sum();

        Ok((ss_residual / (self.len - 2) as f64).sqrt())
    }

    /// Get the R-squared value (coefficient of determination)
    pub fn r_squared(&self, values: &[f64]) -> Result<f64> {
        self.check_same_series(values)?;

        let y_mean = values.iter().sum::<f64>() / self.len as f64;
        let mut ss_total = 0.0;
        let mut ss_residual = 0.0;

        for (i, &y) in values.iter().enumerate() {
            ss_total += (y - y_mean).powi(2);
            ss_residual += (y - self.value_at(i as f64)).powi(2);
        }

        if ss_total.abs() < 1e-10 {
            return Err(MathError::CalculationError(
                "Cannot calculate R-squared: total sum of squares is too small".to_string(),
            ));
        }

        Ok(1.0 - (ss_residual / ss_total))
    }

    fn check_same_series(&self, values: &[f64]) -> Result<()> {
        if values.len() != self.len {
            return Err(MathError::InvalidInput(format!(
                "Expected the {} fitted values, got {}",
                self.len,
                values.len()
            )));
        }
        Ok(())
    }
}
