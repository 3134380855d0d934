//! Linear trend forecasting
//!
//! The forecaster fits one least-squares line through the closes against the
//! session index (not the calendar date) and extrapolates it. Alongside the
//! point forecast it reports two different notions of certainty:
//!
//! - `confidence_pct`: a heuristic score, `100 - 1000 * stddev(daily returns)`
//!   clamped to `[0, 100]`, using the population standard deviation. It is a
//!   linear map of recent volatility, not a statistical confidence interval,
//!   and it does not depend on the horizon.
//! - `lower_bound` / `upper_bound`: the OLS prediction interval at the
//!   forecaster's confidence level, which does widen with the horizon.

use crate::data::PriceSeries;
use crate::error::{ForecastError, Result};
use crate::metrics::percent_of;
use crate::strategies::RiskLevel;
use crate::utils::next_session_dates;
use chrono::NaiveDate;
use serde::Serialize;
use statrs::distribution::{ContinuousCDF, Normal};
use trade_math::volatility::{simple_returns, std_dev};
use trade_math::LinearRegression;
use tracing::{debug, warn};

/// Multiplier applied to return volatility by the confidence heuristic
pub const CONFIDENCE_VOLATILITY_SCALE: f64 = 1000.0;
/// Prediction-interval level used by [`forecast`] and [`project`]
pub const DEFAULT_CONFIDENCE_LEVEL: f64 = 0.95;
/// Longest horizon the forecaster extrapolates to, about a century of sessions
pub const MAX_FORECAST_HORIZON: usize = 36_500;

/// Result of a forecast operation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForecastResult {
    /// Sessions beyond the last bar that were extrapolated
    pub horizon_days: usize,
    /// Fitted line evaluated at `n - 1 + horizon_days`
    pub predicted_price: f64,
    /// `predicted_price` minus the latest close
    pub expected_change: f64,
    /// `expected_change` relative to the latest close; `None` when that close is zero
    pub expected_change_pct: Option<f64>,
    /// Volatility heuristic in `[0, 100]`
    pub confidence_pct: f64,
    /// Price change per session of the fitted line
    pub slope: f64,
    /// Fitted value at the first session
    pub intercept: f64,
    /// Share of close variance explained by the line; `None` for a flat series
    pub r_squared: Option<f64>,
    /// Lower edge of the prediction interval
    pub lower_bound: f64,
    /// Upper edge of the prediction interval
    pub upper_bound: f64,
}

impl ForecastResult {
    /// Width of the prediction interval as a percentage of the predicted price
    pub fn risk_pct(&self) -> Option<f64> {
        percent_of(self.upper_bound - self.lower_bound, self.predicted_price)
    }

    pub fn risk_level(&self) -> Option<RiskLevel> {
        self.risk_pct().map(RiskLevel::from_pct)
    }
}

/// One step of a day-by-day projection
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectedPoint {
    pub date: NaiveDate,
    pub predicted_price: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    /// Change from the previous projected step; `None` on the first step
    pub change: Option<f64>,
    /// `change` relative to the previous projected price
    pub change_pct: Option<f64>,
}

/// Least-squares trend forecaster
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendForecaster {
    confidence_level: f64,
}

impl Default for TrendForecaster {
    fn default() -> Self {
        Self {
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
        }
    }
}

impl TrendForecaster {
    /// Create a forecaster whose prediction interval covers `confidence_level`, in (0, 1)
    pub fn new(confidence_level: f64) -> Result<Self> {
        if !(confidence_level > 0.0 && confidence_level < 1.0) {
            return Err(ForecastError::InvalidParameter(format!(
                "confidence level must be between 0 and 1 (exclusive), got {}",
                confidence_level
            )));
        }
        Ok(Self { confidence_level })
    }

    pub fn confidence_level(&self) -> f64 {
        self.confidence_level
    }

    /// Extrapolate the fitted trend `horizon_days` sessions past the last bar.
    ///
    /// A zero horizon returns the fitted value at the last observed session.
    /// Horizons beyond [`MAX_FORECAST_HORIZON`] are rejected.
    pub fn forecast(&self, series: &PriceSeries, horizon_days: usize) -> Result<ForecastResult> {
        check_horizon(horizon_days)?;
        let fit = TrendFit::new(series, self.confidence_level)?;

        let predicted_price = fit.line.forecast(horizon_days);
        let half_width = fit.half_width(horizon_days);
        let expected_change = predicted_price - fit.current_price;
        let expected_change_pct = percent_of(expected_change, fit.current_price);
        if expected_change_pct.is_none() {
            warn!("latest close is zero, expected percentage change is undefined");
        }

        let result = ForecastResult {
            horizon_days,
            predicted_price,
            expected_change,
            expected_change_pct,
            confidence_pct: confidence_score(&fit.closes),
            slope: fit.line.slope(),
            intercept: fit.line.intercept(),
            r_squared: fit.line.r_squared(&fit.closes).ok(),
            lower_bound: predicted_price - half_width,
            upper_bound: predicted_price + half_width,
        };
        debug!(?result, "trend forecast");

        Ok(result)
    }

    /// Fitted price and interval for every session from 1 to `horizon_days`
    pub fn project(
        &self,
        series: &PriceSeries,
        horizon_days: usize,
        trading_days_only: bool,
    ) -> Result<Vec<ProjectedPoint>> {
        check_horizon(horizon_days)?;
        let fit = TrendFit::new(series, self.confidence_level)?;
        let last_date = series
            .last_date()
            .ok_or_else(|| ForecastError::insufficient(2, 0))?;

        let mut points: Vec<ProjectedPoint> = Vec::with_capacity(horizon_days);
        for (step, date) in (1..=horizon_days).zip(next_session_dates(
            last_date,
            horizon_days,
            trading_days_only,
        )) {
            let predicted_price = fit.line.forecast(step);
            let half_width = fit.half_width(step);
            let previous = points.last().map(|p| p.predicted_price);
            let change = previous.map(|prev| predicted_price - prev);
            let change_pct = previous
                .zip(change)
                .and_then(|(prev, change)| percent_of(change, prev));

            points.push(ProjectedPoint {
                date,
                predicted_price,
                lower_bound: predicted_price - half_width,
                upper_bound: predicted_price + half_width,
                change,
                change_pct,
            });
        }

        Ok(points)
    }
}

fn check_horizon(horizon_days: usize) -> Result<()> {
    if horizon_days > MAX_FORECAST_HORIZON {
        return Err(ForecastError::InvalidParameter(format!(
            "horizon must be at most {} sessions, got {}",
            MAX_FORECAST_HORIZON, horizon_days
        )));
    }
    Ok(())
}

/// Forecast with the default 95% prediction interval
pub fn forecast(series: &PriceSeries, horizon_days: usize) -> Result<ForecastResult> {
    TrendForecaster::default().forecast(series, horizon_days)
}

/// Day-by-day projection with the default 95% prediction interval
pub fn project(
    series: &PriceSeries,
    horizon_days: usize,
    trading_days_only: bool,
) -> Result<Vec<ProjectedPoint>> {
    TrendForecaster::default().project(series, horizon_days, trading_days_only)
}

/// Volatility heuristic `clamp(100 - 1000 * stddev(returns), 0, 100)`.
///
/// Returns after a zero close are undefined and left out. A series with no
/// defined return at all scores zero.
pub fn confidence_score(closes: &[f64]) -> f64 {
    let returns = simple_returns(closes);
    let defined: Vec<f64> = returns.iter().flatten().copied().collect();
    let skipped = returns.len() - defined.len();
    if skipped > 0 {
        warn!(skipped, "daily returns after a zero close were left out");
    }

    match std_dev(&defined) {
        Ok(volatility) => {
            (100.0 - volatility * CONFIDENCE_VOLATILITY_SCALE).clamp(0.0, 100.0)
        }
        Err(_) => 0.0,
    }
}

/// Everything a forecast or projection needs from one fit
struct TrendFit {
    closes: Vec<f64>,
    line: LinearRegression,
    current_price: f64,
    residual_std_error: f64,
    z: f64,
}

impl TrendFit {
    fn new(series: &PriceSeries, confidence_level: f64) -> Result<Self> {
        series.require(2)?;

        let closes = series.closes();
        let line = LinearRegression::fit(&closes)?;
        let residual_std_error = line.residual_std_error(&closes)?;
        let normal = Normal::new(0.0, 1.0)
            .map_err(|e| ForecastError::InvalidParameter(e.to_string()))?;
        let z = normal.inverse_cdf(0.5 + confidence_level / 2.0);
        let current_price = closes[closes.len() - 1];

        debug!(
            bars = closes.len(),
            slope = line.slope(),
            intercept = line.intercept(),
            residual_std_error,
            "fitted linear trend"
        );

        Ok(Self {
            closes,
            line,
            current_price,
            residual_std_error,
            z,
        })
    }

    /// Half width of the prediction interval `periods_ahead` sessions out
    fn half_width(&self, periods_ahead: usize) -> f64 {
        let n = self.line.observations() as f64;
        let dx = self.line.x_for(periods_ahead) - self.line.mean_x();
        let leverage = 1.0 + 1.0 / n + dx * dx / self.line.sxx();
        self.z * self.residual_std_error * leverage.sqrt()
    }
}
