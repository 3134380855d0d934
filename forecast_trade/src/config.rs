//! Forecast settings, loaded from a JSON file and environment variables

use crate::error::{ForecastError, Result};
use crate::metrics::DEFAULT_MOVING_AVERAGE_WINDOWS;
use crate::models::{TrendForecaster, DEFAULT_CONFIDENCE_LEVEL};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

/// Longest horizon accepted, one calendar year of sessions
pub const MAX_HORIZON_DAYS: usize = 365;

pub const ENV_HORIZON_DAYS: &str = "STOCK_FORECAST_HORIZON_DAYS";
pub const ENV_CONFIDENCE_LEVEL: &str = "STOCK_FORECAST_CONFIDENCE_LEVEL";
pub const ENV_TRADING_DAYS_ONLY: &str = "STOCK_FORECAST_TRADING_DAYS_ONLY";

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ForecastSettings {
    pub horizon_days: usize,
    pub moving_average_windows: Vec<usize>,
    pub confidence_level: f64,
    pub trading_days_only: bool,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        ForecastSettings {
            horizon_days: 30,
            moving_average_windows: DEFAULT_MOVING_AVERAGE_WINDOWS.to_vec(),
            confidence_level: DEFAULT_CONFIDENCE_LEVEL,
            trading_days_only: true,
        }
    }
}

impl ForecastSettings {
    /// Read settings from a JSON file; missing keys keep their defaults
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let raw = fs::read_to_string(path.as_ref())?;
        let settings: ForecastSettings = serde_json::from_str(&raw)?;
        debug!(path = %path.as_ref().display(), ?settings, "loaded forecast settings");
        Ok(settings)
    }

    /// Override fields from `STOCK_FORECAST_*` environment variables
    pub fn apply_env_overrides(mut self) -> Result<Self> {
        if let Some(raw) = env_var(ENV_HORIZON_DAYS) {
            self.horizon_days = raw.trim().parse().map_err(|_| {
                ForecastError::InvalidParameter(format!(
                    "{} is not a whole number: {}",
                    ENV_HORIZON_DAYS, raw
                ))
            })?;
        }
        if let Some(raw) = env_var(ENV_CONFIDENCE_LEVEL) {
            self.confidence_level = raw.trim().parse().map_err(|_| {
                ForecastError::InvalidParameter(format!(
                    "{} is not a number: {}",
                    ENV_CONFIDENCE_LEVEL, raw
                ))
            })?;
        }
        if let Some(raw) = env_var(ENV_TRADING_DAYS_ONLY) {
            self.trading_days_only = parse_flag(&raw).ok_or_else(|| {
                ForecastError::InvalidParameter(format!(
                    "{} is not a boolean: {}",
                    ENV_TRADING_DAYS_ONLY, raw
                ))
            })?;
        }
        Ok(self)
    }

    pub fn validate(&self) -> Result<()> {
        if self.horizon_days == 0 || self.horizon_days > MAX_HORIZON_DAYS {
            return Err(ForecastError::InvalidParameter(format!(
                "horizon must be between 1 and {} days, got {}",
                MAX_HORIZON_DAYS, self.horizon_days
            )));
        }
        if self.moving_average_windows.contains(&0) {
            return Err(ForecastError::InvalidParameter(
                "moving average window must be greater than zero".to_string(),
            ));
        }
        self.forecaster().map(|_| ())
    }

    /// Forecaster configured with this confidence level
    pub fn forecaster(&self) -> Result<TrendForecaster> {
        TrendForecaster::new(self.confidence_level)
    }
}

fn env_var(key: &str) -> Option<String> {
    std::env::var(key).ok().filter(|v| !v.trim().is_empty())
}

fn parse_flag(raw: &str) -> Option<bool> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Some(true),
        "0" | "false" | "no" | "off" => Some(false),
        _ => None,
    }
}
