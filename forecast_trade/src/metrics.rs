//! Point-in-time statistics for a price series

use crate::data::PriceSeries;
use crate::error::{ForecastError, Result};
use serde::Serialize;
use std::collections::BTreeMap;
use trade_math::moving_averages::{simple_moving_average, trailing_max, trailing_mean, trailing_min};
use tracing::{debug, warn};

/// Sessions in a trading year, the window for the 52-period high and low
pub const PERIOD_52_WINDOW: usize = 252;
/// Sessions averaged for the traded-volume figure
pub const AVERAGE_VOLUME_WINDOW: usize = 30;
/// Moving averages computed by [`compute_metrics`]
pub const DEFAULT_MOVING_AVERAGE_WINDOWS: [usize; 2] = [50, 200];
/// Window that decides the [`TrendSignal`]
pub const TREND_SIGNAL_WINDOW: usize = 50;

/// Whether the latest close sits above or below its 50-period average
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum TrendSignal {
    Bullish,
    Bearish,
}

/// Statistics derived from one [`PriceSeries`] at one instant
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetricsSnapshot {
    /// Latest close
    pub current_price: f64,
    /// Latest close minus the previous close
    pub price_change: f64,
    /// `price_change` as a percentage of the previous close; `None` when that close is zero
    pub pct_change: Option<f64>,
    /// Highest high over the last 252 sessions, or the whole series when shorter
    pub period_52_high: f64,
    /// Lowest low over the same window
    pub period_52_low: f64,
    /// Mean volume over the last 30 sessions, or the whole series when shorter
    pub average_volume_30: f64,
    /// Moving averages keyed by window; windows longer than the series are absent
    pub moving_averages: BTreeMap<usize, f64>,
}

impl MetricsSnapshot {
    /// Moving average for `window`, if it was requested and the series was long enough
    pub fn moving_average(&self, window: usize) -> Option<f64> {
        self.moving_averages.get(&window).copied()
    }

    /// Position of the current price within the 52-period range, in percent
    pub fn range_position_pct(&self) -> Option<f64> {
        let span = self.period_52_high - self.period_52_low;
        if span == 0.0 {
            return None;
        }
        Some((self.current_price - self.period_52_low) / span * 100.0)
    }

    /// Bullish when the current price is strictly above the 50-period average
    pub fn trend_signal(&self) -> Option<TrendSignal> {
        self.moving_average(TREND_SIGNAL_WINDOW).map(|ma| {
            if self.current_price > ma {
                TrendSignal::Bullish
            } else {
                TrendSignal::Bearish
            }
        })
    }
}

/// Compute the snapshot with the default 50 and 200 period moving averages
pub fn compute_metrics(series: &PriceSeries) -> Result<MetricsSnapshot> {
    compute_metrics_with_windows(series, &DEFAULT_MOVING_AVERAGE_WINDOWS)
}

/// Compute the snapshot with caller-chosen moving-average windows
pub fn compute_metrics_with_windows(
    series: &PriceSeries,
    windows: &[usize],
) -> Result<MetricsSnapshot> {
    series.require(2)?;
    if windows.contains(&0) {
        return Err(ForecastError::InvalidParameter(
            "moving average window must be greater than zero".to_string(),
        ));
    }

    let bars = series.bars();
    let current_price = bars[bars.len() - 1].close;
    let previous_price = bars[bars.len() - 2].close;
    let price_change = current_price - previous_price;
    let pct_change = percent_of(price_change, previous_price);
    if pct_change.is_none() {
        warn!("previous close is zero, daily percentage change is undefined");
    }

    let closes = series.closes();
    let moving_averages = windows
        .iter()
        .filter(|&&w| closes.len() >= w)
        .map(|&w| -> Result<(usize, f64)> { Ok((w, simple_moving_average(&closes, w)?)) })
        .collect::<Result<BTreeMap<_, _>>>()?;

    let snapshot = MetricsSnapshot {
        current_price,
        price_change,
        pct_change,
        period_52_high: trailing_max(&series.highs(), PERIOD_52_WINDOW)?,
        period_52_low: trailing_min(&series.lows(), PERIOD_52_WINDOW)?,
        average_volume_30: trailing_mean(&series.volumes(), AVERAGE_VOLUME_WINDOW)?,
        moving_averages,
    };
    debug!(?snapshot, "computed metrics");

    Ok(snapshot)
}

/// Moving average of closes over exactly `window` sessions.
///
/// Fails with [`ForecastError::InsufficientData`] instead of averaging a short window.
pub fn moving_average(series: &PriceSeries, window: usize) -> Result<f64> {
    if window == 0 {
        return Err(ForecastError::InvalidParameter(
            "moving average window must be greater than zero".to_string(),
        ));
    }
    series.require(window)?;
    Ok(simple_moving_average(&series.closes(), window)?)
}

/// `part` as a percentage of `whole`, undefined for a zero base
pub(crate) fn percent_of(part: f64, whole: f64) -> Option<f64> {
    if whole == 0.0 {
        None
    } else {
        Some(part / whole * 100.0)
    }
}
