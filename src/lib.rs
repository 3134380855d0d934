//! # Stock Forecast
//!
//! Facade over the workspace crates: price-series metrics, linear trend
//! forecasting and recommendation tiers from `forecast_trade`, numeric
//! primitives from `trade_math`.
//!
//! ## Example
//!
//! ```
//! use chrono::NaiveDate;
//! use stock_forecast_workspace::{classify, compute_metrics, forecast, PriceSeries};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 3, 4).unwrap();
//! let series = PriceSeries::from_closes(start, &[100.0, 110.0]).unwrap();
//!
//! let metrics = compute_metrics(&series).unwrap();
//! assert_eq!(metrics.price_change, 10.0);
//!
//! let result = forecast(&series, 1).unwrap();
//! assert!((result.predicted_price - 120.0).abs() < 1e-9);
//! println!("{}", classify(result.expected_change_pct.unwrap()));
//! ```

pub use forecast_trade::{
    catalog, classify, compute_metrics, config, data, forecast, metrics, models, strategies,
    utils, Bar, ForecastError, ForecastResult, ForecastSettings, MetricsSnapshot, PriceSeries,
    ProjectedPoint, Recommendation, RecommendationTier, RiskLevel, TrendForecaster, TrendSignal,
};
pub use trade_math;
