//! # Forecast Trade
//!
//! Descriptive statistics, linear trend forecasting and buy/sell tiers for a
//! daily equity price series.
//!
//! ## Features
//!
//! - Validated OHLCV price series, loadable from market-data CSV exports
//! - Metrics: latest price, daily change, 52-period extrema, average volume,
//!   moving averages
//! - Trend forecast: least-squares line over the session index, a volatility
//!   confidence score and a prediction interval
//! - Recommendation tiers from the expected percentage move
//! - Indian-market helpers: curated NSE tickers, exchange detection and rupee
//!   formatting
//!
//! Every calculation is a pure function of an immutable [`PriceSeries`].
//!
//! ## Quick Start
//!
//! ```rust
//! use chrono::NaiveDate;
//! use forecast_trade::{classify, compute_metrics, forecast, PriceSeries, RecommendationTier};
//!
//! let start = NaiveDate::from_ymd_opt(2024, 1, 1).unwrap();
//! let closes: Vec<f64> = (0..60).map(|i| 100.0 + i as f64).collect();
//! let series = PriceSeries::from_closes(start, &closes)?;
//!
//! let metrics = compute_metrics(&series)?;
//! assert_eq!(metrics.current_price, 159.0);
//! assert!(metrics.moving_average(50).is_some());
//! assert!(metrics.moving_average(200).is_none());
//!
//! let result = forecast(&series, 10)?;
//! assert!((result.predicted_price - 169.0).abs() < 1e-9);
//!
//! let tier = classify(result.expected_change_pct.unwrap_or(0.0));
//! assert_eq!(tier, RecommendationTier::StrongBuy);
//! # Ok::<(), forecast_trade::ForecastError>(())
//! ```

pub mod catalog;
pub mod config;
pub mod data;
pub mod error;
pub mod metrics;
pub mod models;
pub mod strategies;
pub mod utils;

// Re-export commonly used types
pub use crate::config::ForecastSettings;
pub use crate::data::{Bar, PriceSeries};
pub use crate::error::{ForecastError, Result};
pub use crate::metrics::{compute_metrics, MetricsSnapshot, TrendSignal};
pub use crate::models::{forecast, ForecastResult, ProjectedPoint, TrendForecaster};
pub use crate::strategies::{classify, Recommendation, RecommendationTier, RiskLevel};

// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const NAME: &str = env!("CARGO_PKG_NAME");
