//! Turning a forecast into a trading recommendation

use crate::models::ForecastResult;
use serde::Serialize;
use std::fmt;

/// Discrete recommendation derived from the expected percentage move
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum RecommendationTier {
    /// Expected move above +5%
    StrongBuy,
    /// Expected move in (0%, +5%]
    Buy,
    /// Expected move in (-5%, 0%]
    Hold,
    /// Expected move of -5% or worse
    Sell,
}

impl fmt::Display for RecommendationTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            RecommendationTier::StrongBuy => "STRONG BUY",
            RecommendationTier::Buy => "BUY",
            RecommendationTier::Hold => "HOLD",
            RecommendationTier::Sell => "SELL",
        };
        f.write_str(label)
    }
}

/// Map an expected percentage change onto a tier.
///
/// Each threshold is exclusive from below, so a value sitting exactly on an
/// edge lands in the lower tier: `5.0` is a buy, `0.0` a hold, `-5.0` a sell.
/// NaN compares false everywhere and falls through to [`RecommendationTier::Sell`].
pub fn classify(expected_change_pct: f64) -> RecommendationTier {
    if expected_change_pct > 5.0 {
        RecommendationTier::StrongBuy
    } else if expected_change_pct > 0.0 {
        RecommendationTier::Buy
    } else if expected_change_pct > -5.0 {
        RecommendationTier::Hold
    } else {
        RecommendationTier::Sell
    }
}

/// Recommendation helpers over a full forecast
pub struct Recommendation;

impl Recommendation {
    /// Tier for a forecast, or `None` when its percentage change is undefined
    pub fn from_forecast(forecast: &ForecastResult) -> Option<RecommendationTier> {
        forecast.expected_change_pct.map(classify)
    }
}

/// How wide the prediction interval is relative to the predicted price
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RiskLevel {
    /// Interval narrower than 10% of the price
    Low,
    /// Interval from 10% up to 20%
    Medium,
    /// Interval of 20% or more
    High,
}

impl RiskLevel {
    pub fn from_pct(risk_pct: f64) -> Self {
        if risk_pct < 10.0 {
            RiskLevel::Low
        } else if risk_pct < 20.0 {
            RiskLevel::Medium
        } else {
            RiskLevel::High
        }
    }
}
