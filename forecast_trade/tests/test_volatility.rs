use approx::assert_relative_eq;
use chrono::NaiveDate;
use forecast_trade::data::PriceSeries;
use forecast_trade::models::{confidence_score, forecast};

fn series_from_closes(closes: &[f64]) -> PriceSeries {
    PriceSeries::from_closes(NaiveDate::from_ymd_opt(2023, 6, 1).unwrap(), closes).unwrap()
}

#[test]
fn test_flat_prices_give_full_confidence() {
    let series = series_from_closes(&[250.0; 40]);
    let result = forecast(&series, 30).unwrap();
    assert_eq!(result.confidence_pct, 100.0);
}

#[test]
fn test_extreme_volatility_clamps_to_zero() {
    // returns alternate +100% / -50%, stddev 0.75
    let closes: Vec<f64> = (0..20).map(|i| if i % 2 == 0 { 100.0 } else { 200.0 }).collect();
    let result = forecast(&series_from_closes(&closes), 5).unwrap();
    assert_eq!(result.confidence_pct, 0.0);
}

#[test]
fn test_confidence_is_linear_in_population_stddev() {
    // returns 0.01 and -1/101; population stddev is half their distance
    let closes = [100.0, 101.0, 100.0];
    let half_spread = (0.01 + 1.0 / 101.0) / 2.0;
    assert_relative_eq!(
        confidence_score(&closes),
        100.0 - half_spread * 1000.0,
        epsilon = 1e-9
    );
}

#[test]
fn test_constant_growth_has_no_volatility() {
    let closes: Vec<f64> = (0..30).map(|i| 100.0 * 1.01_f64.powi(i)).collect();
    assert_relative_eq!(confidence_score(&closes), 100.0, epsilon = 1e-9);
}

#[test]
fn test_horizon_does_not_change_confidence() {
    let closes = [100.0, 102.0, 99.0, 103.0, 101.0, 104.0];
    let series = series_from_closes(&closes);
    let short = forecast(&series, 1).unwrap();
    let long = forecast(&series, 250).unwrap();
    assert_eq!(short.confidence_pct, long.confidence_pct);
    assert!(short.confidence_pct > 0.0 && short.confidence_pct < 100.0);
}

#[test]
fn test_returns_after_zero_close_are_skipped() {
    // only 0 -> 10 is undefined; 10 -> 10 and 10 -> 10 are flat
    assert_eq!(confidence_score(&[0.0, 10.0, 10.0, 10.0]), 100.0);
    assert_eq!(confidence_score(&[0.0, 0.0]), 0.0);
}
