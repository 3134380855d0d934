use forecast_trade::config::{
    ForecastSettings, ENV_CONFIDENCE_LEVEL, ENV_HORIZON_DAYS, ENV_TRADING_DAYS_ONLY,
};
use forecast_trade::data::load_csv;
use forecast_trade::error::ForecastError;
use forecast_trade::metrics::compute_metrics_with_windows;
use forecast_trade::strategies::{Recommendation, RecommendationTier};
use pretty_assertions::assert_eq;
use std::io::Write;

/// Roughly 15 months of weekday bars drifting upward
fn write_history() -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "Date,Open,High,Low,Close,Volume").unwrap();

    let mut date = chrono::NaiveDate::from_ymd_opt(2023, 1, 2).unwrap();
    for i in 0..320 {
        let close = 1000.0 + 2.0 * i as f64 + [4.0, -3.0, 1.0, -2.0][i % 4];
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2},{}",
            date,
            close - 1.0,
            close + 5.0,
            close - 6.0,
            close,
            10_000 + i * 10
        )
        .unwrap();
        date = forecast_trade::utils::next_session_dates(date, 1, true)[0];
    }
    file
}

#[test]
fn test_csv_to_recommendation() {
    let file = write_history();
    let settings = ForecastSettings::default();

    let series = load_csv(file.path()).unwrap();
    assert_eq!(series.len(), 320);

    let metrics = compute_metrics_with_windows(&series, &settings.moving_average_windows).unwrap();
    assert!(metrics.moving_average(50).is_some());
    assert!(metrics.moving_average(200).is_some());
    assert!(metrics.period_52_high > metrics.period_52_low);

    let forecaster = settings.forecaster().unwrap();
    let result = forecaster.forecast(&series, settings.horizon_days).unwrap();
    assert!(result.slope > 1.9 && result.slope < 2.1);
    assert!(result.lower_bound < result.predicted_price);
    assert!(result.upper_bound > result.predicted_price);

    // about +60 on ~1640 is under 5%
    assert_eq!(
        Recommendation::from_forecast(&result),
        Some(RecommendationTier::Buy)
    );

    let projection = forecaster
        .project(&series, settings.horizon_days, settings.trading_days_only)
        .unwrap();
    assert_eq!(projection.len(), 30);
    assert!(projection.iter().all(|p| p.date > series.last_date().unwrap()));
}

#[test]
fn test_settings_file_and_validation() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, r#"{{"horizon_days": 90, "confidence_level": 0.8}}"#).unwrap();

    let settings = ForecastSettings::from_file(file.path()).unwrap();
    assert_eq!(
        settings,
        ForecastSettings {
            horizon_days: 90,
            confidence_level: 0.8,
            ..ForecastSettings::default()
        }
    );
    assert!(settings.validate().is_ok());

    for bad in [
        ForecastSettings {
            horizon_days: 0,
            ..ForecastSettings::default()
        },
        ForecastSettings {
            horizon_days: 366,
            ..ForecastSettings::default()
        },
        ForecastSettings {
            confidence_level: 1.0,
            ..ForecastSettings::default()
        },
        ForecastSettings {
            moving_average_windows: vec![20, 0],
            ..ForecastSettings::default()
        },
    ] {
        assert!(matches!(
            bad.validate(),
            Err(ForecastError::InvalidParameter(_))
        ));
    }
}

#[test]
fn test_malformed_settings_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "horizon_days = 30").unwrap();
    assert!(matches!(
        ForecastSettings::from_file(file.path()),
        Err(ForecastError::Json(_))
    ));
}

#[test]
fn test_env_overrides() {
    // apply_env_overrides reads every variable, so all of them are exercised
    // from this one test to keep parallel tests from seeing each other's values
    std::env::set_var(ENV_HORIZON_DAYS, "45");
    std::env::set_var(ENV_CONFIDENCE_LEVEL, " 0.9 ");
    let settings = ForecastSettings::default().apply_env_overrides().unwrap();
    assert_eq!(settings.horizon_days, 45);
    assert_eq!(settings.confidence_level, 0.9);
    assert!(settings.trading_days_only);
    std::env::remove_var(ENV_HORIZON_DAYS);
    std::env::remove_var(ENV_CONFIDENCE_LEVEL);

    for (raw, expected) in [
        ("0", false),
        ("no", false),
        ("OFF", false),
        ("false", false),
        ("1", true),
        ("Yes", true),
        ("on", true),
        ("TRUE", true),
    ] {
        std::env::set_var(ENV_TRADING_DAYS_ONLY, raw);
        let settings = ForecastSettings::default().apply_env_overrides().unwrap();
        assert_eq!(settings.trading_days_only, expected, "flag {:?}", raw);
    }
    std::env::remove_var(ENV_TRADING_DAYS_ONLY);

    for (key, raw) in [
        (ENV_HORIZON_DAYS, "thirty"),
        (ENV_CONFIDENCE_LEVEL, "high"),
        (ENV_TRADING_DAYS_ONLY, "maybe"),
    ] {
        std::env::set_var(key, raw);
        let result = ForecastSettings::default().apply_env_overrides();
        std::env::remove_var(key);
        assert!(
            matches!(result, Err(ForecastError::InvalidParameter(ref msg)) if msg.contains(key)),
            "{} = {:?}",
            key,
            raw
        );
    }

    // blank values are ignored
    std::env::set_var(ENV_CONFIDENCE_LEVEL, "  ");
    let settings = ForecastSettings::default().apply_env_overrides().unwrap();
    std::env::remove_var(ENV_CONFIDENCE_LEVEL);
    assert_eq!(settings, ForecastSettings::default());
}
