//! Command-line host: load a price CSV, print metrics, a trend forecast and a recommendation.
//!
//! Usage:
//!   stock_forecast --data tcs.csv --symbol TCS --horizon 30
//!   stock_forecast --data tcs.csv --config settings.json --format json

use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Parser, ValueEnum};
use forecast_trade::catalog::{self, Exchange};
use forecast_trade::data::load_csv;
use forecast_trade::metrics::compute_metrics_with_windows;
use forecast_trade::utils::format_inr;
use forecast_trade::{
    ForecastResult, ForecastSettings, MetricsSnapshot, ProjectedPoint, Recommendation,
    RecommendationTier, RiskLevel,
};
use serde::Serialize;
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "stock_forecast", version, about = "Linear trend forecast for a daily price series")]
struct Cli {
    /// CSV file with Date,Open,High,Low,Close,Volume columns
    #[arg(long)]
    data: PathBuf,

    /// Ticker symbol or curated name (e.g. "TCS", "INFY.NS")
    #[arg(long)]
    symbol: Option<String>,

    /// Sessions to forecast past the last bar
    #[arg(long)]
    horizon: Option<usize>,

    /// JSON settings file
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,
}

#[derive(Debug, Serialize)]
struct Report {
    symbol: Option<String>,
    display_name: Option<String>,
    exchange: Option<Exchange>,
    as_of: Option<NaiveDate>,
    metrics: MetricsSnapshot,
    forecast: ForecastResult,
    risk_pct: Option<f64>,
    risk_level: Option<RiskLevel>,
    recommendation: Option<RecommendationTier>,
    projection: Vec<ProjectedPoint>,
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("forecast_trade=info,stock_forecast=info")),
        )
        .with_writer(std::io::stderr)
        .with_target(true)
        .init();

    let cli = Cli::parse();
    let settings = load_settings(&cli)?;

    let series = load_csv(&cli.data)
        .with_context(|| format!("failed to load price data from {}", cli.data.display()))?;
    info!(bars = series.len(), "price series loaded");

    let metrics = compute_metrics_with_windows(&series, &settings.moving_average_windows)?;
    let forecaster = settings.forecaster()?;
    let forecast = forecaster.forecast(&series, settings.horizon_days)?;
    let projection =
        forecaster.project(&series, settings.horizon_days, settings.trading_days_only)?;
    let recommendation = Recommendation::from_forecast(&forecast);
    if recommendation.is_none() {
        warn!("expected change is undefined, no recommendation issued");
    }

    let symbol = cli.symbol.as_deref().map(catalog::resolve);
    let report = Report {
        display_name: symbol.as_deref().map(catalog::display_name),
        exchange: symbol.as_deref().map(Exchange::from_symbol),
        symbol,
        as_of: series.last_date(),
        risk_pct: forecast.risk_pct(),
        risk_level: forecast.risk_level(),
        recommendation,
        metrics,
        forecast,
        projection,
    };

    match cli.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
        OutputFormat::Text => print_summary(&report),
    }

    Ok(())
}

fn load_settings(cli: &Cli) -> Result<ForecastSettings> {
    let settings = match &cli.config {
        Some(path) => ForecastSettings::from_file(path)
            .with_context(|| format!("failed to read settings from {}", path.display()))?,
        None => ForecastSettings::default(),
    };
    let mut settings = settings.apply_env_overrides()?;
    if let Some(horizon) = cli.horizon {
        settings.horizon_days = horizon;
    }
    settings.validate()?;
    Ok(settings)
}

fn print_summary(report: &Report) {
    let m = &report.metrics;
    let f = &report.forecast;
    let pct = |v: Option<f64>| v.map_or_else(|| "undefined".to_string(), |p| format!("{:+.2}%", p));

    if let Some(name) = &report.display_name {
        let exchange = report.exchange.unwrap_or(Exchange::Unknown);
        println!("{} ({})", name, exchange);
    }
    if let Some(date) = report.as_of {
        println!("As of:            {}", date);
    }
    println!("Current price:    {}", format_inr(m.current_price));
    println!("Daily change:     {} ({})", format_inr(m.price_change), pct(m.pct_change));
    println!("52 period high:   {}", format_inr(m.period_52_high));
    println!("52 period low:    {}", format_inr(m.period_52_low));
    println!("Avg volume (30):  {:.0}", m.average_volume_30);
    for (window, value) in &m.moving_averages {
        println!("MA {:<13} {}", format!("{}:", window), format_inr(*value));
    }
    if let Some(signal) = m.trend_signal() {
        println!("Trend signal:     {:?}", signal);
    }
    println!();
    println!("Horizon:          {} sessions", f.horizon_days);
    println!("Predicted price:  {}", format_inr(f.predicted_price));
    println!("Expected change:  {} ({})", format_inr(f.expected_change), pct(f.expected_change_pct));
    println!(
        "Interval:         {} .. {}",
        format_inr(f.lower_bound),
        format_inr(f.upper_bound)
    );
    println!("Confidence:       {:.1}%", f.confidence_pct);
    if let Some(r_squared) = f.r_squared {
        println!("Trend fit (R2):   {:.3}", r_squared);
    }
    if let (Some(risk), Some(level)) = (report.risk_pct, report.risk_level) {
        println!("Risk:             {:.1}% ({:?})", risk, level);
    }
    match report.recommendation {
        Some(tier) => println!("Recommendation:   {}", tier),
        None => println!("Recommendation:   unavailable"),
    }
}
