//! Price series handling for forecasting
//!
//! A [`PriceSeries`] is the only input the metrics engine and the forecaster
//! accept. Construction validates ordering and price sanity once, so the
//! calculations downstream can rely on it.

use crate::error::{ForecastError, Result};
use crate::utils::next_session_dates;
use chrono::NaiveDate;
use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::debug;

/// One trading session's OHLCV record
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bar {
    /// Session date
    pub date: NaiveDate,
    /// Open price
    pub open: f64,
    /// High price
    pub high: f64,
    /// Low price
    pub low: f64,
    /// Close price
    pub close: f64,
    /// Traded volume
    pub volume: u64,
}

impl Bar {
    pub fn new(date: NaiveDate, open: f64, high: f64, low: f64, close: f64, volume: u64) -> Self {
        Self {
            date,
            open,
            high,
            low,
            close,
            volume,
        }
    }

    /// A bar that opened, peaked, bottomed and closed at the same price
    pub fn flat(date: NaiveDate, price: f64) -> Self {
        Self::new(date, price, price, price, price, 0)
    }

    fn check(&self) -> std::result::Result<(), String> {
        let prices = [
            ("open", self.open),
            ("high", self.high),
            ("low", self.low),
            ("close", self.close),
        ];
        for (name, value) in prices {
            if !value.is_finite() {
                return Err(format!("{} price is not finite", name));
            }
            if value < 0.0 {
                return Err(format!("{} price {} is negative", name, value));
            }
        }
        if self.low > self.open.min(self.close) || self.high < self.open.max(self.close) {
            return Err(format!(
                "open {} / close {} outside low {} .. high {}",
                self.open, self.close, self.low, self.high
            ));
        }
        Ok(())
    }
}

/// Bars for one ticker, ascending by date with no duplicates.
///
/// Empty and single-bar series are valid values; operations that need more
/// history report [`ForecastError::InsufficientData`] themselves.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct PriceSeries {
    bars: Vec<Bar>,
}

impl PriceSeries {
    /// Validate and wrap a list of bars
    pub fn new(bars: Vec<Bar>) -> Result<Self> {
        for (i, bar) in bars.iter().enumerate() {
            bar.check().map_err(|reason| {
                ForecastError::InvalidData(format!("bar {} ({}): {}", i, bar.date, reason))
            })?;
        }

        if let Some(pair) = bars.windows(2).find(|w| w[0].date >= w[1].date) {
            return Err(ForecastError::InvalidData(format!(
                "dates must be strictly ascending, found {} followed by {}",
                pair[0].date, pair[1].date
            )));
        }

        Ok(Self { bars })
    }

    /// Build a series of flat bars from closing prices, one per weekday from `start`
    pub fn from_closes(start: NaiveDate, closes: &[f64]) -> Result<Self> {
        let mut dates = Vec::with_capacity(closes.len());
        if !closes.is_empty() {
            dates.push(start);
            dates.extend(next_session_dates(start, closes.len() - 1, true));
        }

        let bars = dates
            .into_iter()
            .zip(closes.iter())
            .map(|(date, &close)| Bar::flat(date, close))
            .collect();

        Self::new(bars)
    }

    pub fn len(&self) -> usize {
        self.bars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bars.is_empty()
    }

    pub fn bars(&self) -> &[Bar] {
        &self.bars
    }

    pub fn first(&self) -> Option<&Bar> {
        self.bars.first()
    }

    pub fn last(&self) -> Option<&Bar> {
        self.bars.last()
    }

    /// Date of the most recent session
    pub fn last_date(&self) -> Option<NaiveDate> {
        self.bars.last().map(|b| b.date)
    }

    /// The most recent `n` bars, or the whole series when it is shorter
    pub fn last_n(&self, n: usize) -> &[Bar] {
        let start = self.bars.len().saturating_sub(n);
        &self.bars[start..]
    }

    pub fn closes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.close).collect()
    }

    pub fn highs(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.high).collect()
    }

    pub fn lows(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.low).collect()
    }

    pub fn volumes(&self) -> Vec<f64> {
        self.bars.iter().map(|b| b.volume as f64).collect()
    }

    /// Fail unless the series holds at least `required` bars
    pub fn require(&self, required: usize) -> Result<()> {
        if self.bars.len() < required {
            return Err(ForecastError::insufficient(required, self.bars.len()));
        }
        Ok(())
    }
}

impl TryFrom<Vec<Bar>> for PriceSeries {
    type Error = ForecastError;

    fn try_from(bars: Vec<Bar>) -> Result<Self> {
        Self::new(bars)
    }
}

/// Load a price series from a CSV file
///
/// The expected CSV layout is the usual market-data export:
/// `Date,Open,High,Low,Close,Volume`
/// `2024-01-02,100.5,101.2,100.4,100.8,5000`
///
/// Header names are matched case-insensitively and extra columns are ignored.
pub fn load_csv<P: AsRef<Path>>(path: P) -> Result<PriceSeries> {
    let file = File::open(path.as_ref())?;
    let series = read_csv(file)?;
    debug!(
        path = %path.as_ref().display(),
        bars = series.len(),
        "loaded price series"
    );
    Ok(series)
}

/// Parse a price series from any CSV source
pub fn read_csv<R: Read>(source: R) -> Result<PriceSeries> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .trim(csv::Trim::All)
        .from_reader(source);

    let columns = Columns::locate(reader.headers()?)?;

    let mut bars = Vec::new();
    for (i, record) in reader.records().enumerate() {
        let record = record?;
        // header is line 1
        bars.push(columns.parse(&record, i + 2)?);
    }

    PriceSeries::new(bars)
}

struct Columns {
    date: usize,
    open: usize,
    high: usize,
    low: usize,
    close: usize,
    volume: usize,
}

impl Columns {
    fn locate(headers: &StringRecord) -> Result<Self> {
        let find = |name: &str| {
            headers
                .iter()
                .position(|h| h.eq_ignore_ascii_case(name))
                .ok_or_else(|| ForecastError::InvalidData(format!("missing '{}' column", name)))
        };

        Ok(Self {
            date: find("date")?,
            open: find("open")?,
            high: find("high")?,
            low: find("low")?,
            close: find("close")?,
            volume: find("volume")?,
        })
    }

    fn parse(&self, record: &StringRecord, line: usize) -> Result<Bar> {
        let field = |idx: usize, name: &str| {
            record.get(idx).ok_or_else(|| {
                ForecastError::InvalidData(format!("missing {} at line {}", name, line))
            })
        };
        let price = |idx: usize, name: &str| -> Result<f64> {
            field(idx, name)?.parse::<f64>().map_err(|e| {
                ForecastError::InvalidData(format!("invalid {} at line {}: {}", name, line, e))
            })
        };

        let raw_date = field(self.date, "date")?;
        let date = NaiveDate::parse_from_str(raw_date.get(..10).unwrap_or(raw_date), "%Y-%m-%d")
            .map_err(|e| {
                ForecastError::InvalidData(format!("invalid date at line {}: {}", line, e))
            })?;

        let volume = price(self.volume, "volume")?;
        if !volume.is_finite() || volume < 0.0 {
            return Err(ForecastError::InvalidData(format!(
                "invalid volume at line {}: {}",
                line, volume
            )));
        }

        Ok(Bar {
            date,
            open: price(self.open, "open")?,
            high: price(self.high, "high")?,
            low: price(self.low, "low")?,
            close: price(self.close, "close")?,
            volume: volume.trunc() as u64,
        })
    }
}
