//! Ticker universe for the Indian market
//!
//! Symbols follow the market-data convention of an exchange suffix:
//! `.NS` for the National Stock Exchange and `.BO` for the Bombay Stock Exchange.

use serde::Serialize;
use std::fmt;

/// Curated NSE listings offered for quick selection, as (display name, symbol)
pub const POPULAR_STOCKS: [(&str, &str); 30] = [
    ("TCS", "TCS.NS"),
    ("Reliance", "RELIANCE.NS"),
    ("Infosys", "INFY.NS"),
    ("HDFC Bank", "HDFCBANK.NS"),
    ("ICICI Bank", "ICICIBANK.NS"),
    ("Wipro", "WIPRO.NS"),
    ("ITC", "ITC.NS"),
    ("SBI", "SBIN.NS"),
    ("Bharti Airtel", "BHARTIARTL.NS"),
    ("HUL", "HINDUNILVR.NS"),
    ("Adani Enterprises", "ADANIENT.NS"),
    ("Tata Motors", "TATAMOTORS.NS"),
    ("Maruti Suzuki", "MARUTI.NS"),
    ("Asian Paints", "ASIANPAINT.NS"),
    ("Axis Bank", "AXISBANK.NS"),
    ("Bajaj Finance", "BAJFINANCE.NS"),
    ("Kotak Bank", "KOTAKBANK.NS"),
    ("L&T", "LT.NS"),
    ("M&M", "M&M.NS"),
    ("Titan", "TITAN.NS"),
    ("Coal India", "COALINDIA.NS"),
    ("NTPC", "NTPC.NS"),
    ("Power Grid", "POWERGRID.NS"),
    ("Sun Pharma", "SUNPHARMA.NS"),
    ("Dr Reddy's", "DRREDDY.NS"),
    ("Tech Mahindra", "TECHM.NS"),
    ("UltraTech", "ULTRACEMCO.NS"),
    ("Nestle India", "NESTLEIND.NS"),
    ("HCL Tech", "HCLTECH.NS"),
    ("JSW Steel", "JSWSTEEL.NS"),
];

/// Exchange a symbol trades on, read from its suffix
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Exchange {
    Nse,
    Bse,
    Unknown,
}

impl Exchange {
    pub fn from_symbol(symbol: &str) -> Self {
        let symbol = symbol.trim().to_ascii_uppercase();
        if symbol.ends_with(".NS") {
            Exchange::Nse
        } else if symbol.ends_with(".BO") {
            Exchange::Bse
        } else {
            Exchange::Unknown
        }
    }
}

impl fmt::Display for Exchange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Exchange::Nse => "NSE",
            Exchange::Bse => "BSE",
            Exchange::Unknown => "N/A",
        })
    }
}

/// Symbol for a curated display name, ignoring case
pub fn lookup(name: &str) -> Option<&'static str> {
    let name = name.trim();
    POPULAR_STOCKS
        .iter()
        .find(|(display, _)| display.eq_ignore_ascii_case(name))
        .map(|&(_, symbol)| symbol)
}

/// Clean up a manually typed symbol
pub fn normalize_symbol(input: &str) -> String {
    input.trim().to_ascii_uppercase()
}

/// Symbol without its exchange suffix, for headings
pub fn display_name(symbol: &str) -> String {
    let symbol = normalize_symbol(symbol);
    symbol
        .strip_suffix(".NS")
        .or_else(|| symbol.strip_suffix(".BO"))
        .unwrap_or(&symbol)
        .to_string()
}

/// Resolve either a curated display name or a raw symbol to a symbol
pub fn resolve(input: &str) -> String {
    lookup(input)
        .map(str::to_string)
        .unwrap_or_else(|| normalize_symbol(input))
}
