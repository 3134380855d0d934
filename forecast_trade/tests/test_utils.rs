use forecast_trade::catalog::{self, Exchange, POPULAR_STOCKS};
use forecast_trade::utils::format_inr;
use rstest::rstest;
use std::collections::HashSet;

#[rstest]
#[case(0.0, "₹0.00")]
#[case(7.5, "₹7.50")]
#[case(999.0, "₹999.00")]
#[case(1000.0, "₹1,000.00")]
#[case(99999.0, "₹99,999.00")]
#[case(100000.0, "₹1,00,000.00")]
#[case(12345678.9, "₹1,23,45,678.90")]
#[case(-1500.25, "-₹1,500.25")]
fn test_format_inr(#[case] amount: f64, #[case] expected: &str) {
    assert_eq!(format_inr(amount), expected);
}

#[test]
fn test_popular_stocks_are_unique_nse_symbols() {
    let symbols: HashSet<&str> = POPULAR_STOCKS.iter().map(|&(_, s)| s).collect();
    assert_eq!(symbols.len(), POPULAR_STOCKS.len());
    assert!(POPULAR_STOCKS
        .iter()
        .all(|&(_, s)| Exchange::from_symbol(s) == Exchange::Nse));
}

#[test]
fn test_lookup_and_resolve() {
    assert_eq!(catalog::lookup("Reliance"), Some("RELIANCE.NS"));
    assert_eq!(catalog::lookup("  hdfc bank "), Some("HDFCBANK.NS"));
    assert_eq!(catalog::lookup("Unknown Corp"), None);

    assert_eq!(catalog::resolve("l&t"), "LT.NS");
    assert_eq!(catalog::resolve(" tcs.bo "), "TCS.BO");
}

#[rstest]
#[case("TCS.NS", Exchange::Nse, "TCS")]
#[case("tcs.bo", Exchange::Bse, "TCS")]
#[case("AAPL", Exchange::Unknown, "AAPL")]
fn test_exchange_and_display_name(
    #[case] symbol: &str,
    #[case] exchange: Exchange,
    #[case] name: &str,
) {
    assert_eq!(Exchange::from_symbol(symbol), exchange);
    assert_eq!(catalog::display_name(symbol), name);
}

#[test]
fn test_exchange_labels() {
    assert_eq!(Exchange::Nse.to_string(), "NSE");
    assert_eq!(Exchange::Bse.to_string(), "BSE");
    assert_eq!(Exchange::Unknown.to_string(), "N/A");
}
