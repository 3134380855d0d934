//! Utility functions for the forecast_trade crate

use chrono::{Datelike, Duration, NaiveDate, Weekday};

/// Dates of the `count` sessions following `after`.
///
/// With `trading_days_only` set, Saturdays and Sundays are skipped; exchange
/// holidays are not modelled. The list stops early at the last date chrono
/// can represent.
pub fn next_session_dates(after: NaiveDate, count: usize, trading_days_only: bool) -> Vec<NaiveDate> {
    let mut dates = Vec::new();
    let mut current = after;

    while dates.len() < count {
        current = match current.checked_add_signed(Duration::days(1)) {
            Some(next) => next,
            None => break,
        };
        if trading_days_only && matches!(current.weekday(), Weekday::Sat | Weekday::Sun) {
            continue;
        }
        dates.push(current);
    }

    dates
}

/// Format an amount in rupees with Indian digit grouping.
///
/// The last three integer digits form one group and the rest are grouped in
/// pairs, so ten million prints as `₹1,00,00,000.00`.
///
/// ```
/// use forecast_trade::utils::format_inr;
///
/// assert_eq!(format_inr(1234567.891), "₹12,34,567.89");
/// assert_eq!(format_inr(-950.5), "-₹950.50");
/// ```
pub fn format_inr(amount: f64) -> String {
    if !amount.is_finite() {
        return "₹n/a".to_string();
    }

    let fixed = format!("{:.2}", amount.abs());
    let (integer, fraction) = fixed.split_once('.').unwrap_or((fixed.as_str(), "00"));
    // rounding can turn -0.001 into 0.00
    let negative = amount < 0.0 && fixed.bytes().any(|b| b.is_ascii_digit() && b != b'0');

    let sign = if negative { "-" } else { "" };
    format!("{}₹{}.{}", sign, group_indian(integer), fraction)
}

fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut rest = head;
    while rest.len() > 2 {
        let (left, right) = rest.split_at(rest.len() - 2);
        groups.push(right);
        rest = left;
    }
    groups.push(rest);
    groups.reverse();

    format!("{},{}", groups.join(","), tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_small_amounts_without_separators() {
        assert_eq!(format_inr(0.0), "₹0.00");
        assert_eq!(format_inr(999.999), "₹1,000.00");
        assert_eq!(format_inr(-0.001), "₹0.00");
    }

    #[test]
    fn weekend_skipping() {
        // 2024-01-05 is a Friday
        let friday = NaiveDate::from_ymd_opt(2024, 1, 5).unwrap();
        let dates = next_session_dates(friday, 2, true);
        assert_eq!(
            dates,
            vec![
                NaiveDate::from_ymd_opt(2024, 1, 8).unwrap(),
                NaiveDate::from_ymd_opt(2024, 1, 9).unwrap(),
            ]
        );
        assert_eq!(
            next_session_dates(friday, 1, false),
            vec![NaiveDate::from_ymd_opt(2024, 1, 6).unwrap()]
        );
    }

    #[test]
    fn session_dates_stop_at_calendar_end() {
        let dates = next_session_dates(NaiveDate::MAX, 3, false);
        assert!(dates.is_empty());
    }

    #[test]
    fn non_finite_amounts() {
        assert_eq!(format_inr(f64::NAN), "₹n/a");
        assert_eq!(format_inr(f64::INFINITY), "₹n/a");
    }
}
