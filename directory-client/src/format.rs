//! Locale formatting for hire dates and salaries

use chrono::{DateTime, NaiveDate};
use std::fmt::Write;

use crate::config::DisplayConfig;

/// Fraction digits kept when grouping a salary
const MAX_FRACTION_DIGITS: usize = 3;

/// Format a hire date with the configured pattern
///
/// Accepts a bare `YYYY-MM-DD` date or an RFC 3339 timestamp, whose
/// calendar date is used as sent. Anything else is shown verbatim.
pub fn format_hire_date(raw: &str, display: &DisplayConfig) -> String {
    let Some(date) = parse_hire_date(raw) else {
        return raw.to_string();
    };

    // an invalid pattern surfaces as fmt::Error rather than a panic here
    let mut out = String::new();
    match write!(out, "{}", date.format(&display.date_format)) {
        Ok(()) => out,
        Err(_) => raw.to_string(),
    }
}

fn parse_hire_date(raw: &str) -> Option<NaiveDate> {
    let raw = raw.trim();
    NaiveDate::parse_from_str(raw, "%Y-%m-%d")
        .ok()
        .or_else(|| {
            DateTime::parse_from_rfc3339(raw)
                .ok()
                .map(|ts| ts.date_naive())
        })
}

/// Format a salary as currency prefix plus thousands-grouped amount
pub fn format_salary(amount: f64, display: &DisplayConfig) -> String {
    format!("{}{}", display.currency_symbol, group_thousands(amount))
}

/// en-US number grouping: `,` every three integer digits, at most three
/// fraction digits with trailing zeros dropped
pub fn group_thousands(amount: f64) -> String {
    if amount.is_nan() {
        return "NaN".to_string();
    }
    if amount.is_infinite() {
        return if amount.is_sign_negative() { "-∞" } else { "∞" }.to_string();
    }

    let fixed = format!("{:.*}", MAX_FRACTION_DIGITS, amount.abs());
    let (int_part, frac_part) = fixed.split_once('.').unwrap_or((fixed.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut grouped = String::with_capacity(int_part.len() + int_part.len() / 3);
    for (i, digit) in int_part.chars().enumerate() {
        if i > 0 && (int_part.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let is_zero = int_part.chars().all(|c| c == '0') && frac_part.is_empty();
    let mut out = String::new();
    if amount.is_sign_negative() && !is_zero {
        out.push('-');
    }
    out.push_str(&grouped);
    if !frac_part.is_empty() {
        out.push('.');
        out.push_str(frac_part);
    }
    out
}
