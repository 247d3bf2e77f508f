//! Fail-soft display formatting.
//!
//! These helpers sit directly on the render path of a host UI, so they never
//! fail: an unparseable date renders as an empty string and an unparseable
//! time renders as the raw input, rather than surfacing an error to a form
//! field.  Validation of the same raw strings is a separate concern handled
//! by the planning layer.

use chrono::NaiveDate;

use crate::time::TimeOfDay;

/// Render an ISO `YYYY-MM-DD` date string as `"May 10, 2024"`.
///
/// Returns an empty string for empty or unparseable input.
pub fn format_date(raw: &str) -> String {
    match raw.trim().parse::<NaiveDate>() {
        Ok(date) => date.format("%b %d, %Y").to_string(),
        Err(_) => String::new(),
    }
}

/// Render an `"HH:MM"` time string on a 12-hour clock, e.g. `"9:00 AM"`.
///
/// Empty input yields an empty string; otherwise unparseable input is
/// returned unchanged so the user still sees what they typed.
pub fn format_time(raw: &str) -> String {
    if raw.is_empty() {
        return String::new();
    }
    match raw.parse::<TimeOfDay>() {
        Ok(time) => time.to_12h(),
        Err(_) => raw.to_owned(),
    }
}

/// Render a minute count as `"0 min"`, `"45 min"`, `"2h"`, or `"2h 30m"`.
pub fn format_duration(minutes: u32) -> String {
    if minutes == 0 {
        return "0 min".to_owned();
    }
    let hours = minutes / 60;
    let mins = minutes % 60;

    match (hours, mins) {
        (0, m) => format!("{m} min"),
        (h, 0) => format!("{h}h"),
        (h, m) => format!("{h}h {m}m"),
    }
}

/// Render a USD amount with en-US digit grouping, e.g. `"$1,234.50"`.
///
/// Rounds to the nearest cent.  Costs are non-negative throughout the data
/// model, but a negative amount still renders sensibly (`"-$5.00"`).
pub fn format_currency(amount: f64) -> String {
    let negative = amount < 0.0;
    let total_cents = (amount.abs() * 100.0).round() as u64;
    let whole = (total_cents / 100).to_string();
    let cents = total_cents % 100;

    let mut grouped = String::with_capacity(whole.len() + whole.len() / 3);
    for (i, digit) in whole.chars().enumerate() {
        if i > 0 && (whole.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(digit);
    }

    let sign = if negative { "-" } else { "" };
    format!("{sign}${grouped}.{cents:02}")
}
