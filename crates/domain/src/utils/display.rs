//! Display formatting for ledger quantities and dates

use chrono::{DateTime, Utc};

use super::timestamp::parse_calendar_date;
use crate::constants::{CURRENCY_SYMBOL, EMPTY_CELL, GOLD_UNIT};

/// `2.5` → `2.5g`
pub fn grams(value: f64) -> String {
    format!("{value}{GOLD_UNIT}")
}

/// `100` → `₹100`
pub fn money(value: f64) -> String {
    format!("{CURRENCY_SYMBOL}{value}")
}

/// Calendar date of a timestamp, `YYYY-MM-DD`.
pub fn date_of(timestamp: &DateTime<Utc>) -> String {
    timestamp.format("%Y-%m-%d").to_string()
}

/// Normalise a backend date string; unparseable values are shown verbatim.
pub fn date_label(raw: &str) -> String {
    parse_calendar_date(raw)
        .map(|date| date.format("%Y-%m-%d").to_string())
        .unwrap_or_else(|| raw.to_string())
}

/// Optional text, with blanks rendered as `-`.
pub fn or_dash(value: Option<&str>) -> String {
    match value {
        Some(text) if !text.trim().is_empty() => text.to_string(),
        _ => EMPTY_CELL.to_string(),
    }
}
