//! Calendar month rules for gardening tips.
//!
//! Months are identified by their number (1 = January .. 12 = December).
//! Display names are French, matching the `months` seed data.

use chrono::Datelike;
use serde_json::Value;

use crate::error::CoreError;

/// French month names indexed by `number - 1`.
pub const MONTH_NAMES: [&str; 12] = [
    "Janvier",
    "Février",
    "Mars",
    "Avril",
    "Mai",
    "Juin",
    "Juillet",
    "Août",
    "Septembre",
    "Octobre",
    "Novembre",
    "Décembre",
];

/// Ensure `number` is a valid month number (1 to 12 inclusive).
pub fn validate_month_number(number: i32) -> Result<i32, CoreError> {
    if (1..=12).contains(&number) {
        Ok(number)
    } else {
        Err(CoreError::Validation(format!(
            "Invalid month {number} (must be between 1 and 12)"
        )))
    }
}

/// French display name of a month, or `None` when out of range.
pub fn month_name(number: i32) -> Option<&'static str> {
    usize::try_from(number)
        .ok()
        .and_then(|n| n.checked_sub(1))
        .and_then(|idx| MONTH_NAMES.get(idx).copied())
}

/// The current month number in UTC.
pub fn current_month() -> i32 {
    // month() is always 1..=12
    chrono::Utc::now().month() as i32
}

/// Parse a JSON list of month numbers from a request body.
///
/// Accepts integers and numeric strings (`3`, `"3"`). The list must be
/// non-empty and every entry must be a valid month number. Duplicates are
/// collapsed, first occurrence wins.
pub fn parse_month_list(values: &[Value]) -> Result<Vec<i32>, CoreError> {
    if values.is_empty() {
        return Err(CoreError::Validation(
            "\"months\" must be a non-empty list of months (1-12)".into(),
        ));
    }

    let mut months = Vec::with_capacity(values.len());
    for value in values {
        let number = match value {
            Value::Number(n) => n.as_i64(),
            Value::String(s) => s.trim().parse::<i64>().ok(),
            _ => None,
        }
        .and_then(|n| i32::try_from(n).ok())
        .ok_or_else(|| CoreError::Validation(format!("Invalid month in list: {value}")))?;

        let number = validate_month_number(number)?;
        if !months.contains(&number) {
            months.push(number);
        }
    }
    Ok(months)
}
