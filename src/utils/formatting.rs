//! Formatting utilities used for CLI and export outputs.

use crate::models::tablet::TabletRecord;

/// Dose pattern in morning-afternoon-night order, e.g. `1-0-1`.
pub fn dose_pattern(record: &TabletRecord) -> String {
    record
        .dose_flags()
        .iter()
        .map(|&f| if f { "1" } else { "0" })
        .collect::<Vec<_>>()
        .join("-")
}

/// `"1 day"` / `"-3 days"` / `"n/a"`.
pub fn days_label(days: Option<i64>) -> String {
    match days {
        Some(d) if d.abs() == 1 => format!("{d} day"),
        Some(d) => format!("{d} days"),
        None => "n/a".to_string(),
    }
}
