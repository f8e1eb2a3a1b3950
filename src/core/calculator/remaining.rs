//! Supply projection from the stock recorded at `last_updated`.

use crate::core::calculator::usage::daily_usage;
use crate::models::tablet::TabletRecord;
use chrono::NaiveDateTime;

/// Whole days since the last update, truncated. A `now` earlier than
/// `last_updated` counts as zero elapsed days.
pub fn days_elapsed(record: &TabletRecord, now: NaiveDateTime) -> i64 {
    (now - record.last_updated).num_days().max(0)
}

/// Days until the stock runs out at constant usage.
///
/// Not clamped: a negative value means the supply ran out that many days ago.
/// Returns `None` when no dose slot is set.
pub fn days_remaining(record: &TabletRecord, now: NaiveDateTime) -> Option<i64> {
    let usage = daily_usage(record);
    if usage == 0 {
        return None;
    }

    let consumed = usage.saturating_mul(days_elapsed(record, now));
    // i64 division truncates toward zero
    Some(record.total_stock.saturating_sub(consumed) / usage)
}
