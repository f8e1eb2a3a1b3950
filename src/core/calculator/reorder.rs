//! Reorder warning and suggested quantity.

use crate::core::calculator::remaining::days_remaining;
use crate::core::calculator::usage::daily_usage;
use crate::models::tablet::TabletRecord;
use chrono::NaiveDateTime;

pub const DEFAULT_THRESHOLD_DAYS: i64 = 30;
pub const DEFAULT_COVERAGE_DAYS: i64 = 30;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReorderPolicy {
    /// Warn when the projected days remaining drop to this value or below.
    pub threshold_days: i64,
    /// Days of supply a reorder should bring the current stock up to.
    pub coverage_days: i64,
}

impl Default for ReorderPolicy {
    fn default() -> Self {
        Self {
            threshold_days: DEFAULT_THRESHOLD_DAYS,
            coverage_days: DEFAULT_COVERAGE_DAYS,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ReorderAdvice {
    pub should_warn: bool,
    pub strips_to_order: i64,
}

/// Decide whether to warn and how many strips to suggest.
///
/// The warning uses the projected days remaining, while the quantity is
/// computed against the stock snapshot at `last_updated` (elapsed consumption
/// is not subtracted). A warning can therefore come with zero strips.
pub fn reorder_advice(
    record: &TabletRecord,
    now: NaiveDateTime,
    policy: &ReorderPolicy,
) -> ReorderAdvice {
    let Some(remaining) = days_remaining(record, now) else {
        return ReorderAdvice::default();
    };

    if remaining > policy.threshold_days {
        return ReorderAdvice::default();
    }

    let needed_pills = policy
        .coverage_days
        .saturating_mul(daily_usage(record))
        .saturating_sub(record.total_stock);

    let strips_to_order = if needed_pills > 0 {
        ceil_div(needed_pills, record.strip_size.max(1))
    } else {
        0
    };

    ReorderAdvice {
        should_warn: true,
        strips_to_order,
    }
}

/// Ceiling division for a positive numerator and divisor.
fn ceil_div(n: i64, d: i64) -> i64 {
    n / d + i64::from(n % d != 0)
}
