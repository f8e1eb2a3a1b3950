use crate::models::tablet::TabletRecord;

/// Doses per day: one per dose slot that is set (0..=3).
pub fn daily_usage(record: &TabletRecord) -> i64 {
    record.dose_flags().iter().filter(|&&f| f).count() as i64
}
