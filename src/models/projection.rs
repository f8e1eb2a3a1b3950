use serde::Serialize;

/// Values derived from a tablet row at a reference time. Never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Projection {
    pub daily_usage: i64,
    pub days_elapsed: i64,
    /// `None` when no dose slot is set: nothing is consumed, so there is no run-out date.
    pub days_remaining: Option<i64>,
    pub should_warn: bool,
    pub strips_to_order: i64,
}
