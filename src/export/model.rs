use crate::models::projection::Projection;
use crate::models::tablet::TabletRecord;
use crate::utils::time::format_timestamp;
use serde::Serialize;

/// One exported row: the stored tablet plus its projection at export time.
#[derive(Debug, Clone, Serialize)]
pub struct TabletExport {
    pub name: String,
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
    pub strip_size: i64,
    pub strips_owned: i64,
    pub total_stock: i64,
    pub last_updated: String,
    pub daily_usage: i64,
    pub days_remaining: Option<i64>,
    pub should_warn: bool,
    pub strips_to_order: i64,
}

impl TabletExport {
    pub fn new(rec: &TabletRecord, proj: &Projection) -> Self {
        Self {
            name: rec.name.clone(),
            morning: rec.morning,
            afternoon: rec.afternoon,
            night: rec.night,
            strip_size: rec.strip_size,
            strips_owned: rec.strips_owned,
            total_stock: rec.total_stock,
            last_updated: format_timestamp(&rec.last_updated),
            daily_usage: proj.daily_usage,
            days_remaining: proj.days_remaining,
            should_warn: proj.should_warn,
            strips_to_order: proj.strips_to_order,
        }
    }
}
