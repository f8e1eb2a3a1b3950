use crate::core::calculator::remaining::{days_elapsed, days_remaining};
use crate::core::calculator::reorder::{ReorderPolicy, reorder_advice};
use crate::core::calculator::usage::daily_usage;
use crate::errors::{AppError, AppResult};
use crate::models::projection::Projection;
use crate::models::tablet::TabletRecord;
use crate::ui::messages::warning;
use chrono::NaiveDateTime;

pub struct Core;

impl Core {
    /// Project a stored tablet at `now`.
    ///
    /// Fails with a validation error if the row breaks the store's invariants
    /// instead of computing on inconsistent numbers.
    pub fn project(
        record: &TabletRecord,
        now: NaiveDateTime,
        policy: &ReorderPolicy,
    ) -> AppResult<Projection> {
        record.check_invariants()?;

        let advice = reorder_advice(record, now, policy);

        Ok(Projection {
            daily_usage: daily_usage(record),
            days_elapsed: days_elapsed(record, now),
            days_remaining: days_remaining(record, now),
            should_warn: advice.should_warn,
            strips_to_order: advice.strips_to_order,
        })
    }

    /// Project every record, keeping the input order.
    ///
    /// A row that fails its invariant check is set aside in `rejected`; the
    /// other rows are still projected.
    pub fn project_all(
        records: &[TabletRecord],
        now: NaiveDateTime,
        policy: &ReorderPolicy,
    ) -> ProjectedInventory {
        let mut out = ProjectedInventory::default();

        for rec in records {
            match Core::project(rec, now, policy) {
                Ok(proj) => out.rows.push((rec.clone(), proj)),
                Err(e) => out.rejected.push((rec.name.clone(), e)),
            }
        }

        out
    }
}

#[derive(Debug, Default)]
pub struct ProjectedInventory {
    pub rows: Vec<(TabletRecord, Projection)>,
    /// Name and reason of each row that could not be projected.
    pub rejected: Vec<(String, AppError)>,
}

impl ProjectedInventory {
    /// One warning line per rejected row.
    pub fn warn_rejected(&self) {
        for (name, err) in &self.rejected {
            warning(format!("Skipping tablet '{}': {}", name, err));
        }
    }
}
