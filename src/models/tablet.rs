//! Tablet stock rows and the validated input used to write them.

use crate::errors::{AppError, AppResult};
use crate::utils::time::truncate_to_seconds;
use chrono::NaiveDateTime;
use serde::Serialize;

/// One row of the `tablets` table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TabletRecord {
    pub name: String,
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
    pub strip_size: i64,
    pub strips_owned: i64,
    /// Always `strip_size * strips_owned`.
    pub total_stock: i64,
    pub last_updated: NaiveDateTime,
}

impl TabletRecord {
    /// Dose flags in morning, afternoon, night order.
    pub fn dose_flags(&self) -> [bool; 3] {
        [self.morning, self.afternoon, self.night]
    }

    /// Verify the invariants a stored row must satisfy.
    pub fn check_invariants(&self) -> AppResult<()> {
        if self.name.is_empty() {
            return Err(AppError::Validation("tablet name is empty".into()));
        }
        if self.strip_size < 1 {
            return Err(AppError::Validation(format!(
                "'{}': strip size must be at least 1 (found {})",
                self.name, self.strip_size
            )));
        }
        if self.strips_owned < 0 {
            return Err(AppError::Validation(format!(
                "'{}': strips owned cannot be negative (found {})",
                self.name, self.strips_owned
            )));
        }
        if self.strip_size.checked_mul(self.strips_owned) != Some(self.total_stock) {
            return Err(AppError::Validation(format!(
                "'{}': total stock {} does not match {} strip(s) of {}",
                self.name, self.total_stock, self.strips_owned, self.strip_size
            )));
        }
        Ok(())
    }
}

/// Full replacement of every mutable field of a tablet.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TabletInput {
    pub name: String,
    pub morning: bool,
    pub afternoon: bool,
    pub night: bool,
    pub strip_size: i64,
    pub strips_owned: i64,
}

impl TabletInput {
    pub fn new(
        name: impl Into<String>,
        (morning, afternoon, night): (bool, bool, bool),
        strip_size: i64,
        strips_owned: i64,
    ) -> Self {
        Self {
            name: name.into(),
            morning,
            afternoon,
            night,
            strip_size,
            strips_owned,
        }
    }

    /// Validate the input and build the row to store, stamped with `now`.
    ///
    /// The name is stored exactly as given; it is the row's key.
    pub fn into_record(self, now: NaiveDateTime) -> AppResult<TabletRecord> {
        if self.name.trim().is_empty() {
            return Err(AppError::Validation("tablet name must not be empty".into()));
        }
        if self.strip_size < 1 {
            return Err(AppError::Validation(format!(
                "strip size must be at least 1 (got {})",
                self.strip_size
            )));
        }
        if self.strips_owned < 0 {
            return Err(AppError::Validation(format!(
                "strips owned cannot be negative (got {})",
                self.strips_owned
            )));
        }

        let total_stock = self
            .strip_size
            .checked_mul(self.strips_owned)
            .ok_or_else(|| {
                AppError::Validation(format!(
                    "total stock overflows: {} strip(s) of {}",
                    self.strips_owned, self.strip_size
                ))
            })?;

        Ok(TabletRecord {
            name: self.name,
            morning: self.morning,
            afternoon: self.afternoon,
            night: self.night,
            strip_size: self.strip_size,
            strips_owned: self.strips_owned,
            total_stock,
            last_updated: truncate_to_seconds(now),
        })
    }
}

impl From<&TabletRecord> for TabletInput {
    fn from(rec: &TabletRecord) -> Self {
        Self {
            name: rec.name.clone(),
            morning: rec.morning,
            afternoon: rec.afternoon,
            night: rec.night,
            strip_size: rec.strip_size,
            strips_owned: rec.strips_owned,
        }
    }
}
