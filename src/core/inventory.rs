//! Inventory store: validated create/read/update/delete of tablet rows.
//!
//! Every write runs in a single transaction together with its audit-log line,
//! so a failed validation or a storage error leaves the table unchanged.

use crate::db::log::ttlog;
use crate::db::pool::DbPool;
use crate::db::queries::{delete_tablet, load_tablet_by_name, load_tablets, upsert_tablet};
use crate::errors::{AppError, AppResult};
use crate::models::tablet::{TabletInput, TabletRecord};
use chrono::NaiveDateTime;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum WriteMode {
    /// Insert or replace.
    Upsert,
    /// Only if the name is not stored yet.
    Create,
    /// Only if the name is already stored.
    Replace,
}

impl WriteMode {
    fn operation(self) -> &'static str {
        match self {
            WriteMode::Upsert => "upsert",
            WriteMode::Create => "add",
            WriteMode::Replace => "edit",
        }
    }
}

pub struct InventoryLogic;

impl InventoryLogic {
    /// Write the full record for `input.name`, replacing any existing row.
    pub fn upsert(
        pool: &mut DbPool,
        input: TabletInput,
        now: NaiveDateTime,
    ) -> AppResult<TabletRecord> {
        Self::write(pool, input, now, WriteMode::Upsert)
    }

    /// Create a new tablet. Fails if one with the same name exists.
    pub fn add(pool: &mut DbPool, input: TabletInput, now: NaiveDateTime) -> AppResult<TabletRecord> {
        Self::write(pool, input, now, WriteMode::Create)
    }

    /// Replace every mutable field of an existing tablet.
    pub fn update(
        pool: &mut DbPool,
        input: TabletInput,
        now: NaiveDateTime,
    ) -> AppResult<TabletRecord> {
        Self::write(pool, input, now, WriteMode::Replace)
    }

    pub fn fetch_all(pool: &mut DbPool) -> AppResult<Vec<TabletRecord>> {
        load_tablets(&pool.conn)
    }

    pub fn find(pool: &mut DbPool, name: &str) -> AppResult<Option<TabletRecord>> {
        load_tablet_by_name(&pool.conn, name)
    }

    /// Remove the tablet if present. Deleting a missing name is not an error;
    /// the return value tells whether a row was removed.
    pub fn delete(pool: &mut DbPool, name: &str) -> AppResult<bool> {
        let tx = pool.conn.transaction()?;

        let removed = delete_tablet(&tx, name)? > 0;
        if removed {
            ttlog(&tx, "del", name, "Tablet deleted")?;
        }

        tx.commit()?;
        Ok(removed)
    }

    fn write(
        pool: &mut DbPool,
        input: TabletInput,
        now: NaiveDateTime,
        mode: WriteMode,
    ) -> AppResult<TabletRecord> {
        // Validate before touching the database.
        let record = input.into_record(now)?;

        let tx = pool.conn.transaction()?;

        let exists = load_tablet_by_name(&tx, &record.name)?.is_some();
        match mode {
            WriteMode::Create if exists => return Err(AppError::TabletExists(record.name)),
            WriteMode::Replace if !exists => return Err(AppError::TabletNotFound(record.name)),
            _ => {}
        }

        upsert_tablet(&tx, &record)?;
        ttlog(
            &tx,
            mode.operation(),
            &record.name,
            &format!(
                "doses={}/{}/{} strips={}x{} stock={}",
                record.morning as u8,
                record.afternoon as u8,
                record.night as u8,
                record.strips_owned,
                record.strip_size,
                record.total_stock
            ),
        )?;

        tx.commit()?;
        Ok(record)
    }
}
