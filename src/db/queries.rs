//! SQL access to the `tablets` table.

use crate::errors::{AppError, AppResult};
use crate::models::tablet::TabletRecord;
use crate::utils::time::{TIMESTAMP_FORMAT, format_timestamp};
use chrono::NaiveDateTime;
use rusqlite::{Connection, OptionalExtension, Result, Row, params};

pub fn map_row(row: &Row) -> Result<TabletRecord> {
    let ts_str: String = row.get("last_updated")?;

    let last_updated = NaiveDateTime::parse_from_str(&ts_str, TIMESTAMP_FORMAT).map_err(|_| {
        rusqlite::Error::FromSqlConversionFailure(
            0,
            rusqlite::types::Type::Text,
            Box::new(AppError::InvalidTimestamp(ts_str.clone())),
        )
    })?;

    Ok(TabletRecord {
        name: row.get("name")?,
        morning: row.get::<_, i64>("morning")? != 0,
        afternoon: row.get::<_, i64>("afternoon")? != 0,
        night: row.get::<_, i64>("night")? != 0,
        strip_size: row.get("strip_size")?,
        strips_owned: row.get("strips_owned")?,
        total_stock: row.get("total_stock")?,
        last_updated,
    })
}

/// Insert the record, or replace every column of the row with the same name.
pub fn upsert_tablet(conn: &Connection, rec: &TabletRecord) -> AppResult<()> {
    conn.execute(
        "INSERT INTO tablets (name, morning, afternoon, night, strip_size, strips_owned, total_stock, last_updated)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
         ON CONFLICT(name) DO UPDATE SET
            morning      = excluded.morning,
            afternoon    = excluded.afternoon,
            night        = excluded.night,
            strip_size   = excluded.strip_size,
            strips_owned = excluded.strips_owned,
            total_stock  = excluded.total_stock,
            last_updated = excluded.last_updated",
        params![
            rec.name,
            rec.morning as i64,
            rec.afternoon as i64,
            rec.night as i64,
            rec.strip_size,
            rec.strips_owned,
            rec.total_stock,
            format_timestamp(&rec.last_updated),
        ],
    )?;
    Ok(())
}

/// All tablets, in insertion order.
pub fn load_tablets(conn: &Connection) -> AppResult<Vec<TabletRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM tablets ORDER BY rowid ASC")?;

    let rows = stmt.query_map([], map_row)?;

    let mut out = Vec::new();
    for r in rows {
        out.push(r?);
    }
    Ok(out)
}

pub fn load_tablet_by_name(conn: &Connection, name: &str) -> AppResult<Option<TabletRecord>> {
    let mut stmt = conn.prepare("SELECT * FROM tablets WHERE name = ?1")?;
    Ok(stmt.query_row([name], map_row).optional()?)
}

/// Delete by name. Returns the number of rows removed (0 or 1).
pub fn delete_tablet(conn: &Connection, name: &str) -> AppResult<usize> {
    let n = conn.execute("DELETE FROM tablets WHERE name = ?1", [name])?;
    Ok(n)
}
