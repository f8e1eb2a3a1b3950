//! Versioned schema migrations.
//!
//! Each migration is applied once and recorded in the `log` table as a
//! `migration_applied` row whose target is the migration version.

use crate::errors::{AppError, AppResult};
use crate::ui::messages::success;
use chrono::Local;
use rusqlite::{Connection, OptionalExtension, params};

struct Migration {
    version: &'static str,
    description: &'static str,
    sql: &'static str,
}

const MIGRATIONS: &[Migration] = &[
    Migration {
        version: "20250101_0001_create_tablets",
        description: "Created tablets table",
        // Column layout is shared with databases written by the earlier
        // Streamlit tracker; `IF NOT EXISTS` keeps such a table as it is.
        sql: r#"
            CREATE TABLE IF NOT EXISTS tablets (
                name          TEXT PRIMARY KEY NOT NULL CHECK(length(trim(name)) > 0),
                morning       INTEGER NOT NULL DEFAULT 0 CHECK(morning IN (0, 1)),
                afternoon     INTEGER NOT NULL DEFAULT 0 CHECK(afternoon IN (0, 1)),
                night         INTEGER NOT NULL DEFAULT 0 CHECK(night IN (0, 1)),
                strip_size    INTEGER NOT NULL CHECK(strip_size >= 1),
                strips_owned  INTEGER NOT NULL CHECK(strips_owned >= 0),
                total_stock   INTEGER NOT NULL,
                last_updated  TEXT NOT NULL
            );
        "#,
    },
    Migration {
        version: "20250101_0002_idx_tablets_last_updated",
        description: "Added index on tablets.last_updated",
        sql: "CREATE INDEX IF NOT EXISTS idx_tablets_last_updated ON tablets(last_updated);",
    },
];

/// Ensure that the `log` table exists.
fn ensure_log_table(conn: &Connection) -> rusqlite::Result<()> {
    conn.execute_batch(
        r#"
        CREATE TABLE IF NOT EXISTS log (
            id        INTEGER PRIMARY KEY AUTOINCREMENT,
            date      TEXT NOT NULL,
            operation TEXT NOT NULL,
            target    TEXT DEFAULT '',
            message   TEXT NOT NULL
        );
        "#,
    )
}

fn is_applied(conn: &Connection, version: &str) -> rusqlite::Result<bool> {
    let mut chk = conn.prepare(
        "SELECT 1 FROM log
         WHERE operation = 'migration_applied' AND target = ?1
         LIMIT 1",
    )?;
    Ok(chk.query_row([version], |_| Ok(())).optional()?.is_some())
}

fn apply(conn: &Connection, m: &Migration) -> AppResult<()> {
    let tx = conn.unchecked_transaction()?;

    tx.execute_batch(m.sql)
        .map_err(|e| AppError::Migration(format!("{}: {}", m.version, e)))?;

    tx.execute(
        "INSERT INTO log (date, operation, target, message)
         VALUES (?1, 'migration_applied', ?2, ?3)",
        params![Local::now().to_rfc3339(), m.version, m.description],
    )?;

    tx.commit()?;

    success(format!("Migration applied: {} → {}", m.version, m.description));
    Ok(())
}

/// Public entry point: run all pending migrations.
///
/// Invoked by db::initialize::init_db().
pub fn run_pending_migrations(conn: &Connection) -> AppResult<()> {
    ensure_log_table(conn)?;

    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            apply(conn, m)?;
        }
    }

    Ok(())
}

/// Versions of the migrations not yet applied.
pub fn pending_migrations(conn: &Connection) -> AppResult<Vec<&'static str>> {
    ensure_log_table(conn)?;

    let mut out = Vec::new();
    for m in MIGRATIONS {
        if !is_applied(conn, m.version)? {
            out.push(m.version);
        }
    }
    Ok(out)
}
