// src/export/logic.rs

use crate::core::calculator::reorder::ReorderPolicy;
use crate::core::inventory::InventoryLogic;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::export::csv::write_csv;
use crate::export::fs_utils::ensure_writable;
use crate::export::json::write_json;
use crate::export::model::TabletExport;
use crate::export::{ExportFormat, notify_export_success};
use crate::ui::messages::warning;
use chrono::NaiveDateTime;
use std::path::Path;

/// High-level export logic.
pub struct ExportLogic;

impl ExportLogic {
    /// Export every tablet with its projection at `now`.
    ///
    /// Returns the number of exported rows.
    pub fn export(
        pool: &mut DbPool,
        format: ExportFormat,
        file: &str,
        now: NaiveDateTime,
        policy: &ReorderPolicy,
        force: bool,
    ) -> AppResult<usize> {
        let path = Path::new(file);

        if !path.is_absolute() {
            return Err(AppError::Export(format!(
                "output file path must be absolute: {file}"
            )));
        }

        ensure_writable(path, force)?;

        let tablets = InventoryLogic::fetch_all(pool)?;
        if tablets.is_empty() {
            warning("No tablets to export.");
            return Ok(0);
        }

        let projected = Core::project_all(&tablets, now, policy);
        projected.warn_rejected();

        let rows: Vec<TabletExport> = projected
            .rows
            .iter()
            .map(|(rec, proj)| TabletExport::new(rec, proj))
            .collect();

        match format {
            ExportFormat::Csv => write_csv(path, &rows)?,
            ExportFormat::Json => write_json(path, &rows)?,
        }

        notify_export_success(&format.as_str().to_uppercase(), rows.len(), path);
        Ok(rows.len())
    }
}
