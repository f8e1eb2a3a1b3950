use crate::errors::AppResult;
use crate::export::model::TabletExport;
use std::path::Path;

/// Write the rows as a pretty-printed JSON array.
pub fn write_json(path: &Path, rows: &[TabletExport]) -> AppResult<()> {
    let json = serde_json::to_string_pretty(rows)?;
    std::fs::write(path, json)?;
    Ok(())
}
