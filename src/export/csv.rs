use crate::errors::AppResult;
use crate::export::model::TabletExport;
use std::path::Path;

/// Write the rows as CSV with a header line. `days_remaining` is empty when not applicable.
pub fn write_csv(path: &Path, rows: &[TabletExport]) -> AppResult<()> {
    let mut wtr = ::csv::Writer::from_path(path)?;

    for row in rows {
        wtr.serialize(row)?;
    }

    wtr.flush()?;
    Ok(())
}
