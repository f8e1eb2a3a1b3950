use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inventory::InventoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::tablet::TabletInput;
use crate::ui::messages::success;
use crate::utils::time;

/// Add a new tablet.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Add {
        name,
        doses,
        strip_size,
        strips,
    } = cmd
    {
        let input = TabletInput::new(
            name.as_str(),
            (doses.morning, doses.afternoon, doses.night),
            *strip_size,
            *strips,
        );

        let mut pool = DbPool::new(&cfg.database)?;
        let rec = InventoryLogic::add(&mut pool, input, time::now())?;

        success(format!(
            "Tablet '{}' added successfully ({} pills).",
            rec.name, rec.total_stock
        ));
    }

    Ok(())
}
