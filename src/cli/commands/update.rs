use crate::cli::parser::{Commands, toggle};
use crate::config::Config;
use crate::core::inventory::InventoryLogic;
use crate::db::pool::DbPool;
use crate::errors::{AppError, AppResult};
use crate::models::tablet::TabletInput;
use crate::ui::messages::success;
use crate::utils::time;

/// Update a tablet. Fields not given on the command line are taken from the
/// stored row, so the store always receives a full replacement.
pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Update {
        name,
        morning,
        no_morning,
        afternoon,
        no_afternoon,
        night,
        no_night,
        strip_size,
        strips,
    } = cmd
    {
        let mut pool = DbPool::new(&cfg.database)?;

        let current = InventoryLogic::find(&mut pool, name)?
            .ok_or_else(|| AppError::TabletNotFound(name.clone()))?;

        let mut input = TabletInput::from(&current);
        input.morning = toggle(*morning, *no_morning, current.morning);
        input.afternoon = toggle(*afternoon, *no_afternoon, current.afternoon);
        input.night = toggle(*night, *no_night, current.night);
        input.strip_size = strip_size.unwrap_or(current.strip_size);
        input.strips_owned = strips.unwrap_or(current.strips_owned);

        let rec = InventoryLogic::update(&mut pool, input, time::now())?;

        success(format!(
            "Updated '{}' ({} pills).",
            rec.name, rec.total_stock
        ));
    }

    Ok(())
}
