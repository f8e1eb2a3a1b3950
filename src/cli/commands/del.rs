use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inventory::InventoryLogic;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::ui::messages::{info, success, warning};
use crate::utils::prompt::confirm;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Del { name, yes } = cmd {
        //
        // Confirmation prompt
        //
        if !*yes {
            warning(format!(
                "Delete tablet '{}'? This action is irreversible.",
                name
            ));
            if !confirm("Confirm")? {
                info("Operation cancelled.");
                return Ok(());
            }
        }

        //
        // Execute deletion (missing names are a no-op)
        //
        let mut pool = DbPool::new(&cfg.database)?;

        if InventoryLogic::delete(&mut pool, name)? {
            success(format!("Deleted '{}'.", name));
        } else {
            info(format!("No tablet named '{}': nothing to delete.", name));
        }
    }

    Ok(())
}
