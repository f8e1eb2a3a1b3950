use crate::cli::parser::Commands;
use crate::config::Config;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::export::ExportLogic;
use crate::utils::time::reference_time;

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::Export {
        format,
        file,
        at,
        force,
    } = cmd
    {
        let now = reference_time(at.as_ref())?;
        let mut pool = DbPool::new(&cfg.database)?;
        ExportLogic::export(
            &mut pool,
            *format,
            file,
            now,
            &cfg.reorder_policy(),
            *force,
        )?;
    }

    Ok(())
}
