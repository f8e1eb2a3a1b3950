use crate::cli::parser::Commands;
use crate::config::Config;
use crate::core::inventory::InventoryLogic;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::errors::AppResult;
use crate::models::projection::Projection;
use crate::models::tablet::TabletRecord;
use crate::ui::messages::{header, info, warning};
use crate::utils::colors::{color_for_days_left, paint};
use crate::utils::table::{Column, Table};
use crate::utils::time::{format_timestamp, reference_time};
use crate::utils::{days_label, dose_pattern};

pub fn handle(cmd: &Commands, cfg: &Config) -> AppResult<()> {
    if let Commands::List { name, at } = cmd {
        let now = reference_time(at.as_ref())?;
        let policy = cfg.reorder_policy();

        let mut pool = DbPool::new(&cfg.database)?;

        let tablets: Vec<TabletRecord> = match name {
            Some(n) => InventoryLogic::find(&mut pool, n)?.into_iter().collect(),
            None => InventoryLogic::fetch_all(&mut pool)?,
        };

        if tablets.is_empty() {
            match name {
                Some(n) => info(format!("No tablet named '{}'.", n)),
                None => info("No tablets added yet."),
            }
            return Ok(());
        }

        let projected = Core::project_all(&tablets, now, &policy);

        header(format!("Current tablet stock ({})", format_timestamp(&now)));
        if !projected.rows.is_empty() {
            print!(
                "{}",
                render_table(&projected.rows, policy.threshold_days, cfg.separator())
            );
            println!();
        }

        projected.warn_rejected();
        print_advice(&projected.rows, policy.coverage_days);
    }

    Ok(())
}

fn render_table(rows: &[(TabletRecord, Projection)], threshold: i64, separator: char) -> String {
    let mut table = Table::new(
        vec![
            Column::left("Tablet"),
            Column::left("Doses"),
            Column::right("Strip"),
            Column::right("Strips"),
            Column::right("Pills"),
            Column::right("Daily"),
            Column::right("Days left"),
            Column::left("Last updated"),
        ],
        separator,
    );

    for (rec, proj) in rows {
        table.add_row(vec![
            rec.name.clone(),
            dose_pattern(rec),
            rec.strip_size.to_string(),
            rec.strips_owned.to_string(),
            rec.total_stock.to_string(),
            proj.daily_usage.to_string(),
            paint(
                &days_label(proj.days_remaining),
                color_for_days_left(proj.days_remaining, threshold),
            ),
            format_timestamp(&rec.last_updated),
        ]);
    }

    table.render()
}

fn print_advice(rows: &[(TabletRecord, Projection)], coverage_days: i64) {
    for (rec, proj) in rows {
        if !proj.should_warn {
            continue;
        }

        if proj.strips_to_order > 0 {
            warning(format!(
                "Consider reordering '{}': stock may not last for a full month. \
                 You should order at least {} strip(s).",
                rec.name, proj.strips_to_order
            ));
        } else {
            info(format!(
                "'{}' is running low, but the stock recorded at the last update \
                 covers {} days of use.",
                rec.name, coverage_days
            ));
        }
    }
}
