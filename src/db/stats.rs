use crate::core::calculator::reorder::ReorderPolicy;
use crate::core::logic::Core;
use crate::db::pool::DbPool;
use crate::db::queries::load_tablets;
use crate::errors::AppResult;
use crate::utils::colors::{CYAN, GREEN, GREY, RED, RESET, YELLOW};
use crate::utils::time::{format_timestamp, now};
use std::fs;

pub fn print_db_info(pool: &mut DbPool, db_path: &str, policy: &ReorderPolicy) -> AppResult<()> {
    println!();

    //
    // 1) FILE SIZE
    //
    let file_size = fs::metadata(db_path).map(|m| m.len()).unwrap_or(0);
    let file_kb = (file_size as f64) / 1024.0;

    println!("{}• File:{} {}{}{}", CYAN, RESET, YELLOW, db_path, RESET);
    println!("{}• Size:{} {:.2} KB", CYAN, RESET, file_kb);

    //
    // 2) TABLETS AND STOCK
    //
    let tablets = load_tablets(&pool.conn)?;
    let total_pills: i64 = tablets.iter().map(|t| t.total_stock).sum();

    println!(
        "{}• Tablets:{} {}{}{}",
        CYAN,
        RESET,
        GREEN,
        tablets.len(),
        RESET
    );
    println!("{}• Total pills:{} {}", CYAN, RESET, total_pills);

    //
    // 3) REORDER STATUS
    //
    let projected = Core::project_all(&tablets, now(), policy);
    let to_reorder = projected.rows.iter().filter(|(_, p)| p.should_warn).count();
    let colour = if to_reorder > 0 { RED } else { GREEN };
    println!(
        "{}• Needing reorder:{} {}{}{}",
        CYAN, RESET, colour, to_reorder, RESET
    );
    if !projected.rejected.is_empty() {
        println!(
            "{}• Invalid rows:{} {}{}{}",
            CYAN,
            RESET,
            RED,
            projected.rejected.len(),
            RESET
        );
    }

    //
    // 4) UPDATE RANGE
    //
    let oldest = tablets.iter().map(|t| t.last_updated).min();
    let newest = tablets.iter().map(|t| t.last_updated).max();

    let fmt = |ts: Option<chrono::NaiveDateTime>| {
        ts.map(|t| format_timestamp(&t))
            .unwrap_or_else(|| format!("{GREY}--{RESET}"))
    };

    println!("{}• Last updated:{}", CYAN, RESET);
    println!("    oldest: {}", fmt(oldest));
    println!("    newest: {}", fmt(newest));

    println!();
    Ok(())
}
