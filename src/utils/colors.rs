/// ANSI color helper utilities for terminal output.
pub const RESET: &str = "\x1b[0m";

pub const GREY: &str = "\x1b[90m";

pub const RED: &str = "\x1b[31m";
pub const GREEN: &str = "\x1b[32m";

pub const YELLOW: &str = "\x1b[33m";
pub const CYAN: &str = "\x1b[36m";

/// Days-left color:
/// None (no usage) → grey
/// \<0 → red
/// ≤ threshold → yellow
/// otherwise → green
pub fn color_for_days_left(days: Option<i64>, threshold: i64) -> &'static str {
    match days {
        None => GREY,
        Some(d) if d < 0 => RED,
        Some(d) if d <= threshold => YELLOW,
        Some(_) => GREEN,
    }
}

/// Wrap `value` in `color` … RESET.
pub fn paint(value: &str, color: &str) -> String {
    format!("{color}{value}{RESET}")
}
