pub mod colors;
pub mod formatting;
pub mod path;
pub mod prompt;
pub mod table;
pub mod time;

pub use formatting::{days_label, dose_pattern};
