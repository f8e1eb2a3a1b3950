pub mod remaining;
pub mod reorder;
pub mod usage;
