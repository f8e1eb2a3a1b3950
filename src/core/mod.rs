pub mod backup;
pub mod calculator;
pub mod inventory;
pub mod log;
pub mod logic;
