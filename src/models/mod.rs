pub mod projection;
pub mod tablet;
