pub mod config;
pub mod drill;
pub mod host;
