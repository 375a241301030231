//! Command implementations, one module per command

pub mod config;
pub mod scan;
pub mod version;
