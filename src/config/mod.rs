//! Configuration management for the sweeper
//!
//! Settings are layered with figment: built-in defaults, project files in the
//! scanned root, an explicit `--config` file, `TODO_SWEEPER_*` environment
//! variables and finally command-line overrides. The built-in rule sets in
//! `scan::static_data` are never replaced, only extended.

pub mod core;
pub mod formats;

pub use core::{
    ClassifierConfig, ExcludeConfig, ReportConfig, ScanConfig, SweeperConfig, DEFAULT_REPORT_PATH,
    ENV_PREFIX, PROJECT_CONFIG_FILES,
};
pub use formats::ConfigFormat;
