//! # todo-sweeper
//!
//! Repository-wide TODO/FIXME/HACK sweeper for CI gating.
//!
//! Every marker comment in a project tree must either be resolved or carry
//! an exception annotation naming a ticket, a review date and a reason:
//!
//! ```text
//! // TODO: ALLOWTODO: JIRA-123 2025-08-27 Waiting on upstream fix
//! ```
//!
//! The sweep fails (exit status 1) when any unapproved marker remains and
//! writes a plain-text report listing each one as `path:line:KIND - text`.
//!
//! ## Quick Start
//!
//! ```bash
//! # Sweep the enclosing git work tree
//! todo-sweeper
//!
//! # Only print the number of violations
//! todo-sweeper --count-only
//!
//! # Inspect the merged configuration
//! todo-sweeper config show --format json
//! ```
//!
//! ## Library use
//!
//! ```no_run
//! use todo_sweeper::config::SweeperConfig;
//! use todo_sweeper::scan::Scanner;
//!
//! # fn main() -> anyhow::Result<()> {
//! let config = SweeperConfig::default();
//! let result = Scanner::new(".", &config)?.scan()?;
//! println!("{} violations", result.violation_count());
//! # Ok(())
//! # }
//! ```

pub mod cli;
pub mod config;
pub mod git;
pub mod scan;

pub use cli::{Cli, Output};
pub use config::SweeperConfig;

/// Result type alias for sweeper operations
pub type Result<T> = anyhow::Result<T>;

/// Version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
pub const PKG_NAME: &str = env!("CARGO_PKG_NAME");
pub const PKG_DESCRIPTION: &str = env!("CARGO_PKG_DESCRIPTION");
