//! Command-line interface for the sweeper
//!
//! Running `todo-sweeper` without a subcommand sweeps the project root.
//! `config` and `version` are auxiliary subcommands.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use std::process::ExitCode;

pub mod commands;
mod output;

pub use output::Output;

use commands::{config, scan, version};

#[derive(Parser)]
#[command(
    name = "todo-sweeper",
    version = env!("CARGO_PKG_VERSION"),
    about = "Fail CI on unapproved TODO/FIXME/HACK markers",
    long_about = "Walks a project tree and reports every TODO, FIXME or HACK comment that is not \
                  covered by an ALLOWTODO exception naming a ticket, a date and a reason."
)]
pub struct Cli {
    /// Project root to sweep [default: enclosing git work tree, else current directory]
    #[arg(short = 'C', long = "root", value_name = "DIR", global = true)]
    pub root: Option<PathBuf>,

    /// Increase verbosity (can be repeated)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress non-error output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Use custom configuration file
    #[arg(long, value_name = "FILE", global = true)]
    pub config: Option<PathBuf>,

    #[command(flatten)]
    pub scan: scan::ScanArgs,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Configuration management
    Config(config::ConfigArgs),
    /// Show version information
    Version(version::VersionArgs),
}

impl Cli {
    pub fn run(self) -> Result<ExitCode> {
        setup_logging(self.verbose, self.quiet);

        let cwd = std::env::current_dir().context("Failed to determine current directory")?;
        let root = crate::git::resolve_project_root(self.root.as_deref(), &cwd);
        tracing::debug!("Project root: {}", root.display());

        let output = Output::new(self.verbose > 0, self.quiet);

        match self.command {
            Some(Commands::Config(args)) => {
                config::execute(args, &root, self.config.as_deref(), &output).map(|()| ExitCode::SUCCESS)
            }
            Some(Commands::Version(args)) => version::execute(args).map(|()| ExitCode::SUCCESS),
            None => scan::execute(self.scan, &root, self.config.as_deref(), &output),
        }
    }
}

fn setup_logging(verbose: u8, quiet: bool) {
    if quiet {
        return;
    }

    let filter = tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| match verbose {
        0 => tracing_subscriber::EnvFilter::new("warn"),
        1 => tracing_subscriber::EnvFilter::new("info,ignore=warn,globset=warn"),
        2 => tracing_subscriber::EnvFilter::new("debug,ignore=warn,globset=warn"),
        _ => tracing_subscriber::EnvFilter::new("trace"), // -vvv shows everything including the walker
    });

    // stdout carries counts and JSON, so logs go to stderr
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}
