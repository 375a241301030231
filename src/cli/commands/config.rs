use anyhow::Result;
use clap::{Args, Subcommand};
use std::path::Path;

use crate::cli::Output;
use crate::config::{ConfigFormat, SweeperConfig};

#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Display current merged configuration
    Show {
        /// Output format
        #[arg(short, long, value_enum, default_value_t = ConfigFormat::Toml)]
        format: ConfigFormat,
    },
    /// Validate configuration files
    Validate,
}

pub fn execute(args: ConfigArgs, root: &Path, custom_config: Option<&Path>, output: &Output) -> Result<()> {
    match args.command {
        ConfigCommand::Show { format } => {
            let config = SweeperConfig::load(root, custom_config, None::<()>)?;
            // Printed even with --quiet; it is the command's only output
            println!("{}", config.export(format)?.trim_end());
        }
        ConfigCommand::Validate => {
            output.verbose(&format!("Validating configuration for {}", root.display()));
            // Loading fails if any layer is malformed or invalid
            SweeperConfig::load(root, custom_config, None::<()>)?;
            output.success("Configuration is valid!");
        }
    }

    Ok(())
}
