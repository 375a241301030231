//! The sweep itself: scan, write the report, summarize, set the exit status

use anyhow::Result;
use clap::Args;
use serde_json::json;
use std::path::{Path, PathBuf};
use std::process::ExitCode;

use crate::cli::Output;
use crate::config::SweeperConfig;
use crate::scan::Scanner;
use crate::scan::reports::{
    ConsoleSummary, JsonReportGenerator, ReportGenerator, ReportMetadata, TextReportGenerator, banner,
    write_report,
};

#[derive(Args, Debug, Default)]
pub struct ScanArgs {
    /// Print only the number of violations
    #[arg(long)]
    pub count_only: bool,

    /// Exit with status 1 when violations are found (already the default)
    #[arg(long)]
    pub fail_on_violations: bool,

    /// Report location, relative to the root unless absolute
    #[arg(long, value_name = "PATH", conflicts_with = "no_report")]
    pub report: Option<PathBuf>,

    /// Never write the report file
    #[arg(long)]
    pub no_report: bool,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Emoji summary for people
    #[default]
    Text,
    /// JSON document for machines
    Json,
}

impl ScanArgs {
    /// Configuration keys set on the command line
    pub fn config_overrides(&self) -> serde_json::Value {
        let mut report = serde_json::Map::new();
        if let Some(path) = &self.report {
            report.insert("path".to_string(), json!(path));
        }
        if self.no_report {
            report.insert("enabled".to_string(), json!(false));
        }
        json!({ "report": report })
    }
}

pub fn execute(args: ScanArgs, root: &Path, config_path: Option<&Path>, output: &Output) -> Result<ExitCode> {
    let config = SweeperConfig::load(root, config_path, Some(args.config_overrides()))?;

    if args.fail_on_violations {
        tracing::debug!("--fail-on-violations requested; violations always fail the sweep");
    }

    let narrative = !args.count_only && args.format == OutputFormat::Text;
    if narrative {
        output.block(&format!("{}\n", banner(crate::VERSION)));
        output.step("🔍", "Scanning for TODO/FIXME/HACK violations...");
        output.verbose(&format!("Project root: {}", root.display()));
    }

    let scanner = Scanner::new(root, &config)?;
    let result = scanner.scan()?;
    let status = if result.passed() { ExitCode::SUCCESS } else { ExitCode::FAILURE };

    if args.count_only {
        println!("{}", result.violation_count());
        return Ok(status);
    }

    let report_path = if !result.passed() && config.report.enabled {
        let path = config.report.resolve_path(scanner.root());
        let content = TextReportGenerator.generate(&result, &ReportMetadata::new(None))?;
        write_report(&path, &content)?;
        Some(path.strip_prefix(scanner.root()).map(Path::to_path_buf).unwrap_or(path))
    } else {
        None
    };
    let metadata = ReportMetadata::new(report_path);

    match args.format {
        OutputFormat::Json => {
            println!("{}", JsonReportGenerator.generate(&result, &metadata)?);
        }
        OutputFormat::Text => {
            let summary = ConsoleSummary {
                sample_limit: config.report.sample_limit,
                preview_width: config.report.preview_width,
                verbose: output.is_verbose(),
            };
            output.block(&summary.generate(&result, &metadata)?);

            if output.is_quiet() && !result.passed() {
                output.error(&format!("TODO Sweeper FAILED: Found {} violations", result.violation_count()));
            }
        }
    }

    Ok(status)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_overrides_only_set_given_flags() {
        let args = ScanArgs::default();
        assert_eq!(args.config_overrides(), json!({ "report": {} }));

        let args = ScanArgs {
            report: Some(PathBuf::from("out/todos.txt")),
            ..ScanArgs::default()
        };
        assert_eq!(args.config_overrides(), json!({ "report": { "path": "out/todos.txt" } }));

        let args = ScanArgs {
            no_report: true,
            ..ScanArgs::default()
        };
        assert_eq!(args.config_overrides(), json!({ "report": { "enabled": false } }));
    }
}
