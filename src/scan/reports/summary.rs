//! Console summary

use super::{ReportGenerator, ReportMetadata};
use crate::scan::data::ScanResult;
use crate::scan::filters::content::AnnotationStatus;
use crate::scan::static_data::ANNOTATION_EXAMPLE;
use anyhow::Result;
use console::style;
use std::fmt::Write;

/// Title lines printed before the sweep starts
pub fn banner(version: &str) -> String {
    format!(
        "🧹 {}\n{}",
        style(format!("TODO/FIXME/HACK Sweeper v{version}")).bold(),
        "=".repeat(55)
    )
}

/// Human-readable outcome of a sweep
#[derive(Debug, Clone)]
pub struct ConsoleSummary {
    /// Samples listed per marker kind
    pub sample_limit: usize,
    /// Characters of line text per sample
    pub preview_width: usize,
    /// Adds the exception register and suppression statistics
    pub verbose: bool,
}

impl ConsoleSummary {
    fn write_violations(&self, out: &mut String, result: &ScanResult) -> Result<()> {
        writeln!(out, "\n🚨 {}", style("Violations:").bold())?;
        for (kind, items) in result.by_kind() {
            writeln!(out, "\n{} ({} items):", style(kind).yellow().bold(), items.len())?;
            for violation in items.iter().take(self.sample_limit) {
                writeln!(
                    out,
                    "   • {}:{} - {}",
                    style(&violation.file_path).cyan(),
                    violation.line_number,
                    violation.preview(self.preview_width)
                )?;
            }
            if items.len() > self.sample_limit {
                writeln!(out, "   • {}", style(format!("... and {} more", items.len() - self.sample_limit)).dim())?;
            }
        }
        Ok(())
    }

    fn write_register(&self, out: &mut String, result: &ScanResult, metadata: &ReportMetadata) -> Result<()> {
        writeln!(out, "\n📒 Exception register ({}):", result.exemptions.len())?;
        for exemption in &result.exemptions {
            let status = exemption.status(metadata.today);
            let label = match status {
                AnnotationStatus::Active => style(status.as_str()).green(),
                AnnotationStatus::Expired => style(status.as_str()).yellow(),
                AnnotationStatus::InvalidDate => style(status.as_str()).red(),
            };
            writeln!(
                out,
                "   • {}:{} {} {} [{}] {}",
                style(&exemption.file_path).cyan(),
                exemption.line_number,
                exemption.annotation.ticket,
                exemption.annotation.date,
                label,
                exemption.annotation.reason
            )?;
        }
        Ok(())
    }

    fn write_stats(&self, out: &mut String, result: &ScanResult) -> Result<()> {
        let stats = &result.stats;
        writeln!(out, "\n🔇 Suppressed lines: {}", stats.lines_suppressed())?;
        writeln!(out, "   • {} meta discussion", stats.lines_suppressed_meta)?;
        writeln!(out, "   • {} security context", stats.lines_suppressed_security)?;
        writeln!(out, "   • {} outside comment", stats.lines_suppressed_outside_comment)?;
        writeln!(
            out,
            "📁 Files discovered: {}, excluded: {}, unreadable: {}, directories pruned: {}",
            stats.files_discovered,
            stats.files_excluded(),
            stats.files_unreadable,
            stats.directories_pruned
        )?;
        writeln!(out, "⏱️ Lines processed: {} in {}ms", stats.lines_processed, stats.scan_duration_ms)?;
        Ok(())
    }
}

impl ReportGenerator for ConsoleSummary {
    fn generate(&self, result: &ScanResult, metadata: &ReportMetadata) -> Result<String> {
        let mut out = String::new();
        writeln!(out, "📊 Files scanned: {}", result.stats.files_scanned)?;
        writeln!(out, "📊 Analysis Results:")?;
        writeln!(out, "   • Violations found: {}", result.violation_count())?;
        if !result.passed() {
            writeln!(out, "   • Files with violations: {}", result.files_with_violations().len())?;
        }

        if !result.passed() {
            self.write_violations(&mut out, result)?;
        }

        if self.verbose {
            self.write_register(&mut out, result, metadata)?;
            self.write_stats(&mut out, result)?;
        }

        if let Some(path) = &metadata.report_path {
            writeln!(out, "\n📋 Report generated: {}", path.display())?;
        }

        if result.passed() {
            writeln!(
                out,
                "\n✅ {}",
                style("TODO Sweeper PASSED: No violations found").green().bold()
            )?;
        } else {
            writeln!(
                out,
                "\n❌ {}",
                style(format!("TODO Sweeper FAILED: Found {} violations", result.violation_count()))
                    .red()
                    .bold()
            )?;
            writeln!(out, "\nRequired format:")?;
            writeln!(out, "{ANNOTATION_EXAMPLE}")?;
        }

        Ok(out)
    }
}
