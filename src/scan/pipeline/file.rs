//! File content processing pipeline

use crate::scan::{
    data::{Exemption, FileResult, LineVerdict, Violation},
    filters::content::LineClassifier,
    static_data::LINE_BREAK_REGEX,
};
use anyhow::{Context, Result};
use std::fs;
use std::path::{Component, Path, PathBuf};

/// Root-relative path as reported: `/` separators on every platform
pub fn display_path(relative: &Path) -> String {
    relative
        .components()
        .filter_map(|component| match component {
            Component::Normal(segment) => Some(segment.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

/// Split text on `\r\n`, `\r` or `\n`; a trailing terminator does not start a new line
pub fn split_lines(content: &str) -> Vec<&str> {
    let mut lines: Vec<&str> = LINE_BREAK_REGEX.split(content).collect();
    if lines.last().is_some_and(|line| line.is_empty()) {
        lines.pop();
    }
    lines
}

/// Pipeline for processing file contents
pub struct FilePipeline {
    root: PathBuf,
    classifier: LineClassifier,
}

impl FilePipeline {
    pub fn new(root: PathBuf, classifier: LineClassifier) -> Self {
        Self { root, classifier }
    }

    /// Read and classify one root-relative file
    ///
    /// Invalid UTF-8 is replaced rather than rejected. The file handle is
    /// closed before classification starts.
    pub fn process_file(&self, relative: &Path) -> Result<FileResult> {
        let bytes = fs::read(self.root.join(relative))
            .with_context(|| format!("Failed to read {}", relative.display()))?;
        let content = String::from_utf8_lossy(&bytes);
        Ok(self.process_content(&display_path(relative), &content))
    }

    /// Classify already-loaded text attributed to `file_path`
    pub fn process_content(&self, file_path: &str, content: &str) -> FileResult {
        let mut result = FileResult::new(file_path);

        for (index, line) in split_lines(content).into_iter().enumerate() {
            let line_number = index + 1;
            let verdict = self.classifier.judge(line);
            result.tally.record(&verdict);

            match verdict {
                LineVerdict::Violation(kind) => {
                    result
                        .violations
                        .push(Violation::new(file_path, line_number, kind, line.trim()));
                }
                LineVerdict::Exempt(annotation) => {
                    result.exemptions.push(Exemption {
                        file_path: file_path.to_string(),
                        line_number,
                        annotation,
                    });
                }
                LineVerdict::Suppressed(rule) => {
                    tracing::trace!("{}:{} suppressed ({})", file_path, line_number, rule.as_str());
                }
                LineVerdict::Clean => {}
            }
        }

        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::scan::data::MarkerKind;
    use tempfile::TempDir;

    fn pipeline(root: &Path) -> FilePipeline {
        FilePipeline::new(root.to_path_buf(), LineClassifier::default())
    }

    #[test]
    fn test_process_content_numbers_lines() {
        let pipeline = pipeline(Path::new("."));
        let content = "fn main() {\n\n    // TODO: fix this later\n    let todo = 1;\n    // FIXME: ALLOWTODO: JIRA-7 2025-08-27 Waiting on upstream fix\n}\n";
        let result = pipeline.process_content("src/main.rs", content);

        assert_eq!(result.violations.len(), 1);
        let violation = &result.violations[0];
        assert_eq!(violation.line_number, 3);
        assert_eq!(violation.kind, MarkerKind::Todo);
        assert_eq!(violation.line_content, "// TODO: fix this later");

        assert_eq!(result.exemptions.len(), 1);
        assert_eq!(result.exemptions[0].line_number, 5);
        assert_eq!(result.tally.lines, 6);
        assert_eq!(result.tally.outside_comment, 1);
    }

    #[test]
    fn test_crlf_and_invalid_utf8() {
        let temp_dir = TempDir::new().unwrap();
        let mut bytes = b"// TODO: one\r\n".to_vec();
        bytes.extend_from_slice(&[0xff, 0xfe, b'\n']);
        bytes.extend_from_slice(b"-- HACK two\r\n");
        fs::write(temp_dir.path().join("mixed.sql"), bytes).unwrap();

        let result = pipeline(temp_dir.path()).process_file(Path::new("mixed.sql")).unwrap();
        let lines: Vec<_> = result.violations.iter().map(|v| (v.line_number, v.line_content.as_str())).collect();
        assert_eq!(lines, vec![(1, "// TODO: one"), (3, "-- HACK two")]);
    }

    #[test]
    fn test_carriage_return_only_line_endings() {
        let temp_dir = TempDir::new().unwrap();
        fs::write(
            temp_dir.path().join("classic.js"),
            "// TODO: one\r// FIXME: two\r// HACK: three\r",
        )
        .unwrap();

        let result = pipeline(temp_dir.path()).process_file(Path::new("classic.js")).unwrap();
        let found: Vec<_> = result
            .violations
            .iter()
            .map(|v| (v.line_number, v.kind, v.line_content.as_str()))
            .collect();
        assert_eq!(
            found,
            vec![
                (1, MarkerKind::Todo, "// TODO: one"),
                (2, MarkerKind::Fixme, "// FIXME: two"),
                (3, MarkerKind::Hack, "// HACK: three"),
            ]
        );
        assert_eq!(result.tally.lines, 3);
        assert!(result.violations.iter().all(|v| !v.report_line().contains('\r')));
    }

    #[test]
    fn test_split_lines_matches_text_mode() {
        assert!(split_lines("").is_empty());
        assert_eq!(split_lines("a\n"), vec!["a"]);
        assert_eq!(split_lines("a\n\nb"), vec!["a", "", "b"]);
        assert_eq!(split_lines("a\r\n\r\n"), vec!["a", ""]);
    }

    #[test]
    fn test_missing_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        assert!(pipeline(temp_dir.path()).process_file(Path::new("gone.rs")).is_err());
    }

    #[test]
    fn test_display_path_uses_forward_slashes() {
        let path: PathBuf = ["app", "Http", "Kernel.php"].iter().collect();
        assert_eq!(display_path(&path), "app/Http/Kernel.php");
    }
}
