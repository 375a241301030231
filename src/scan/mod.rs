//! TODO/FIXME/HACK sweeping
//!
//! ## Architecture
//!
//! - **data**: results, verdicts and statistics
//! - **static_data**: built-in exclusion and classification sets, compiled regexes
//! - **rules**: built-in sets merged with configured additions
//! - **filters**: path exclusion and the per-line classifier chain
//! - **pipeline**: directory traversal and per-file classification
//! - **reports**: plain-text and JSON artifacts, console summary
//! - **scanner**: orchestrates one sweep of a project root

pub mod data;
pub mod filters;
pub mod pipeline;
pub mod reports;
pub mod rules;
pub mod scanner;
pub mod static_data;

pub use data::{Exemption, MarkerKind, ScanResult, ScanStats, Violation};
pub use filters::content::LineClassifier;
pub use filters::directory::ExclusionFilter;
pub use rules::RuleSet;
pub use scanner::Scanner;
