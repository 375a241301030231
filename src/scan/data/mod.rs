//! Data structures for scan results and statistics

mod file_result;
mod marker;
mod scan_result;
mod stats;
mod verdict;
mod violation;

pub use file_result::{FileResult, LineTally};
pub use marker::MarkerKind;
pub use scan_result::ScanResult;
pub use stats::ScanStats;
pub use verdict::{LineVerdict, SuppressionRule};
pub use violation::{Exemption, Violation};
