//! Content-level filters, applied to each line of a scanned file
//!
//! ## Decision chain
//!
//! Evaluated in order, the first rule that applies decides:
//! 1. Blank and full-line `#` comment lines are clean
//! 2. A well-formed ALLOWTODO annotation exempts the line
//! 3. Lines without a whole-word marker keyword are clean
//! 4. Meta discussion of the TODO policy is suppressed
//! 5. HACK beside security vocabulary is suppressed
//! 6. Lines without any comment marker are suppressed
//! 7. Everything else is a violation of the first keyword's kind

pub mod annotation;
pub mod classifier;
pub mod context;

pub use annotation::{AnnotationStatus, ExceptionAnnotation};
pub use classifier::LineClassifier;
pub use context::ContextRules;
