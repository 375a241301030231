//! ALLOWTODO exception annotations
//!
//! `ALLOWTODO: <TICKET> <YYYY-MM-DD> <reason>` approves a marker on the same
//! line. The date is only checked for shape when exempting; calendar validity
//! and expiry are reported in the exemption register but never fail a sweep.

use crate::scan::static_data::ANNOTATION_REGEX;
use chrono::NaiveDate;
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ExceptionAnnotation {
    /// Tracking ticket such as `JIRA-123`
    pub ticket: String,
    /// Date exactly as written
    pub date: String,
    /// 10 to 100 characters of justification
    pub reason: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AnnotationStatus {
    Active,
    /// The review date is in the past
    Expired,
    /// Shaped like a date but not a real calendar day
    InvalidDate,
}

impl AnnotationStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            AnnotationStatus::Active => "active",
            AnnotationStatus::Expired => "expired",
            AnnotationStatus::InvalidDate => "invalid date",
        }
    }
}

impl ExceptionAnnotation {
    /// First well-formed annotation on the line, if any
    pub fn parse(line: &str) -> Option<Self> {
        let captures = ANNOTATION_REGEX.captures(line)?;
        Some(Self {
            ticket: captures[1].to_string(),
            date: captures[2].to_string(),
            reason: captures[3].trim_end().to_string(),
        })
    }

    pub fn calendar_date(&self) -> Option<NaiveDate> {
        NaiveDate::parse_from_str(&self.date, "%Y-%m-%d").ok()
    }

    /// Status relative to `today`; the annotation stays active through its date
    pub fn status(&self, today: NaiveDate) -> AnnotationStatus {
        match self.calendar_date() {
            None => AnnotationStatus::InvalidDate,
            Some(date) if date < today => AnnotationStatus::Expired,
            Some(_) => AnnotationStatus::Active,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(s: &str) -> NaiveDate {
        NaiveDate::parse_from_str(s, "%Y-%m-%d").unwrap()
    }

    #[test]
    fn test_parse_well_formed() {
        let annotation =
            ExceptionAnnotation::parse("// TODO: ALLOWTODO: JIRA-123 2025-08-27 Waiting on vendor API release")
                .unwrap();
        assert_eq!(annotation.ticket, "JIRA-123");
        assert_eq!(annotation.date, "2025-08-27");
        assert_eq!(annotation.reason, "Waiting on vendor API release");
    }

    #[test]
    fn test_label_is_case_insensitive() {
        assert!(ExceptionAnnotation::parse("# allowtodo: OPS-9 2025-01-01 rotate the staging keys").is_some());
    }

    #[test]
    fn test_malformed_annotations() {
        let malformed = [
            "// TODO ALLOWTODO: JIRA-123 short",
            "// ALLOWTODO: jira-123 2025-08-27 lower-case ticket prefix",
            "// ALLOWTODO: JIRA 2025-08-27 ticket without number",
            "// ALLOWTODO: JIRA-123 27-08-2025 wrong date order here",
            "// ALLOWTODO: JIRA-123 2025-08-27",
            "// ALLOWTODO:JIRA-123 2025-08-27 no space after colon",
        ];
        for line in malformed {
            assert!(ExceptionAnnotation::parse(line).is_none(), "{line:?} should not parse");
        }
    }

    #[test]
    fn test_status() {
        let annotation = ExceptionAnnotation::parse("// ALLOWTODO: JIRA-1 2025-08-27 pending upstream fix").unwrap();
        assert_eq!(annotation.status(day("2025-08-01")), AnnotationStatus::Active);
        assert_eq!(annotation.status(day("2025-08-27")), AnnotationStatus::Active);
        assert_eq!(annotation.status(day("2025-08-28")), AnnotationStatus::Expired);

        let bogus = ExceptionAnnotation::parse("// ALLOWTODO: JIRA-1 2025-13-45 pending upstream fix").unwrap();
        assert_eq!(bogus.status(day("2025-01-01")), AnnotationStatus::InvalidDate);
    }
}
