//! Year-over-year plausibility heuristic.
//!
//! Compares a record's standardized value against the approved record for the
//! same location, category, and period one year earlier, and buckets the
//! percentage deviation into a severity tier. Advisory only: the result is
//! surfaced to the reviewer as context and never blocks approval.

use crate::entities::{RecordStatus, record};
use tracing::warn;

/// Severity tier of a plausibility result, from neutral to alarming.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    /// No comparison possible (no prior-year data, or prior value is zero)
    Info,
    /// Deviation below 10 percent
    Success,
    /// Deviation between 10 and 25 percent
    Warning,
    /// Deviation above 25 percent
    Error,
}

/// Result of a plausibility check, ready for display next to a record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlausibilityCheck {
    /// Human-readable summary (e.g., "+5.0% vs. prior year")
    pub label: String,
    /// Severity tier for color-coding in a dashboard
    pub severity: Severity,
}

/// Whether `candidate` is the prior-year comparison row for `record`:
/// same location, same category, same period, one year earlier, approved.
fn is_prior_year_match(record: &record::Model, candidate: &record::Model) -> bool {
    candidate.location == record.location
        && candidate.category == record.category
        && candidate.year == record.year - 1
        && candidate.month == record.month
        && candidate.status == RecordStatus::Approved
}

/// Checks a record against the historical collection.
///
/// Ties between multiple prior-year approved rows for the same key should be
/// impossible under the uniqueness invariant; if they occur anyway, the first
/// match in collection order wins and the occurrence is logged as a
/// data-integrity signal.
#[must_use]
pub fn check(record: &record::Model, history: &[record::Model]) -> PlausibilityCheck {
    let matches: Vec<&record::Model> = history
        .iter()
        .filter(|candidate| is_prior_year_match(record, candidate))
        .collect();

    if matches.len() > 1 {
        warn!(
            location = %record.location,
            category = %record.category,
            year = record.year - 1,
            month = ?record.month,
            count = matches.len(),
            "Multiple prior-year approved records for one key, uniqueness invariant violated"
        );
    }

    let Some(prior) = matches.first() else {
        return PlausibilityCheck {
            label: "No prior-year data".to_string(),
            severity: Severity::Info,
        };
    };

    let prev = prior.standard_value;
    let cur = record.standard_value;

    if prev == 0.0 {
        return PlausibilityCheck {
            label: "N/A: prior value is zero".to_string(),
            severity: Severity::Info,
        };
    }

    let diff_percent = (cur - prev) / prev * 100.0;
    let severity = if diff_percent.abs() < 10.0 {
        Severity::Success
    } else if diff_percent.abs() <= 25.0 {
        Severity::Warning
    } else {
        Severity::Error
    };

    PlausibilityCheck {
        label: format!("{diff_percent:+.1}% vs. prior year"),
        severity,
    }
}
