//! Aggregation and dashboard metrics.
//!
//! Pure functions over record slices: group-by sums of standardized values,
//! totals, absence day-equivalents, and the theoretical capacity reference
//! line. Aggregating an empty input returns an empty mapping or zero, never
//! an error.

use crate::core::period::Period;
use crate::entities::record;
use chrono::{Datelike, NaiveDate, Weekday};
use std::collections::BTreeMap;

/// Dimensions records can be grouped by.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupField {
    /// Group by site identifier
    Location,
    /// Group by category name
    Category,
    /// Group by owning division
    Division,
    /// Group by reporting period ("annual" / "month N")
    Period,
}

impl GroupField {
    fn key_part(self, record: &record::Model) -> String {
        match self {
            Self::Location => record.location.clone(),
            Self::Category => record.category.clone(),
            Self::Division => record.division.clone(),
            Self::Period => Period::from_db(record.month).to_string(),
        }
    }
}

/// Sums standardized values grouped by the given dimensions.
///
/// The key of each entry is the group-key tuple in the order of `group_by`.
/// Mixing categories with different canonical units in one group is the
/// caller's responsibility; the sum is over `standard_value` as stored.
#[must_use]
pub fn aggregate(
    records: &[record::Model],
    group_by: &[GroupField],
) -> BTreeMap<Vec<String>, f64> {
    let mut sums: BTreeMap<Vec<String>, f64> = BTreeMap::new();

    for record in records {
        let key: Vec<String> = group_by.iter().map(|f| f.key_part(record)).collect();
        *sums.entry(key).or_insert(0.0) += record.standard_value;
    }

    sums
}

/// Total standardized value over a record set. Zero for an empty set.
#[must_use]
pub fn total_standardized(records: &[record::Model]) -> f64 {
    records.iter().map(|r| r.standard_value).sum()
}

/// Converts hours recorded under absence/leave categories into day
/// equivalents. The classification is supplied by the caller as a set of
/// category names; `hours_per_day` is typically 8.
#[must_use]
pub fn absence_day_equivalents(
    records: &[record::Model],
    absence_categories: &[String],
    hours_per_day: f64,
) -> f64 {
    if hours_per_day <= 0.0 {
        return 0.0;
    }

    let absence_hours: f64 = records
        .iter()
        .filter(|r| absence_categories.contains(&r.category))
        .map(|r| r.standard_value)
        .sum();

    absence_hours / hours_per_day
}

/// Counts business days (Monday through Friday) in `start..=end`.
/// Returns 0 when `start` is after `end`.
#[must_use]
pub fn business_days(start: NaiveDate, end: NaiveDate) -> u32 {
    let mut count = 0;
    let mut day = start;
    while day <= end {
        if !matches!(day.weekday(), Weekday::Sat | Weekday::Sun) {
            count += 1;
        }
        let Some(next) = day.succ_opt() else { break };
        day = next;
    }
    count
}

/// Theoretical working capacity for a date range, in hours: business days
/// times `hours_per_day`, scaled by the share of active submitters. Used as
/// a dashboard reference line only, never stored.
#[must_use]
pub fn theoretical_capacity(
    start: NaiveDate,
    end: NaiveDate,
    hours_per_day: f64,
    active_submitters: usize,
    total_submitters: usize,
) -> f64 {
    if total_submitters == 0 {
        return 0.0;
    }

    #[allow(clippy::cast_precision_loss)]
    let scale = active_submitters as f64 / total_submitters as f64;
    f64::from(business_days(start, end)) * hours_per_day * scale
}
