//! Record filtering and role-scoped queries.
//!
//! A [`RecordFilter`] is a conjunction of optional predicates. It exists in
//! two equivalent forms: a pure, order-preserving predicate over in-memory
//! records (used by the aggregator and tests) and a SeaORM condition for
//! fetching from the database. Role scoping composes the same filters.

use crate::{
    core::{period::Period, plausibility, role::Role},
    entities::{Record, RecordStatus, record},
    errors::Result,
};
use sea_orm::{
    ColumnTrait, Condition, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder,
};

/// Conjunction of record predicates. Empty sets and `None` bounds mean
/// "no constraint"; the default filter matches everything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    /// Earliest year, inclusive
    pub year_min: Option<i32>,
    /// Latest year, inclusive
    pub year_max: Option<i32>,
    /// Exact reporting period
    pub period: Option<Period>,
    /// Locations to include; empty means all
    pub locations: Vec<String>,
    /// Categories to include; empty means all
    pub categories: Vec<String>,
    /// Divisions to include; empty means all
    pub divisions: Vec<String>,
    /// Statuses to include; empty means all
    pub statuses: Vec<RecordStatus>,
}

impl RecordFilter {
    /// Pure predicate form: whether `record` satisfies every constraint.
    #[must_use]
    pub fn matches(&self, record: &record::Model) -> bool {
        if self.year_min.is_some_and(|min| record.year < min) {
            return false;
        }
        if self.year_max.is_some_and(|max| record.year > max) {
            return false;
        }
        if self
            .period
            .is_some_and(|p| p != Period::from_db(record.month))
        {
            return false;
        }
        if !self.locations.is_empty() && !self.locations.contains(&record.location) {
            return false;
        }
        if !self.categories.is_empty() && !self.categories.contains(&record.category) {
            return false;
        }
        if !self.divisions.is_empty() && !self.divisions.contains(&record.division) {
            return false;
        }
        if !self.statuses.is_empty() && !self.statuses.contains(&record.status) {
            return false;
        }
        true
    }

    /// Selects the matching subset of `records`, preserving input order.
    #[must_use]
    pub fn apply<'a>(&self, records: &'a [record::Model]) -> Vec<&'a record::Model> {
        records.iter().filter(|r| self.matches(r)).collect()
    }

    /// SeaORM condition form of the same conjunction.
    #[must_use]
    pub fn condition(&self) -> Condition {
        let mut condition = Condition::all();

        if let Some(min) = self.year_min {
            condition = condition.add(record::Column::Year.gte(min));
        }
        if let Some(max) = self.year_max {
            condition = condition.add(record::Column::Year.lte(max));
        }
        if let Some(period) = self.period {
            condition = condition.add(match period.to_db() {
                None => record::Column::Month.is_null(),
                Some(m) => record::Column::Month.eq(m),
            });
        }
        if !self.locations.is_empty() {
            condition = condition.add(record::Column::Location.is_in(self.locations.clone()));
        }
        if !self.categories.is_empty() {
            condition = condition.add(record::Column::Category.is_in(self.categories.clone()));
        }
        if !self.divisions.is_empty() {
            condition = condition.add(record::Column::Division.is_in(self.divisions.clone()));
        }
        if !self.statuses.is_empty() {
            condition = condition.add(record::Column::Status.is_in(self.statuses.clone()));
        }

        condition
    }
}

/// Fetches the records matching `filter`, ordered by id (submission order).
pub async fn find_records(
    db: &DatabaseConnection,
    filter: &RecordFilter,
) -> Result<Vec<record::Model>> {
    Record::find()
        .filter(filter.condition())
        .order_by_asc(record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// Fetches the records visible to a role, ordered by id.
///
/// A submitter sees every record of their own location; a reviewer sees the
/// pending records of their division plus all approved records (read-only,
/// for export); an administrator is unscoped.
pub async fn scoped_records(db: &DatabaseConnection, role: &Role) -> Result<Vec<record::Model>> {
    let condition = match role {
        Role::Submitter { location } => Condition::all()
            .add(record::Column::Location.eq(location.as_str())),
        Role::Reviewer { division } => Condition::any()
            .add(
                Condition::all()
                    .add(record::Column::Division.eq(division.as_str()))
                    .add(record::Column::Status.eq(RecordStatus::Pending)),
            )
            .add(record::Column::Status.eq(RecordStatus::Approved)),
        Role::Administrator => Condition::all(),
    };

    Record::find()
        .filter(condition)
        .order_by_asc(record::Column::Id)
        .all(db)
        .await
        .map_err(Into::into)
}

/// The review queue for a reviewer: pending records in scope, each annotated
/// with its plausibility check against the full history.
pub async fn review_queue(
    db: &DatabaseConnection,
    role: &Role,
) -> Result<Vec<(record::Model, plausibility::PlausibilityCheck)>> {
    let history = find_records(db, &RecordFilter::default()).await?;

    let pending_filter = RecordFilter {
        statuses: vec![RecordStatus::Pending],
        divisions: match role {
            Role::Reviewer { division } => vec![division.clone()],
            Role::Administrator => vec![],
            // Submitters have no review queue
            Role::Submitter { .. } => return Ok(vec![]),
        },
        ..Default::default()
    };

    Ok(history
        .iter()
        .filter(|r| pending_filter.matches(r))
        .map(|r| (r.clone(), plausibility::check(r, &history)))
        .collect())
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]
    use super::*;
    use crate::core::plausibility::Severity;
    use crate::test_utils::{record_fixture, seed_record, setup_seeded_db};

    fn fixture_set() -> Vec<record::Model> {
        vec![
            record_fixture("PAR-01", "Electricity", 2025, Some(3), 100.0, RecordStatus::Approved),
            record_fixture("PAR-01", "Electricity", 2026, Some(3), 105.0, RecordStatus::Pending),
            record_fixture("NYC-03", "Electricity", 2026, Some(3), 50.0, RecordStatus::Pending),
            record_fixture("PAR-01", "R410a Refill", 2026, None, 12.0, RecordStatus::Rejected),
        ]
    }

    #[test]
    fn test_default_filter_matches_everything() {
        let records = fixture_set();
        let filter = RecordFilter::default();
        assert_eq!(filter.apply(&records).len(), records.len());
    }

    #[test]
    fn test_year_range() {
        let records = fixture_set();
        let filter = RecordFilter {
            year_min: Some(2026),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 3);

        let filter = RecordFilter {
            year_min: Some(2025),
            year_max: Some(2025),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 1);
    }

    #[test]
    fn test_period_filter_distinguishes_annual() {
        let records = fixture_set();
        let filter = RecordFilter {
            period: Some(Period::Annual),
            ..Default::default()
        };
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 1);
        assert_eq!(matched[0].category, "R410a Refill");

        let filter = RecordFilter {
            period: Some(Period::Monthly(3)),
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 3);
    }

    #[test]
    fn test_conjunction_and_order_preservation() {
        let records = fixture_set();
        let filter = RecordFilter {
            locations: vec!["PAR-01".to_string()],
            categories: vec!["Electricity".to_string()],
            ..Default::default()
        };
        let matched = filter.apply(&records);
        assert_eq!(matched.len(), 2);
        // Same relative order as input
        assert_eq!(matched[0].year, 2025);
        assert_eq!(matched[1].year, 2026);
    }

    #[test]
    fn test_status_filter() {
        let records = fixture_set();
        let filter = RecordFilter {
            statuses: vec![RecordStatus::Pending],
            ..Default::default()
        };
        assert_eq!(filter.apply(&records).len(), 2);
    }

    #[tokio::test]
    async fn test_find_records_orders_by_id() -> Result<()> {
        let db = setup_seeded_db().await?;
        for record in fixture_set() {
            seed_record(&db, record).await?;
        }

        let all = find_records(&db, &RecordFilter::default()).await?;
        assert_eq!(all.len(), 4);
        assert!(all.windows(2).all(|w| w[0].id < w[1].id));

        let filter = RecordFilter {
            divisions: vec!["AMER".to_string()],
            ..Default::default()
        };
        let amer = find_records(&db, &filter).await?;
        assert_eq!(amer.len(), 1);
        assert_eq!(amer[0].location, "NYC-03");

        Ok(())
    }

    #[tokio::test]
    async fn test_scoped_records_per_role() -> Result<()> {
        let db = setup_seeded_db().await?;
        for record in fixture_set() {
            seed_record(&db, record).await?;
        }

        // Submitter: own location only
        let submitter_scope = Role::Submitter {
            location: "PAR-01".to_string(),
        };
        let visible = scoped_records(&db, &submitter_scope).await?;
        assert_eq!(visible.len(), 3);
        assert!(visible.iter().all(|r| r.location == "PAR-01"));

        // Reviewer: pending of own division plus approved everywhere
        let reviewer_scope = Role::Reviewer {
            division: "AMER".to_string(),
        };
        let visible = scoped_records(&db, &reviewer_scope).await?;
        assert_eq!(visible.len(), 2);
        assert!(visible.iter().any(|r| r.status == RecordStatus::Approved));
        assert!(
            visible
                .iter()
                .filter(|r| r.status == RecordStatus::Pending)
                .all(|r| r.division == "AMER")
        );

        // Administrator: everything
        let visible = scoped_records(&db, &Role::Administrator).await?;
        assert_eq!(visible.len(), 4);

        Ok(())
    }

    #[tokio::test]
    async fn test_review_queue_annotates_pending() -> Result<()> {
        let db = setup_seeded_db().await?;
        for record in fixture_set() {
            seed_record(&db, record).await?;
        }

        let reviewer_scope = Role::Reviewer {
            division: "EMEA".to_string(),
        };
        let queue = review_queue(&db, &reviewer_scope).await?;
        assert_eq!(queue.len(), 1);

        let (record, check) = &queue[0];
        assert_eq!(record.location, "PAR-01");
        // 105 vs 100 approved the year before
        assert_eq!(check.severity, Severity::Success);
        assert_eq!(check.label, "+5.0% vs. prior year");

        // Submitters have no review queue
        let submitter_scope = Role::Submitter {
            location: "PAR-01".to_string(),
        };
        assert!(review_queue(&db, &submitter_scope).await?.is_empty());

        Ok(())
    }
}
