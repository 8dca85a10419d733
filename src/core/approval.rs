//! Submission and approval workflow.
//!
//! Records enter the ledger as `Pending` and are moved exactly once to
//! `Approved` or `Rejected` by a reviewer of the record's division. Both the
//! duplicate-key check at creation and the status transition run inside a
//! database transaction so concurrent submissions observe a consistent
//! snapshot and a record can never be decided twice.

use crate::{
    config::{categories::CategoryCatalog, sites},
    core::{normalize, period::Period, role::Actor},
    entities::{Record, RecordStatus, record},
    errors::{Error, Result},
};
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, Condition, ConnectionTrait, DatabaseConnection, EntityTrait,
    QueryFilter, Set, TransactionTrait,
};
use tracing::info;

/// A new record as entered by a submitter, before normalization.
#[derive(Debug, Clone)]
pub struct Submission {
    /// Site the activity is reported for
    pub location: String,
    /// Category name in the catalog
    pub category: String,
    /// Reporting year
    pub year: i32,
    /// Reporting period; must match the category's granularity
    pub period: Period,
    /// Value as entered
    pub value: f64,
    /// Unit as entered; must be in the category's conversion table
    pub unit: String,
}

/// Reviewer decision on a pending record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    /// Accept the record
    Approve,
    /// Decline the record, freeing its key for resubmission
    Reject,
}

impl Decision {
    const fn target_status(self) -> RecordStatus {
        match self {
            Self::Approve => RecordStatus::Approved,
            Self::Reject => RecordStatus::Rejected,
        }
    }
}

/// Condition matching the uniqueness key (location, category, year, period)
/// among non-rejected records.
fn duplicate_key_condition(submission: &Submission) -> Condition {
    let month_condition = match submission.period.to_db() {
        None => record::Column::Month.is_null(),
        Some(m) => record::Column::Month.eq(m),
    };

    Condition::all()
        .add(record::Column::Location.eq(submission.location.as_str()))
        .add(record::Column::Category.eq(submission.category.as_str()))
        .add(record::Column::Year.eq(submission.year))
        .add(month_condition)
        .add(record::Column::Status.ne(RecordStatus::Rejected))
}

/// Creates a new pending record from a submission.
///
/// Validates, in order: the actor's capability for the location, the
/// category's existence, period/granularity consistency, the input unit, and
/// the non-negative value. The duplicate-key check and the insert then run
/// in one transaction. The standardized value is derived here and is the only
/// way it is ever set.
///
/// # Errors
/// [`Error::Unauthorized`], [`Error::CategoryNotFound`],
/// [`Error::InvalidSubmission`], [`Error::UnknownUnit`],
/// [`Error::SiteNotFound`], or [`Error::DuplicateEntry`].
pub async fn create_record(
    db: &DatabaseConnection,
    catalog: &CategoryCatalog,
    actor: &Actor,
    submission: Submission,
) -> Result<record::Model> {
    if !actor.role.can_submit_for(&submission.location) {
        return Err(Error::Unauthorized {
            actor: actor.name.clone(),
            action: format!("submit records for location '{}'", submission.location),
        });
    }

    let category = catalog.get(&submission.category)?;

    if submission.period.granularity() != category.granularity {
        return Err(Error::InvalidSubmission {
            message: format!(
                "Category '{}' is reported {:?} but the submission period is {}",
                category.name, category.granularity, submission.period
            ),
        });
    }

    // The pure normalizer is lenient about unknown units; the write path is not.
    if category.factor_for(&submission.unit).is_none() {
        return Err(Error::UnknownUnit {
            unit: submission.unit,
            category: submission.category,
        });
    }

    if submission.value < 0.0 {
        return Err(Error::InvalidSubmission {
            message: format!("Value must be non-negative, got {}", submission.value),
        });
    }

    let standardized = normalize::normalize(submission.value, &submission.unit, category);

    let txn = db.begin().await?;

    let division = sites::division_of(&txn, &submission.location).await?;

    let duplicate = Record::find()
        .filter(duplicate_key_condition(&submission))
        .one(&txn)
        .await?;
    if duplicate.is_some() {
        return Err(Error::DuplicateEntry {
            location: submission.location,
            category: submission.category,
            year: submission.year,
            period: submission.period.to_string(),
        });
    }

    let model = record::ActiveModel {
        location: Set(submission.location),
        division: Set(division),
        year: Set(submission.year),
        month: Set(submission.period.to_db()),
        category: Set(submission.category),
        input_value: Set(submission.value),
        input_unit: Set(submission.unit),
        standard_value: Set(standardized.value),
        standard_unit: Set(standardized.unit),
        status: Set(RecordStatus::Pending),
        submitted_by: Set(actor.name.clone()),
        approved_by: Set(None),
        submission_date: Set(Utc::now()),
        ..Default::default()
    };

    let inserted = model.insert(&txn).await?;
    txn.commit().await?;

    info!(
        id = inserted.id,
        location = %inserted.location,
        category = %inserted.category,
        "Record submitted"
    );

    Ok(inserted)
}

/// Applies a reviewer decision to a pending record.
///
/// Only a reviewer of the record's division (or an administrator) may decide.
/// A record that is no longer pending fails with [`Error::InvalidTransition`]
/// and is left untouched; terminal states are final.
pub async fn decide(
    db: &DatabaseConnection,
    actor: &Actor,
    record_id: i64,
    decision: Decision,
) -> Result<record::Model> {
    let txn = db.begin().await?;

    let found = Record::find_by_id(record_id)
        .one(&txn)
        .await?
        .ok_or(Error::RecordNotFound { id: record_id })?;

    if !actor.role.can_review(&found.division) {
        return Err(Error::Unauthorized {
            actor: actor.name.clone(),
            action: format!("review records of division '{}'", found.division),
        });
    }

    if found.status != RecordStatus::Pending {
        return Err(Error::InvalidTransition {
            id: record_id,
            status: found.status.to_string(),
        });
    }

    let mut active: record::ActiveModel = found.into();
    active.status = Set(decision.target_status());
    active.approved_by = Set(Some(actor.name.clone()));
    let updated = active.update(&txn).await?;

    txn.commit().await?;

    info!(
        id = updated.id,
        status = %updated.status,
        reviewer = %actor.name,
        "Record decided"
    );

    Ok(updated)
}

/// Lists the annual-granularity categories a location is expected to report.
pub async fn list_annual_fields<C>(db: &C, location: &str) -> Result<Vec<String>>
where
    C: ConnectionTrait,
{
    use crate::entities::{AnnualField, annual_field};
    use sea_orm::QueryOrder;

    let rows = AnnualField::find()
        .filter(annual_field::Column::Location.eq(location))
        .order_by_asc(annual_field::Column::Category)
        .all(db)
        .await?;

    Ok(rows.into_iter().map(|r| r.category).collect())
}

/// Enables or disables an annual category expectation for a location.
///
/// Only that location's submitter (or an administrator) may change the set;
/// the category must exist and be annual-granularity. Idempotent: returns
/// `true` if the configuration changed, `false` if it was already in the
/// requested state.
pub async fn set_annual_field(
    db: &DatabaseConnection,
    catalog: &CategoryCatalog,
    actor: &Actor,
    location: &str,
    category_name: &str,
    enabled: bool,
) -> Result<bool> {
    use crate::config::categories::Granularity;
    use crate::entities::{AnnualField, annual_field};

    if !actor.role.can_configure_annual_fields(location) {
        return Err(Error::Unauthorized {
            actor: actor.name.clone(),
            action: format!("configure annual fields for location '{location}'"),
        });
    }

    let category = catalog.get(category_name)?;
    if category.granularity != Granularity::Annual {
        return Err(Error::InvalidSubmission {
            message: format!("Category '{category_name}' is not annual-granularity"),
        });
    }

    let existing = AnnualField::find()
        .filter(annual_field::Column::Location.eq(location))
        .filter(annual_field::Column::Category.eq(category_name))
        .one(db)
        .await?;

    match (existing, enabled) {
        (None, true) => {
            let model = annual_field::ActiveModel {
                location: Set(location.to_string()),
                category: Set(category_name.to_string()),
                ..Default::default()
            };
            model.insert(db).await?;
            Ok(true)
        }
        (Some(row), false) => {
            AnnualField::delete_by_id(row.id).exec(db).await?;
            Ok(true)
        }
        _ => Ok(false),
    }
}
