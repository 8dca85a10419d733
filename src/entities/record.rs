//! Record entity - one consumption/activity entry in the reporting ledger.
//!
//! Each record carries the value as submitted (`input_value`/`input_unit`)
//! alongside the derived standardized pair (`standard_value`/`standard_unit`),
//! its reporting period, and its approval state. Records are never deleted
//! and never re-opened; `status` transitions exactly once.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Approval state of a record. `Pending` is the only initial state;
/// `Approved` and `Rejected` are terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, EnumIter, DeriveActiveEnum, Serialize, Deserialize)]
#[sea_orm(rs_type = "String", db_type = "String(StringLen::None)")]
pub enum RecordStatus {
    /// Submitted, awaiting a reviewer decision
    #[sea_orm(string_value = "pending")]
    Pending,
    /// Accepted by a reviewer; counts toward reports and prior-year checks
    #[sea_orm(string_value = "approved")]
    Approved,
    /// Declined by a reviewer; the key becomes free for resubmission
    #[sea_orm(string_value = "rejected")]
    Rejected,
}

impl RecordStatus {
    /// Stable lowercase name, used in error messages and CSV rows.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Approved => "approved",
            Self::Rejected => "rejected",
        }
    }
}

impl std::fmt::Display for RecordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Record database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "records")]
pub struct Model {
    /// Unique identifier, monotonically assigned by the database
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Site identifier the activity was reported for
    pub location: String,
    /// Organizational division owning the location, stamped at creation
    pub division: String,
    /// Reporting year
    pub year: i32,
    /// Calendar month (1-12) for monthly categories, None for annual ones
    pub month: Option<i32>,
    /// Name of the category in the conversion catalog
    pub category: String,
    /// Value as entered by the submitter
    pub input_value: f64,
    /// Unit as entered by the submitter
    pub input_unit: String,
    /// Input value converted to the category's canonical unit
    pub standard_value: f64,
    /// The category's canonical unit; always derived, never set directly
    pub standard_unit: String,
    /// Approval state
    pub status: RecordStatus,
    /// Name of the submitting user
    pub submitted_by: String,
    /// Name of the deciding reviewer; None until a decision is made
    pub approved_by: Option<String>,
    /// When the record was created; never mutated afterwards
    pub submission_date: DateTimeUtc,
}

/// Records reference sites and categories by name, not by foreign key
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
