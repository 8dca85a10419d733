//! Annual field configuration entity - which annual-granularity categories a
//! location is expected to report. Owned by that location's submitter role.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Annual field configuration database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "annual_fields")]
pub struct Model {
    /// Unique identifier for the configuration row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Site identifier the expectation applies to
    pub location: String,
    /// Name of an annual-granularity category
    pub category: String,
}

/// Configuration rows reference sites and categories by name
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
