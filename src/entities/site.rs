//! Site entity - maps each reporting location to its owning division.
//!
//! A location belongs to exactly one division at any time; the division is
//! stamped onto records at creation and drives reviewer scoping.

use sea_orm::entity::prelude::*;
use serde::{Deserialize, Serialize};

/// Site database model
#[derive(Clone, Debug, PartialEq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "sites")]
pub struct Model {
    /// Unique identifier for the site row
    #[sea_orm(primary_key)]
    pub id: i64,
    /// Site identifier (e.g., "PAR-01"), unique across the table
    #[sea_orm(unique)]
    pub location: String,
    /// Division owning this location (e.g., "EMEA")
    pub division: String,
}

/// Sites are referenced by records via the location name
#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}
