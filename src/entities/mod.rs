//! Entity module - Contains all SeaORM entity definitions for the database.
//! These entities represent the database tables and their relationships.
//! Each entity has a Model struct for data and an Entity struct for operations.

pub mod annual_field;
pub mod record;
pub mod site;

// Re-export specific types to avoid conflicts
pub use annual_field::{
    Column as AnnualFieldColumn, Entity as AnnualField, Model as AnnualFieldModel,
};
pub use record::{
    Column as RecordColumn, Entity as Record, Model as RecordModel, RecordStatus,
};
pub use site::{Column as SiteColumn, Entity as Site, Model as SiteModel};
