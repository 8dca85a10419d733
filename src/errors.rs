//! Unified error type for the reporting workflow.
//!
//! Every failure is local to a single operation and is surfaced immediately
//! to the initiating actor; nothing here cascades or retries. "No prior-year
//! data" is deliberately not an error (see [`crate::core::plausibility`]).

use thiserror::Error;

/// All errors the crate can produce.
#[derive(Debug, Error)]
pub enum Error {
    /// Configuration file could not be read or parsed
    #[error("Configuration error: {message}")]
    Config {
        /// Human-readable description of the problem
        message: String,
    },

    /// A non-rejected record already exists for the submission key
    #[error(
        "Duplicate entry for location '{location}', category '{category}', {year} {period}: \
         a non-rejected record already exists"
    )]
    DuplicateEntry {
        /// Site identifier of the attempted submission
        location: String,
        /// Category name of the attempted submission
        category: String,
        /// Reporting year of the attempted submission
        year: i32,
        /// Formatted reporting period ("annual" or "month N")
        period: String,
    },

    /// A status transition was attempted on a record that is not pending
    #[error("Record {id} is '{status}' and can no longer be transitioned")]
    InvalidTransition {
        /// Record the transition was attempted on
        id: i64,
        /// Status the record was found in
        status: String,
    },

    /// The submitted input unit is not in the category's conversion table
    #[error("Unit '{unit}' is not accepted for category '{category}'")]
    UnknownUnit {
        /// Unit as submitted
        unit: String,
        /// Category the unit was submitted against
        category: String,
    },

    /// The named category does not exist in the catalog
    #[error("Unknown category: '{name}'")]
    CategoryNotFound {
        /// Category name as referenced
        name: String,
    },

    /// The named location is not a configured site
    #[error("Unknown site: '{location}'")]
    SiteNotFound {
        /// Location as referenced
        location: String,
    },

    /// No record exists with the given id
    #[error("Record not found: {id}")]
    RecordNotFound {
        /// Record id as referenced
        id: i64,
    },

    /// The acting user's role does not permit the operation
    #[error("Actor '{actor}' is not authorized to {action}")]
    Unauthorized {
        /// Name of the acting user
        actor: String,
        /// Short description of the denied operation
        action: String,
    },

    /// A submitted value failed validation (negative, out-of-range month, ...)
    #[error("Invalid submission: {message}")]
    InvalidSubmission {
        /// Human-readable description of the problem
        message: String,
    },

    /// Database error from SeaORM
    #[error("Database error: {0}")]
    Database(#[from] sea_orm::DbErr),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV serialization error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// Convenience `Result` type
pub type Result<T> = std::result::Result<T, Error>;
