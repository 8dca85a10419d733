//! Shared test utilities for `CarbonLedger`.
//!
//! This module provides common helper functions for setting up test databases
//! and creating test entities with sensible defaults.

use crate::{
    config::categories::{Category, CategoryCatalog, Granularity},
    config::sites::{SiteConfig, seed_sites},
    core::{approval::Submission, period::Period, role::Actor, role::Role},
    entities::{RecordStatus, record},
    errors::Result,
};
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, Set};
use std::collections::HashMap;

/// Creates an in-memory `SQLite` database with all tables initialized.
/// This is the standard setup for all integration tests.
pub async fn setup_test_db() -> Result<DatabaseConnection> {
    let db = sea_orm::Database::connect("sqlite::memory:").await?;
    crate::config::database::create_tables(&db).await?;
    Ok(db)
}

/// Like [`setup_test_db`], but with the standard test sites seeded:
/// PAR-01 (EMEA), NYC-03 (AMER), TYO-02 (APAC).
pub async fn setup_seeded_db() -> Result<DatabaseConnection> {
    let db = setup_test_db().await?;
    let sites = vec![
        SiteConfig {
            location: "PAR-01".to_string(),
            division: "EMEA".to_string(),
        },
        SiteConfig {
            location: "NYC-03".to_string(),
            division: "AMER".to_string(),
        },
        SiteConfig {
            location: "TYO-02".to_string(),
            division: "APAC".to_string(),
        },
    ];
    seed_sites(&db, &sites).await?;
    Ok(db)
}

/// The "Electricity" category: canonical MWh with kWh/GWh conversions.
pub fn energy_category() -> Category {
    let mut units = HashMap::new();
    units.insert("MWh".to_string(), 1.0);
    units.insert("kWh".to_string(), 0.001);
    units.insert("GWh".to_string(), 1000.0);

    Category {
        name: "Electricity".to_string(),
        group: Some("Energy".to_string()),
        canonical_unit: "MWh".to_string(),
        units,
        granularity: Granularity::Monthly,
    }
}

/// A small catalog covering monthly and annual categories.
pub fn sample_catalog() -> CategoryCatalog {
    let mut gas_units = HashMap::new();
    gas_units.insert("MWh".to_string(), 1.0);
    gas_units.insert("kWh".to_string(), 0.001);

    let mut refill_units = HashMap::new();
    refill_units.insert("kg".to_string(), 1.0);
    refill_units.insert("t".to_string(), 1000.0);

    CategoryCatalog::new(vec![
        energy_category(),
        Category {
            name: "Natural Gas".to_string(),
            group: Some("Energy".to_string()),
            canonical_unit: "MWh".to_string(),
            units: gas_units,
            granularity: Granularity::Monthly,
        },
        Category {
            name: "R410a Refill".to_string(),
            group: Some("Refrigerants".to_string()),
            canonical_unit: "kg".to_string(),
            units: refill_units,
            granularity: Granularity::Annual,
        },
    ])
}

/// Division the standard test sites belong to.
fn division_for(location: &str) -> &'static str {
    match location {
        "NYC-03" => "AMER",
        "TYO-02" => "APAC",
        _ => "EMEA",
    }
}

/// Builds an in-memory record with sensible defaults, without touching the
/// database. `value` is stored as both input and standardized value.
pub fn record_fixture(
    location: &str,
    category: &str,
    year: i32,
    month: Option<i32>,
    value: f64,
    status: RecordStatus,
) -> record::Model {
    let approved_by = match status {
        RecordStatus::Pending => None,
        RecordStatus::Approved | RecordStatus::Rejected => Some("reviewer".to_string()),
    };

    record::Model {
        id: 0,
        location: location.to_string(),
        division: division_for(location).to_string(),
        year,
        month,
        category: category.to_string(),
        input_value: value,
        input_unit: "MWh".to_string(),
        standard_value: value,
        standard_unit: "MWh".to_string(),
        status,
        submitted_by: "asimon".to_string(),
        approved_by,
        submission_date: Utc::now(),
    }
}

/// Inserts a fixture record directly, bypassing the submission workflow.
/// The database assigns the id.
pub async fn seed_record(
    db: &DatabaseConnection,
    fixture: record::Model,
) -> Result<record::Model> {
    let model = record::ActiveModel {
        location: Set(fixture.location),
        division: Set(fixture.division),
        year: Set(fixture.year),
        month: Set(fixture.month),
        category: Set(fixture.category),
        input_value: Set(fixture.input_value),
        input_unit: Set(fixture.input_unit),
        standard_value: Set(fixture.standard_value),
        standard_unit: Set(fixture.standard_unit),
        status: Set(fixture.status),
        submitted_by: Set(fixture.submitted_by),
        approved_by: Set(fixture.approved_by),
        submission_date: Set(fixture.submission_date),
        ..Default::default()
    };

    model.insert(db).await.map_err(Into::into)
}

/// Actor with a submitter role for one location.
pub fn submitter(name: &str, location: &str) -> Actor {
    Actor {
        name: name.to_string(),
        role: Role::Submitter {
            location: location.to_string(),
        },
    }
}

/// Actor with a reviewer role for one division.
pub fn reviewer(name: &str, division: &str) -> Actor {
    Actor {
        name: name.to_string(),
        role: Role::Reviewer {
            division: division.to_string(),
        },
    }
}

/// Actor with the unscoped administrator role.
pub fn admin(name: &str) -> Actor {
    Actor {
        name: name.to_string(),
        role: Role::Administrator,
    }
}

/// Builds a submission with the given key and value.
pub fn test_submission(
    location: &str,
    category: &str,
    year: i32,
    period: Period,
    value: f64,
    unit: &str,
) -> Submission {
    Submission {
        location: location.to_string(),
        category: category.to_string(),
        year,
        period,
        value,
        unit: unit.to_string(),
    }
}
