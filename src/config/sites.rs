//! Site-to-division reference data from config.toml
//!
//! Sites defined under `[[sites]]` are used to seed the database on first
//! run. One location belongs to exactly one division; the seeding step skips
//! locations that already exist rather than re-assigning their division.

use crate::{
    entities::{Site, site},
    errors::{Error, Result},
};
use sea_orm::{
    ActiveModelTrait, ColumnTrait, ConnectionTrait, DatabaseConnection, EntityTrait, QueryFilter,
    Set,
};
use serde::Deserialize;
use std::path::Path;
use tracing::info;

/// Configuration for a single site
#[derive(Debug, Deserialize, Clone)]
pub struct SiteConfig {
    /// Site identifier (e.g., "PAR-01")
    pub location: String,
    /// Division owning the location (e.g., "EMEA")
    pub division: String,
}

/// Configuration structure for the `[[sites]]` tables in config.toml
#[derive(Debug, Deserialize)]
struct SitesConfig {
    sites: Vec<SiteConfig>,
}

/// Loads site configuration from a TOML file.
///
/// # Errors
/// Returns an error if the file cannot be read or the TOML is invalid.
pub fn load_sites<P: AsRef<Path>>(path: P) -> Result<Vec<SiteConfig>> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: SitesConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    Ok(config.sites)
}

/// Loads site configuration from the default location (./config.toml)
pub fn load_default_sites() -> Result<Vec<SiteConfig>> {
    load_sites("config.toml")
}

/// Seeds configured sites into the database, skipping locations that already
/// exist. Returns the number of sites inserted.
pub async fn seed_sites(db: &DatabaseConnection, sites: &[SiteConfig]) -> Result<usize> {
    let mut inserted = 0;

    for site_config in sites {
        let existing = Site::find()
            .filter(site::Column::Location.eq(site_config.location.as_str()))
            .one(db)
            .await?;

        if existing.is_none() {
            let model = site::ActiveModel {
                location: Set(site_config.location.clone()),
                division: Set(site_config.division.clone()),
                ..Default::default()
            };
            model.insert(db).await?;
            inserted += 1;
        }
    }

    if inserted > 0 {
        info!(inserted, "Seeded sites from configuration");
    }

    Ok(inserted)
}

/// Looks up the division owning a location.
///
/// # Errors
/// Returns [`Error::SiteNotFound`] if the location is not a configured site.
pub async fn division_of<C>(db: &C, location: &str) -> Result<String>
where
    C: ConnectionTrait,
{
    Site::find()
        .filter(site::Column::Location.eq(location))
        .one(db)
        .await?
        .map(|s| s.division)
        .ok_or_else(|| Error::SiteNotFound {
            location: location.to_string(),
        })
}
