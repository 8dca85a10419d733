//! Category catalog loading from config.toml
//!
//! Categories are immutable reference data: each one names the measured
//! activity (an energy source, a fuel type, a refrigerant, ...), its
//! canonical unit, the accepted input units with multiplicative conversion
//! factors, and whether it is reported per calendar month or once per year.

use crate::errors::{Error, Result};
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// Whether a category is reported per calendar month or once per year.
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Granularity {
    /// One record per calendar month
    Monthly,
    /// One record per year, no month field
    Annual,
}

/// A single measured-activity category with its unit conversion table.
#[derive(Debug, Deserialize, Clone)]
pub struct Category {
    /// Category name (e.g., "Electricity", "Natural Gas")
    pub name: String,
    /// Optional grouping label for dashboards (e.g., "Energy", "Refrigerants")
    #[serde(default)]
    pub group: Option<String>,
    /// The unit all values of this category are normalized to
    pub canonical_unit: String,
    /// Accepted input units mapped to their factor to the canonical unit
    #[serde(default)]
    pub units: HashMap<String, f64>,
    /// Reporting granularity; monthly unless configured otherwise
    #[serde(default = "default_granularity")]
    pub granularity: Granularity,
}

const fn default_granularity() -> Granularity {
    Granularity::Monthly
}

impl Category {
    /// Conversion factor from `unit` to the canonical unit, if the unit is
    /// accepted. The canonical unit itself always converts with factor 1,
    /// whether or not it is listed in the table.
    #[must_use]
    pub fn factor_for(&self, unit: &str) -> Option<f64> {
        if unit == self.canonical_unit {
            return Some(1.0);
        }
        self.units.get(unit).copied()
    }
}

/// Configuration structure for the `[[categories]]` tables in config.toml
#[derive(Debug, Deserialize)]
struct CatalogConfig {
    categories: Vec<Category>,
}

/// Immutable lookup table of all configured categories, keyed by name.
#[derive(Debug, Clone)]
pub struct CategoryCatalog {
    by_name: HashMap<String, Category>,
}

impl CategoryCatalog {
    /// Builds a catalog from a list of categories.
    #[must_use]
    pub fn new(categories: Vec<Category>) -> Self {
        let by_name = categories
            .into_iter()
            .map(|c| (c.name.clone(), c))
            .collect();
        Self { by_name }
    }

    /// Looks up a category by name.
    ///
    /// # Errors
    /// Returns [`Error::CategoryNotFound`] if no category with that name exists.
    pub fn get(&self, name: &str) -> Result<&Category> {
        self.by_name.get(name).ok_or_else(|| Error::CategoryNotFound {
            name: name.to_string(),
        })
    }

    /// Iterates over all categories in the catalog, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &Category> {
        self.by_name.values()
    }

    /// Number of configured categories.
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether the catalog contains no categories.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

/// Loads the category catalog from a TOML file.
///
/// # Errors
/// Returns an error if:
/// - The file cannot be read
/// - The TOML syntax is invalid
/// - Required fields are missing
pub fn load_catalog<P: AsRef<Path>>(path: P) -> Result<CategoryCatalog> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: CatalogConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    Ok(CategoryCatalog::new(config.categories))
}

/// Loads the category catalog from the default location (./config.toml)
pub fn load_default_catalog() -> Result<CategoryCatalog> {
    load_catalog("config.toml")
}
