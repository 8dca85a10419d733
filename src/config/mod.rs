/// Database configuration and connection management
pub mod database;

/// Category/unit-conversion catalog loading from config.toml
pub mod categories;

/// Site-to-division reference data from config.toml
pub mod sites;

/// User/role reference data from config.toml
pub mod users;
