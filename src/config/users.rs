//! User/role reference data from config.toml
//!
//! Users are defined under `[[users]]` with a role name and its scope. The
//! role string exists only at this parse boundary: it converts once into the
//! closed [`Role`] enum, and unknown role names are rejected outright.

use crate::core::role::{Actor, Role};
use crate::errors::{Error, Result};
use serde::Deserialize;
use std::path::Path;

/// Configuration for a single user as written in config.toml
#[derive(Debug, Deserialize, Clone)]
pub struct UserConfig {
    /// User name, used as `submitted_by`/`approved_by` identity
    pub name: String,
    /// Role name: "submitter", "reviewer", or "administrator"
    pub role: String,
    /// Location scope; required for submitters
    #[serde(default)]
    pub location: Option<String>,
    /// Division scope; required for reviewers
    #[serde(default)]
    pub division: Option<String>,
}

/// Configuration structure for the `[[users]]` tables in config.toml
#[derive(Debug, Deserialize)]
struct UsersConfig {
    users: Vec<UserConfig>,
}

impl TryFrom<UserConfig> for Actor {
    type Error = Error;

    fn try_from(config: UserConfig) -> Result<Self> {
        let role = match config.role.as_str() {
            "submitter" => {
                let location = config.location.ok_or_else(|| Error::Config {
                    message: format!("User '{}' is a submitter but has no location", config.name),
                })?;
                Role::Submitter { location }
            }
            "reviewer" => {
                let division = config.division.ok_or_else(|| Error::Config {
                    message: format!("User '{}' is a reviewer but has no division", config.name),
                })?;
                Role::Reviewer { division }
            }
            "administrator" => Role::Administrator,
            other => {
                return Err(Error::Config {
                    message: format!("User '{}' has unknown role '{other}'", config.name),
                });
            }
        };

        Ok(Self {
            name: config.name,
            role,
        })
    }
}

/// Loads users from a TOML file and converts them into actors.
///
/// # Errors
/// Returns an error if the file cannot be read, the TOML is invalid, or any
/// user has an unknown role or a missing scope.
pub fn load_users<P: AsRef<Path>>(path: P) -> Result<Vec<Actor>> {
    let contents = std::fs::read_to_string(path.as_ref()).map_err(|e| Error::Config {
        message: format!("Failed to read config file: {e}"),
    })?;

    let config: UsersConfig = toml::from_str(&contents).map_err(|e| Error::Config {
        message: format!("Failed to parse config.toml: {e}"),
    })?;

    config.users.into_iter().map(Actor::try_from).collect()
}

/// Loads users from the default location (./config.toml)
pub fn load_default_users() -> Result<Vec<Actor>> {
    load_users("config.toml")
}
