//! Actors, roles, and capability predicates.
//!
//! Roles are a closed set; every authorization decision in the workflow goes
//! through an explicit predicate here rather than comparing role strings.

use serde::{Deserialize, Serialize};

/// The closed set of roles in the reporting workflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Role {
    /// Enters records for a single location and maintains its annual fields
    Submitter {
        /// The one location this submitter reports for
        location: String,
    },
    /// Approves or rejects pending records for one division
    Reviewer {
        /// The division whose locations this reviewer covers
        division: String,
    },
    /// Unscoped: may submit anywhere, decide anywhere, see everything
    Administrator,
}

impl Role {
    /// Whether this role may create records for `location`.
    #[must_use]
    pub fn can_submit_for(&self, location: &str) -> bool {
        match self {
            Self::Submitter { location: own } => own == location,
            Self::Reviewer { .. } => false,
            Self::Administrator => true,
        }
    }

    /// Whether this role may approve or reject records of `division`.
    #[must_use]
    pub fn can_review(&self, division: &str) -> bool {
        match self {
            Self::Reviewer { division: own } => own == division,
            Self::Submitter { .. } => false,
            Self::Administrator => true,
        }
    }

    /// Whether this role may change the annual field configuration of
    /// `location`. Owned by that location's submitter.
    #[must_use]
    pub fn can_configure_annual_fields(&self, location: &str) -> bool {
        match self {
            Self::Submitter { location: own } => own == location,
            Self::Reviewer { .. } => false,
            Self::Administrator => true,
        }
    }
}

/// A user identity with its role, as supplied by the session layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Actor {
    /// User name, recorded as `submitted_by`/`approved_by` on records
    pub name: String,
    /// The actor's role and scope
    pub role: Role,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn submitter(location: &str) -> Role {
        Role::Submitter {
            location: location.to_string(),
        }
    }

    fn reviewer(division: &str) -> Role {
        Role::Reviewer {
            division: division.to_string(),
        }
    }

    #[test]
    fn test_submitter_scope() {
        let role = submitter("PAR-01");
        assert!(role.can_submit_for("PAR-01"));
        assert!(!role.can_submit_for("NYC-03"));
        assert!(!role.can_review("EMEA"));
        assert!(role.can_configure_annual_fields("PAR-01"));
        assert!(!role.can_configure_annual_fields("NYC-03"));
    }

    #[test]
    fn test_reviewer_scope() {
        let role = reviewer("EMEA");
        assert!(role.can_review("EMEA"));
        assert!(!role.can_review("AMER"));
        assert!(!role.can_submit_for("PAR-01"));
        assert!(!role.can_configure_annual_fields("PAR-01"));
    }

    #[test]
    fn test_administrator_is_unscoped() {
        let role = Role::Administrator;
        assert!(role.can_submit_for("PAR-01"));
        assert!(role.can_review("APAC"));
        assert!(role.can_configure_annual_fields("NYC-03"));
    }
}
