//! Reporting period as a tagged variant.
//!
//! Annual categories carry no month; monthly categories carry a calendar
//! month 1-12. Making this a proper enum (instead of a nullable month) keeps
//! the annual/monthly distinction out of runtime null-checks. The database
//! column stays `Option<i32>` and maps through [`Period::from_db`] /
//! [`Period::to_db`].

use crate::config::categories::Granularity;
use crate::errors::{Error, Result};
use serde::{Deserialize, Serialize};

/// Reporting period of a record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Period {
    /// Reported once per year with no month field
    Annual,
    /// Reported for one calendar month (1-12)
    Monthly(u32),
}

impl Period {
    /// Builds a period from a raw month value, validating the month range.
    ///
    /// # Errors
    /// Returns [`Error::InvalidSubmission`] if the month is outside 1-12.
    pub fn new(month: Option<u32>) -> Result<Self> {
        match month {
            None => Ok(Self::Annual),
            Some(m @ 1..=12) => Ok(Self::Monthly(m)),
            Some(m) => Err(Error::InvalidSubmission {
                message: format!("Month must be between 1 and 12, got {m}"),
            }),
        }
    }

    /// Reconstructs a period from the database month column.
    ///
    /// Out-of-range stored months cannot be produced by the workflow, so the
    /// value is trusted here.
    #[must_use]
    pub const fn from_db(month: Option<i32>) -> Self {
        match month {
            None => Self::Annual,
            Some(m) => Self::Monthly(m as u32),
        }
    }

    /// Database representation: `None` for annual, the month for monthly.
    #[must_use]
    pub const fn to_db(self) -> Option<i32> {
        match self {
            Self::Annual => None,
            Self::Monthly(m) => Some(m as i32),
        }
    }

    /// The granularity this period is valid for.
    #[must_use]
    pub const fn granularity(self) -> Granularity {
        match self {
            Self::Annual => Granularity::Annual,
            Self::Monthly(_) => Granularity::Monthly,
        }
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Annual => f.write_str("annual"),
            Self::Monthly(m) => write!(f, "month {m}"),
        }
    }
}
