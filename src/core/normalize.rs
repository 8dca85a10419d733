//! Unit normalization to a category's canonical unit.
//!
//! A submitted (value, unit) pair becomes a standardized pair by multiplying
//! with the category's conversion factor. Pure function, no side effects
//! beyond a log line for unknown units.

use crate::config::categories::Category;
use tracing::warn;

/// A value expressed in its category's canonical unit.
#[derive(Debug, Clone, PartialEq)]
pub struct Normalized {
    /// Input value multiplied by the conversion factor
    pub value: f64,
    /// The category's canonical unit
    pub unit: String,
}

/// Converts a submitted value to the category's canonical unit.
///
/// An input unit missing from the category's conversion table keeps its
/// historical lenient contract and passes through with factor 1; the
/// submission workflow rejects unknown units before it ever gets here
/// (see [`crate::core::approval::create_record`]), so the lenient path only
/// applies to ad-hoc callers.
#[must_use]
pub fn normalize(value: f64, unit: &str, category: &Category) -> Normalized {
    let factor = category.factor_for(unit).unwrap_or_else(|| {
        warn!(
            unit,
            category = %category.name,
            "Unit not in conversion table, passing value through with factor 1"
        );
        1.0
    });

    Normalized {
        value: value * factor,
        unit: category.canonical_unit.clone(),
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::float_cmp)]
    use super::*;
    use crate::test_utils::energy_category;

    #[test]
    fn test_canonical_unit_is_identity() {
        let category = energy_category();
        let normalized = normalize(42.5, "MWh", &category);
        assert_eq!(normalized.value, 42.5);
        assert_eq!(normalized.unit, "MWh");
    }

    #[test]
    fn test_kwh_to_mwh_conversion() {
        let category = energy_category();
        let normalized = normalize(15000.0, "kWh", &category);
        assert_eq!(normalized.value, 15.0);
        assert_eq!(normalized.unit, "MWh");
    }

    #[test]
    fn test_gwh_to_mwh_conversion() {
        let category = energy_category();
        let normalized = normalize(0.5, "GWh", &category);
        assert_eq!(normalized.value, 500.0);
        assert_eq!(normalized.unit, "MWh");
    }

    #[test]
    fn test_unknown_unit_passes_through() {
        let category = energy_category();
        let normalized = normalize(7.0, "BTU", &category);
        assert_eq!(normalized.value, 7.0);
        assert_eq!(normalized.unit, "MWh");
    }

    #[test]
    fn test_zero_value() {
        let category = energy_category();
        let normalized = normalize(0.0, "kWh", &category);
        assert_eq!(normalized.value, 0.0);
    }
}
