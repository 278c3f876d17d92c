//! # Unit Converter
//!
//! Converts parsed quantities to a metric base so that lines written in
//! different units can be summed, and formats quantities for display.
//!
//! - Weight (oz, lb) goes to grams, volume (cup, tbsp, tsp, fl oz) to milliliters.
//! - At 1000 g / 1000 ml and above the value is re-expressed in kg / l,
//!   rounded to 2 decimals; below it is rounded to a whole number.
//! - Count-like units ("clove", "can", ...) and unknown units pass through.
//!
//! ```rust
//! use shopping_list::unit_converter::{convert_to_metric, format_quantity};
//!
//! let (quantity, unit) = convert_to_metric(Some(8.0), Some("oz"));
//! assert_eq!(quantity, Some(227.0));
//! assert_eq!(unit.as_deref(), Some("g"));
//! assert_eq!(format_quantity(quantity, unit.as_deref()), "227g");
//! ```

use log::trace;

/// Grams per unit
const WEIGHT_TO_GRAMS: &[(&str, f64)] = &[("oz", 28.3495), ("lb", 453.592), ("g", 1.0)];

/// Milliliters per unit
const VOLUME_TO_ML: &[(&str, f64)] = &[
    ("cup", 236.588),
    ("tbsp", 14.787),
    ("tsp", 4.929),
    ("fl oz", 29.574),
    ("ml", 1.0),
];

/// Units that describe a count or an imprecise amount
pub const NON_CONVERTIBLE: &[&str] = &["clove", "bunch", "pinch", "to taste", "can", "package"];

/// Large metric units, always left as they are
const LARGE_METRIC: &[&str] = &["kg", "l"];

const WEIGHT_THRESHOLD: f64 = 1000.0;
const VOLUME_THRESHOLD: f64 = 1000.0;

fn factor(table: &[(&str, f64)], unit: &str) -> Option<f64> {
    table
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, factor)| *factor)
}

fn round_to(value: f64, decimals: i32) -> f64 {
    let scale = 10f64.powi(decimals);
    (value * scale).round() / scale
}

/// Scale `base` (grams or milliliters) into its display unit
///
/// Values at or above `threshold` become `large_unit` with 2 decimals,
/// others keep `base_unit` and are rounded to a whole number. Values that
/// are already in the base unit and below the threshold are not rounded.
fn scale_metric(
    base: f64,
    threshold: f64,
    base_unit: &str,
    large_unit: &str,
    already_base: bool,
) -> (f64, String) {
    if base >= threshold {
        (round_to(base / 1000.0, 2), large_unit.to_string())
    } else if already_base {
        (base, base_unit.to_string())
    } else {
        (round_to(base, 0), base_unit.to_string())
    }
}

/// Convert a quantity and unit to metric
///
/// Returns the inputs unchanged when either is missing, when the unit is
/// count-like, or when the unit is not recognized.
pub fn convert_to_metric(quantity: Option<f64>, unit: Option<&str>) -> (Option<f64>, Option<String>) {
    let (Some(quantity), Some(unit)) = (quantity, unit) else {
        return (quantity, unit.map(str::to_string));
    };

    let unit_lower = unit.trim().to_lowercase();

    if NON_CONVERTIBLE.contains(&unit_lower.as_str()) {
        return (Some(quantity), Some(unit.to_string()));
    }

    if LARGE_METRIC.contains(&unit_lower.as_str()) {
        return (Some(quantity), Some(unit_lower));
    }

    if let Some(grams_per_unit) = factor(WEIGHT_TO_GRAMS, &unit_lower) {
        let (value, converted) = scale_metric(
            quantity * grams_per_unit,
            WEIGHT_THRESHOLD,
            "g",
            "kg",
            unit_lower == "g",
        );
        trace!("Converted {} {} -> {} {}", quantity, unit, value, converted);
        return (Some(value), Some(converted));
    }

    if let Some(ml_per_unit) = factor(VOLUME_TO_ML, &unit_lower) {
        let (value, converted) = scale_metric(
            quantity * ml_per_unit,
            VOLUME_THRESHOLD,
            "ml",
            "l",
            unit_lower == "ml",
        );
        trace!("Converted {} {} -> {} {}", quantity, unit, value, converted);
        return (Some(value), Some(converted));
    }

    trace!("Unknown unit '{}', leaving {} as is", unit, quantity);
    (Some(quantity), Some(unit.to_string()))
}

/// Render a number without a decimal point when it is whole
fn format_number(quantity: f64) -> String {
    if quantity.fract() == 0.0 && quantity.abs() < i64::MAX as f64 {
        format!("{}", quantity as i64)
    } else {
        format!("{}", quantity)
    }
}

/// Format a quantity and unit for display
///
/// The unit follows the number without a space ("500g", "1.18l"); a lone
/// unit renders as itself and nothing renders as the empty string.
pub fn format_quantity(quantity: Option<f64>, unit: Option<&str>) -> String {
    match (quantity, unit) {
        (None, None) => String::new(),
        (None, Some(unit)) => unit.to_string(),
        (Some(quantity), None) => format_number(quantity),
        (Some(quantity), Some(unit)) => format!("{}{}", format_number(quantity), unit),
    }
}
