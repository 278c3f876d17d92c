//! # Ingredient Parser
//!
//! This module turns single ingredient-list lines into structured
//! [`ParsedIngredient`] values. Parsing is best effort and never fails:
//! anything that does not look like "quantity [unit] name" is kept as a
//! name-only ingredient.
//!
//! ## Features
//!
//! - Mixed fractions (1 1/2), simple fractions (1/2), ranges (2-3) and plain numbers
//! - Ranges resolve to their upper bound
//! - Unit spellings normalized to one short code (tablespoons -> tbsp, lbs -> lb)
//! - "to taste" lines
//! - List bullets (`-`, `*`) and a trailing comma are stripped from names
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_parser::parse_ingredient_line;
//!
//! let flour = parse_ingredient_line("- 1 1/2 cups flour").unwrap();
//! assert_eq!(flour.quantity, Some(1.5));
//! assert_eq!(flour.unit.as_deref(), Some("cup"));
//! assert_eq!(flour.name, "flour");
//! ```

use crate::ingredient_model::ParsedIngredient;
use crate::measurement_patterns::{
    BULLET_REGEX, FRACTION_REGEX, FRACTION_VALUES, MIXED_FRACTION_REGEX, NUMBER_REGEX,
    RANGE_REGEX, TO_TASTE_REGEX, TRAILING_COMMA_REGEX, UNIT_ALIASES, UNIT_REGEX,
};
use log::{debug, trace};

/// Unit recorded for "salt to taste" style lines
pub const TO_TASTE: &str = "to taste";

/// Quantity notations, in the order they are tried
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum QuantityForm {
    MixedFraction,
    Fraction,
    Range,
    Number,
}

const QUANTITY_FORMS: [QuantityForm; 4] = [
    QuantityForm::MixedFraction,
    QuantityForm::Fraction,
    QuantityForm::Range,
    QuantityForm::Number,
];

impl QuantityForm {
    /// Match this notation at the start of `text`, returning the value and the rest of the text
    fn capture(self, text: &str) -> Option<(f64, &str)> {
        let (value, end) = match self {
            QuantityForm::MixedFraction => {
                let caps = MIXED_FRACTION_REGEX.captures(text)?;
                let whole: f64 = caps[1].parse().ok()?;
                (whole + parse_fraction(&caps[2]), caps.get(0)?.end())
            }
            QuantityForm::Fraction => {
                let caps = FRACTION_REGEX.captures(text)?;
                (parse_fraction(&caps[1]), caps.get(0)?.end())
            }
            QuantityForm::Range => {
                let caps = RANGE_REGEX.captures(text)?;
                let upper: f64 = caps[2].parse().ok()?;
                (upper, caps.get(0)?.end())
            }
            QuantityForm::Number => {
                let caps = NUMBER_REGEX.captures(text)?;
                (caps[1].parse().ok()?, caps.get(0)?.end())
            }
        };
        Some((value, &text[end..]))
    }
}

/// Parse a fraction string such as "3/4" into a number
///
/// Common fractions use fixed approximations (1/3 -> 0.333). A zero
/// denominator or malformed input yields 0.
pub fn parse_fraction(fraction: &str) -> f64 {
    if let Some(value) = FRACTION_VALUES.get(fraction) {
        return *value;
    }

    let Some((numerator, denominator)) = fraction.split_once('/') else {
        return 0.0;
    };

    match (numerator.trim().parse::<f64>(), denominator.trim().parse::<f64>()) {
        (Ok(_), Ok(denominator)) if denominator == 0.0 => 0.0,
        (Ok(numerator), Ok(denominator)) => numerator / denominator,
        _ => 0.0,
    }
}

/// Map a unit spelling to its canonical short code
///
/// Unknown spellings are returned lowercased.
pub fn normalize_unit(unit: &str) -> String {
    let unit = unit.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase();
    UNIT_ALIASES
        .get(unit.as_str())
        .map(|canonical| canonical.to_string())
        .unwrap_or(unit)
}

/// Trim a name and drop a single trailing comma
fn clean_name(name: &str) -> String {
    TRAILING_COMMA_REGEX.replace(name.trim(), "").trim().to_string()
}

/// Split the text after a quantity into an optional unit and a name
///
/// A unit is only taken when a name follows it, so "2 cups" reads as two of
/// something called "cups".
fn split_unit_and_name(rest: &str) -> Option<(Option<String>, String)> {
    if let Some(caps) = UNIT_REGEX.captures(rest) {
        if let Some(whole) = caps.get(0) {
            let name = clean_name(&rest[whole.end()..]);
            if !name.is_empty() {
                return Some((Some(normalize_unit(&caps[1])), name));
            }
        }
    }

    let name = clean_name(rest);
    if name.is_empty() {
        None
    } else {
        Some((None, name))
    }
}

/// Parse a single ingredient line
///
/// Returns `None` for blank lines, comment lines (starting with `#`) and
/// lines that leave no ingredient name.
pub fn parse_ingredient_line(line: &str) -> Option<ParsedIngredient> {
    let trimmed = line.trim();
    if trimmed.is_empty() || trimmed.starts_with('#') {
        return None;
    }

    if trimmed.to_lowercase().contains(TO_TASTE) {
        let before = TO_TASTE_REGEX.replace(trimmed, "");
        let name = BULLET_REGEX.replace(&before, "").trim().to_string();
        if name.is_empty() {
            debug!("Discarding '{}': no name before '{}'", trimmed, TO_TASTE);
            return None;
        }
        trace!("Parsed to-taste line '{}' -> '{}'", trimmed, name);
        return Some(ParsedIngredient::new(&name, line).with_unit(TO_TASTE));
    }

    let body = BULLET_REGEX.replace(trimmed, "");

    for form in QUANTITY_FORMS {
        let Some((quantity, rest)) = form.capture(&body) else {
            continue;
        };

        if let Some((unit, name)) = split_unit_and_name(rest) {
            trace!(
                "Parsed '{}' as {:?}: quantity={}, unit={:?}, name='{}'",
                trimmed,
                form,
                quantity,
                unit,
                name
            );
            let mut ingredient = ParsedIngredient::new(&name, line).with_quantity(quantity);
            ingredient.unit = unit;
            return Some(ingredient);
        }

        debug!("{:?} matched '{}' but left no name, trying next form", form, trimmed);
    }

    let name = clean_name(&body);
    if name.is_empty() {
        return None;
    }

    trace!("No quantity in '{}', keeping it as a name", trimmed);
    Some(ParsedIngredient::new(&name, line))
}

/// Parse every line of an ingredient list, keeping source order
pub fn parse_ingredient_list(text: &str) -> Vec<ParsedIngredient> {
    text.lines().filter_map(parse_ingredient_line).collect()
}
