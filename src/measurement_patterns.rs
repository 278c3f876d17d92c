//! # Measurement Patterns Module
//!
//! This module contains the regex patterns and lookup tables used for
//! ingredient line and recipe document parsing.
//!
//! Quantity patterns are kept separate and tried in a fixed order by the
//! line parser (mixed fraction, simple fraction, range, plain number) rather
//! than folded into one large expression.

use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;

/// Mixed fraction at the start of a line: "1 1/2"
pub const MIXED_FRACTION_PATTERN: &str = r"^(\d+)\s+(\d+/\d+)";

/// Simple fraction at the start of a line: "1/2"
pub const FRACTION_PATTERN: &str = r"^(\d+/\d+)";

/// Numeric range at the start of a line: "2-3", "1.5 - 2"
pub const RANGE_PATTERN: &str = r"^(\d+(?:\.\d+)?)\s*-\s*(\d+(?:\.\d+)?)";

/// Integer or decimal at the start of a line: "2", "2.5"
pub const NUMBER_PATTERN: &str = r"^(\d+(?:\.\d+)?)";

/// Known unit token following a quantity; must be followed by whitespace or end of line
pub const UNIT_PATTERN: &str = r"(?i)^\s*(fl\s*oz|oz|lbs?|pounds?|g|kg|ml|l|liters?|cups?|tbsp|tablespoons?|tsp|teaspoons?|cloves?|bunch|pinch|cans?|package|pkg)(?:\s|$)";

lazy_static! {
    pub static ref MIXED_FRACTION_REGEX: Regex =
        Regex::new(MIXED_FRACTION_PATTERN).expect("Mixed fraction pattern should be valid");
    pub static ref FRACTION_REGEX: Regex =
        Regex::new(FRACTION_PATTERN).expect("Fraction pattern should be valid");
    pub static ref RANGE_REGEX: Regex =
        Regex::new(RANGE_PATTERN).expect("Range pattern should be valid");
    pub static ref NUMBER_REGEX: Regex =
        Regex::new(NUMBER_PATTERN).expect("Number pattern should be valid");
    pub static ref UNIT_REGEX: Regex =
        Regex::new(UNIT_PATTERN).expect("Unit pattern should be valid");

    /// Leading list bullet ("- " or "* ")
    pub static ref BULLET_REGEX: Regex =
        Regex::new(r"^[-*]\s*").expect("Bullet pattern should be valid");
    /// A single trailing comma
    pub static ref TRAILING_COMMA_REGEX: Regex =
        Regex::new(r",\s*$").expect("Trailing comma pattern should be valid");
    /// "to taste" and everything after it
    pub static ref TO_TASTE_REGEX: Regex =
        Regex::new(r"(?i)\s*to\s+taste.*$").expect("To taste pattern should be valid");

    /// First level-1 heading of a document
    pub static ref TITLE_REGEX: Regex =
        Regex::new(r"(?m)^#\s+(.+)$").expect("Title pattern should be valid");
    /// "Servings: 4" at the start of a line
    pub static ref SERVINGS_REGEX: Regex =
        Regex::new(r"(?im)^Servings:\s*(\d+)").expect("Servings pattern should be valid");
    /// The "## Ingredients" section heading line, at level 2 or deeper
    pub static ref INGREDIENTS_HEADING_REGEX: Regex =
        Regex::new(r"(?i)^\s*###*\s*Ingredients\s*$").expect("Ingredients heading pattern should be valid");

    /// Spelling variants mapped to one canonical unit code
    pub static ref UNIT_ALIASES: HashMap<&'static str, &'static str> = {
        let mut map = HashMap::new();

        // Volume units
        map.insert("tbsp", "tbsp");
        map.insert("tablespoon", "tbsp");
        map.insert("tablespoons", "tbsp");
        map.insert("tsp", "tsp");
        map.insert("teaspoon", "tsp");
        map.insert("teaspoons", "tsp");
        map.insert("cup", "cup");
        map.insert("cups", "cup");
        map.insert("fl oz", "fl oz");
        map.insert("floz", "fl oz");
        map.insert("ml", "ml");
        map.insert("l", "l");
        map.insert("liter", "l");
        map.insert("liters", "l");

        // Weight units
        map.insert("oz", "oz");
        map.insert("lb", "lb");
        map.insert("lbs", "lb");
        map.insert("pound", "lb");
        map.insert("pounds", "lb");
        map.insert("g", "g");
        map.insert("kg", "kg");

        // Count units
        map.insert("clove", "clove");
        map.insert("cloves", "clove");
        map.insert("bunch", "bunch");
        map.insert("pinch", "pinch");
        map.insert("can", "can");
        map.insert("cans", "can");
        map.insert("package", "package");
        map.insert("pkg", "package");

        map
    };

    /// Common fractions resolved to fixed decimal approximations
    pub static ref FRACTION_VALUES: HashMap<&'static str, f64> = {
        let mut map = HashMap::new();
        map.insert("1/4", 0.25);
        map.insert("1/3", 0.333);
        map.insert("1/2", 0.5);
        map.insert("2/3", 0.667);
        map.insert("3/4", 0.75);
        map
    };
}
