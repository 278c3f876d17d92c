//! # Pantry Filter
//!
//! Pantry items are things the cook is assumed to already have. They are
//! taken off the shopping list and reported by name only, as a reminder.

use crate::config::{config_lines, read_optional};
use crate::errors::Result;
use crate::ingredient_model::CombinedIngredient;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::path::Path;

/// Lowercase substring patterns for pantry items
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PantryRules {
    patterns: Vec<String>,
}

impl PantryRules {
    pub fn new<S: AsRef<str>>(patterns: &[S]) -> Self {
        Self {
            patterns: patterns
                .iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    /// Parse a one-pattern-per-line file
    pub fn parse(content: &str) -> Self {
        let patterns: Vec<&str> = config_lines(content).collect();
        Self::new(&patterns)
    }

    /// Load patterns from a file; a missing file yields no patterns
    pub fn load(path: &Path) -> Result<Self> {
        let rules = match read_optional(path)? {
            Some(content) => Self::parse(&content),
            None => Self::default(),
        };
        info!("Loaded {} pantry patterns from {}", rules.patterns.len(), path.display());
        Ok(rules)
    }

    pub fn patterns(&self) -> &[String] {
        &self.patterns
    }

    /// Check if an ingredient name contains any pantry pattern (case-insensitive)
    pub fn is_pantry_item(&self, name: &str) -> bool {
        let name_lower = name.to_lowercase();
        self.patterns.iter().any(|pattern| name_lower.contains(pattern.as_str()))
    }

    /// Split items into the shopping list and the sorted, deduplicated pantry names
    pub fn filter(&self, items: Vec<CombinedIngredient>) -> (Vec<CombinedIngredient>, Vec<String>) {
        let mut pantry_names = BTreeSet::new();
        let mut shopping = Vec::with_capacity(items.len());

        for item in items {
            if self.is_pantry_item(&item.name) {
                debug!("'{}' is a pantry item", item.name);
                pantry_names.insert(item.name);
            } else {
                shopping.push(item);
            }
        }

        (shopping, pantry_names.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str) -> CombinedIngredient {
        CombinedIngredient::unmeasured(name, "unzoned")
    }

    #[test]
    fn test_is_pantry_item() {
        let rules = PantryRules::new(&["salt", "Olive Oil"]);
        assert!(rules.is_pantry_item("Kosher SALT"));
        assert!(rules.is_pantry_item("extra virgin olive oil"));
        assert!(!rules.is_pantry_item("butter"));
    }

    #[test]
    fn test_filter_splits_and_sorts() {
        let rules = PantryRules::new(&["salt", "pepper"]);
        let items = vec![item("salt"), item("flour"), item("black pepper"), item("salt"), item("eggs")];

        let (shopping, pantry) = rules.filter(items);

        let names: Vec<&str> = shopping.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["flour", "eggs"]);
        assert_eq!(pantry, vec!["black pepper".to_string(), "salt".to_string()]);
    }

    #[test]
    fn test_no_patterns_keeps_everything() {
        let rules = PantryRules::default();
        let (shopping, pantry) = rules.filter(vec![item("salt")]);
        assert_eq!(shopping.len(), 1);
        assert!(pantry.is_empty());
    }

    #[test]
    fn test_parse() {
        let rules = PantryRules::parse("# staples\nSalt\n\n  sugar \n");
        assert_eq!(rules.patterns(), &["salt".to_string(), "sugar".to_string()]);
    }
}
