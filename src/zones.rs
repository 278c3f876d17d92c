//! # Zone Classifier
//!
//! Maps ingredient names to store zones using ordered substring rules read
//! from a `zone: pattern, pattern` file. The first zone with a matching
//! pattern wins, and zones sort in the order they are defined (the walk
//! through the store), not alphabetically. Names matching nothing land in
//! [`UNZONED`], which sorts after every configured zone.
//!
//! ```rust
//! use shopping_list::zones::{ZoneRules, UNZONED};
//!
//! let rules = ZoneRules::parse("produce: onion, pepper\ndairy: milk, cheese\n");
//! assert_eq!(rules.classify("Red Bell Pepper"), "produce");
//! assert_eq!(rules.classify("soy sauce"), UNZONED);
//! assert_eq!(rules.order(UNZONED), 2);
//! ```

use crate::config::{config_lines, read_optional};
use crate::errors::Result;
use crate::ingredient_model::CombinedIngredient;
use log::{debug, info, trace};
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Zone assigned to names that match no rule
pub const UNZONED: &str = "unzoned";

/// One configured zone and its lowercase substring patterns
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Zone {
    pub name: String,
    pub patterns: Vec<String>,
}

impl Zone {
    /// Create a zone, lowercasing and trimming its name and patterns
    ///
    /// Empty patterns are dropped.
    pub fn new<S: AsRef<str>>(name: &str, patterns: &[S]) -> Self {
        Self {
            name: name.trim().to_lowercase(),
            patterns: patterns
                .iter()
                .map(|p| p.as_ref().trim().to_lowercase())
                .filter(|p| !p.is_empty())
                .collect(),
        }
    }

    fn matches(&self, name_lower: &str) -> bool {
        self.patterns.iter().any(|pattern| name_lower.contains(pattern.as_str()))
    }
}

/// Ordered zone rules
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ZoneRules {
    zones: Vec<Zone>,
}

impl ZoneRules {
    /// Build rules from zones in store-walk order; zones without patterns are dropped
    pub fn new(zones: Vec<Zone>) -> Self {
        Self {
            zones: zones.into_iter().filter(|zone| !zone.patterns.is_empty()).collect(),
        }
    }

    /// Parse the `zone: pattern1, pattern2` format
    ///
    /// Lines without a colon are ignored, as are blank and `#` lines.
    pub fn parse(content: &str) -> Self {
        let zones = config_lines(content)
            .filter_map(|line| {
                let Some((zone, patterns)) = line.split_once(':') else {
                    trace!("Ignoring zone line without ':': '{}'", line);
                    return None;
                };
                let patterns: Vec<&str> = patterns.split(',').collect();
                Some(Zone::new(zone, &patterns))
            })
            .collect();

        Self::new(zones)
    }

    /// Load rules from a file; a missing file yields no rules
    pub fn load(path: &Path) -> Result<Self> {
        let rules = match read_optional(path)? {
            Some(content) => Self::parse(&content),
            None => Self::default(),
        };
        info!("Loaded {} zones from {}", rules.len(), path.display());
        Ok(rules)
    }

    pub fn len(&self) -> usize {
        self.zones.len()
    }

    pub fn is_empty(&self) -> bool {
        self.zones.is_empty()
    }

    pub fn zones(&self) -> &[Zone] {
        &self.zones
    }

    /// Zone names in sort order
    pub fn zone_names(&self) -> impl Iterator<Item = &str> {
        self.zones.iter().map(|zone| zone.name.as_str())
    }

    /// Zone for an ingredient name (case-insensitive substring match, first zone wins)
    pub fn classify(&self, name: &str) -> &str {
        let name_lower = name.to_lowercase();
        match self.zones.iter().find(|zone| zone.matches(&name_lower)) {
            Some(zone) => zone.name.as_str(),
            None => {
                debug!("No zone matches '{}'", name);
                UNZONED
            }
        }
    }

    /// Sort position of a zone; unknown zones and [`UNZONED`] come last
    pub fn order(&self, zone: &str) -> usize {
        let zone = zone.to_lowercase();
        self.zones
            .iter()
            .position(|z| z.name == zone)
            .unwrap_or(self.zones.len())
    }

    /// Sort items by zone order, then by lowercased name
    ///
    /// Ties fall back to the display text and unit so the result does not
    /// depend on the order items were supplied in.
    pub fn sort(&self, items: &mut [CombinedIngredient]) {
        items.sort_by_cached_key(|item| {
            (
                self.order(&item.zone),
                item.name.to_lowercase(),
                item.display.clone(),
                item.unit.clone(),
            )
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn store() -> ZoneRules {
        ZoneRules::new(vec![
            Zone::new("produce", &["onion", "pepper"]),
            Zone::new("dairy", &["milk", "cheese"]),
        ])
    }

    #[test]
    fn test_classify_first_match_wins() {
        let rules = store();
        assert_eq!(rules.classify("red bell pepper"), "produce");
        assert_eq!(rules.classify("Cheddar CHEESE"), "dairy");
        assert_eq!(rules.classify("soy sauce"), UNZONED);

        // "pepper jack cheese" matches both; produce is defined first
        assert_eq!(rules.classify("pepper jack cheese"), "produce");
    }

    #[test]
    fn test_order_follows_definition() {
        let rules = store();
        assert_eq!(rules.order("produce"), 0);
        assert_eq!(rules.order("dairy"), 1);
        assert_eq!(rules.order(UNZONED), 2);
        assert_eq!(rules.order("frozen"), 2);
    }

    #[test]
    fn test_parse_config_format() {
        let content = "# Store walk\n\
            Produce: Onion, pepper , ,garlic\n\
            \n\
            not a rule\n\
            empty:\n\
            dairy: milk\n";
        let rules = ZoneRules::parse(content);

        assert_eq!(rules.len(), 2);
        assert_eq!(rules.zone_names().collect::<Vec<_>>(), vec!["produce", "dairy"]);
        assert_eq!(rules.zones()[0].patterns, vec!["onion", "pepper", "garlic"]);
    }

    #[test]
    fn test_empty_rules_classify_everything_unzoned() {
        let rules = ZoneRules::default();
        assert!(rules.is_empty());
        assert_eq!(rules.classify("milk"), UNZONED);
        assert_eq!(rules.order(UNZONED), 0);
    }

    #[test]
    fn test_sort_by_zone_then_name() {
        let rules = store();
        let mut items = vec![
            CombinedIngredient::unmeasured("soy sauce", UNZONED),
            CombinedIngredient::unmeasured("milk", "dairy"),
            CombinedIngredient::unmeasured("Red onion", "produce"),
            CombinedIngredient::unmeasured("bell pepper", "produce"),
        ];

        rules.sort(&mut items);

        let names: Vec<&str> = items.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["bell pepper", "Red onion", "milk", "soy sauce"]);
    }
}
