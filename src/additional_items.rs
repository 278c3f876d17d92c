//! Non-recipe items (paper towels, coffee, ...) that can be added to a shopping list.

use crate::config::{config_lines, read_optional};
use crate::errors::Result;
use log::info;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Configured additional items, original casing kept
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AdditionalItems {
    items: Vec<String>,
}

impl AdditionalItems {
    pub fn new<S: AsRef<str>>(items: &[S]) -> Self {
        Self {
            items: items.iter().map(|item| item.as_ref().trim().to_string()).filter(|i| !i.is_empty()).collect(),
        }
    }

    /// Parse a one-item-per-line file
    pub fn parse(content: &str) -> Self {
        let items: Vec<&str> = config_lines(content).collect();
        Self::new(&items)
    }

    /// Load items from a file; a missing file yields no items
    pub fn load(path: &Path) -> Result<Self> {
        let items = match read_optional(path)? {
            Some(content) => Self::parse(&content),
            None => Self::default(),
        };
        info!("Loaded {} additional items from {}", items.items.len(), path.display());
        Ok(items)
    }

    pub fn items(&self) -> &[String] {
        &self.items
    }
}
