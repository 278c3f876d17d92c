//! # Ingredient and Shopping List Data Model
//!
//! This module defines the data structures produced and consumed by the
//! parsing and aggregation pipeline.
//!
//! ## Core Concepts
//!
//! - **ParsedIngredient**: One ingredient line as found in a recipe document
//! - **ParsedRecipe**: A whole recipe document (title, servings, ingredients)
//! - **IngredientLine**: A parsed ingredient tagged with the recipe it belongs to,
//!   which is what the combiner aggregates
//! - **CombinedIngredient**: One entry of the final shopping list
//!
//! ## Usage
//!
//! ```rust
//! use shopping_list::ingredient_model::{IngredientLine, ParsedIngredient};
//!
//! let flour = ParsedIngredient::new("flour", "2 cups flour")
//!     .with_quantity(2.0)
//!     .with_unit("cup");
//!
//! let line = IngredientLine::from_parsed(7, &flour);
//! assert_eq!(line.recipe_id, 7);
//! assert_eq!(line.unit.as_deref(), Some("cup"));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier a collaborator assigns to a stored recipe
pub type RecipeId = i64;

/// A single parsed ingredient line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedIngredient {
    /// Numeric amount, if the line carried one (ranges resolve to their upper bound)
    pub quantity: Option<f64>,

    /// Canonical short unit code (e.g. "cup", "g", "clove") or "to taste"
    pub unit: Option<String>,

    /// Ingredient name in its original casing (e.g. "Red Bell Peppers")
    pub name: String,

    /// The untouched source line
    pub raw_text: String,
}

/// Result of parsing one recipe document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParsedRecipe {
    /// Title from the first level-1 heading, or derived from the filename
    pub name: String,

    /// Base number of servings the quantities are written for
    pub servings: u32,

    /// Ingredients in source order
    pub ingredients: Vec<ParsedIngredient>,

    /// The full document text
    pub raw_content: String,

    /// Diagnostic set when the ingredients section is missing or empty
    pub error: Option<String>,
}

/// A parsed ingredient tagged with its recipe, as handed to the combiner
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct IngredientLine {
    pub recipe_id: RecipeId,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
    pub name: String,
}

/// One aggregated entry of a shopping list
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CombinedIngredient {
    /// First-seen original name of the group
    pub name: String,

    /// Sum of the group's quantities; `None` when no line had a quantity
    pub quantity: Option<f64>,

    /// Unit shared by the whole group after metric conversion
    pub unit: Option<String>,

    /// Rendered "name quantity+unit" text (e.g. "milk 1.18l")
    pub display: String,

    /// Store zone the entry is sorted under
    pub zone: String,
}

/// The complete output of a shopping-list request
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ShoppingList {
    /// Purchasable items, sorted by zone then name
    pub shopping_items: Vec<CombinedIngredient>,

    /// Names of matched pantry items, deduplicated and sorted
    pub pantry_items: Vec<String>,

    /// Flat copy-pasteable rendering, one item per line
    pub formatted_text: String,
}

impl ParsedIngredient {
    /// Create an ingredient with a name and its source line, without quantity or unit
    pub fn new(name: &str, raw_text: &str) -> Self {
        Self {
            quantity: None,
            unit: None,
            name: name.to_string(),
            raw_text: raw_text.to_string(),
        }
    }

    /// Attach a numeric quantity
    pub fn with_quantity(mut self, quantity: f64) -> Self {
        self.quantity = Some(quantity);
        self
    }

    /// Attach a unit code
    pub fn with_unit(mut self, unit: &str) -> Self {
        self.unit = Some(unit.to_string());
        self
    }

    /// Check if this ingredient has a measurable quantity
    pub fn has_quantity(&self) -> bool {
        self.quantity.is_some()
    }
}

impl ParsedRecipe {
    /// Create a recipe result with no diagnostic
    pub fn new(name: &str, servings: u32, ingredients: Vec<ParsedIngredient>, raw_content: &str) -> Self {
        Self {
            name: name.to_string(),
            servings,
            ingredients,
            raw_content: raw_content.to_string(),
            error: None,
        }
    }

    /// Attach a parse diagnostic
    pub fn with_error(mut self, error: &str) -> Self {
        self.error = Some(error.to_string());
        self
    }

    pub fn has_error(&self) -> bool {
        self.error.is_some()
    }

    /// Tag every ingredient of this recipe with `recipe_id` for combination
    pub fn ingredient_lines(&self, recipe_id: RecipeId) -> Vec<IngredientLine> {
        self.ingredients
            .iter()
            .map(|ingredient| IngredientLine::from_parsed(recipe_id, ingredient))
            .collect()
    }
}

impl IngredientLine {
    pub fn new(recipe_id: RecipeId, quantity: Option<f64>, unit: Option<&str>, name: &str) -> Self {
        Self {
            recipe_id,
            quantity,
            unit: unit.map(str::to_string),
            name: name.to_string(),
        }
    }

    pub fn from_parsed(recipe_id: RecipeId, ingredient: &ParsedIngredient) -> Self {
        Self {
            recipe_id,
            quantity: ingredient.quantity,
            unit: ingredient.unit.clone(),
            name: ingredient.name.clone(),
        }
    }
}

impl CombinedIngredient {
    /// A free-text entry with no quantity, such as a selected additional item
    pub fn unmeasured(name: &str, zone: &str) -> Self {
        Self {
            name: name.to_string(),
            quantity: None,
            unit: None,
            display: name.to_string(),
            zone: zone.to_string(),
        }
    }
}

impl fmt::Display for ParsedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if let Some(quantity) = self.quantity {
            if quantity.fract() == 0.0 {
                write!(f, "{} ", quantity as i64)?;
            } else {
                write!(f, "{} ", quantity)?;
            }
        }

        if let Some(unit) = &self.unit {
            write!(f, "{} ", unit)?;
        }

        write!(f, "{}", self.name)
    }
}

impl fmt::Display for CombinedIngredient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display)
    }
}
