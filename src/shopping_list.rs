//! # Shopping List Generation
//!
//! Turns a selection of recipes (each cooked at some number of servings)
//! plus hand-picked additional items into a zone-sorted shopping list.
//!
//! The flow is:
//! 1. Compute a multiplier per selected recipe (`target / base` servings)
//! 2. Combine the selected recipes' ingredient lines
//! 3. Move pantry items out of the list
//! 4. Add the selected additional items, classified into zones
//! 5. Re-sort by zone order and name, then render the flat text

use crate::combiner::{combine_ingredients, recipe_multiplier};
use crate::ingredient_model::{CombinedIngredient, IngredientLine, ParsedRecipe, RecipeId, ShoppingList};
use crate::pantry::PantryRules;
use crate::rule_cache::RuleSets;
use crate::zones::ZoneRules;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// A recipe picked for the list, scaled to `target_servings`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecipeSelection {
    pub recipe_id: RecipeId,
    pub target_servings: u32,
}

/// Everything the user chose for one shopping list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ShoppingListRequest {
    pub selections: Vec<RecipeSelection>,

    /// Pantry item names to print at the end of the text list anyway
    #[serde(default)]
    pub include_pantry: Vec<String>,

    /// Free-text non-recipe items to buy
    #[serde(default)]
    pub additional_items: Vec<String>,
}

impl ShoppingListRequest {
    pub fn is_empty(&self) -> bool {
        self.selections.is_empty() && self.additional_items.is_empty()
    }
}

/// Render a shopping list as plain text, one entry per line, no zone headers
///
/// Item display strings come first, in the order given, followed by the
/// pantry names sorted alphabetically.
pub fn shopping_list_to_text(items: &[CombinedIngredient], pantry_names: &[String]) -> String {
    let mut pantry: Vec<&str> = pantry_names.iter().map(String::as_str).collect();
    pantry.sort_unstable();

    items
        .iter()
        .map(|item| item.display.as_str())
        .chain(pantry)
        .collect::<Vec<&str>>()
        .join("\n")
}

/// Collect the ingredient lines and multipliers for the selected recipes
///
/// A recipe selected twice contributes its lines once, scaled by the last
/// selection. Selections of unknown recipes are skipped.
fn selected_lines(
    selections: &[RecipeSelection],
    recipes: &HashMap<RecipeId, ParsedRecipe>,
) -> (Vec<IngredientLine>, HashMap<RecipeId, f64>) {
    let mut multipliers = HashMap::new();
    let mut order = Vec::new();

    for selection in selections {
        let Some(recipe) = recipes.get(&selection.recipe_id) else {
            warn!("Selected recipe {} does not exist, skipping", selection.recipe_id);
            continue;
        };

        let multiplier = recipe_multiplier(recipe.servings, selection.target_servings);
        debug!(
            "Recipe {} ('{}'): {} -> {} servings, x{}",
            selection.recipe_id, recipe.name, recipe.servings, selection.target_servings, multiplier
        );

        if multipliers.insert(selection.recipe_id, multiplier).is_none() {
            order.push(selection.recipe_id);
        }
    }

    let lines = order
        .iter()
        .filter_map(|id| recipes.get(id).map(|recipe| recipe.ingredient_lines(*id)))
        .flatten()
        .collect();

    (lines, multipliers)
}

/// Build a shopping list against explicit zone and pantry rules
pub fn build_shopping_list(
    request: &ShoppingListRequest,
    recipes: &HashMap<RecipeId, ParsedRecipe>,
    zones: &ZoneRules,
    pantry: &PantryRules,
) -> ShoppingList {
    if request.is_empty() {
        debug!("Nothing selected, returning an empty shopping list");
        return ShoppingList::default();
    }

    let (lines, multipliers) = selected_lines(&request.selections, recipes);
    let combined = combine_ingredients(&lines, &multipliers, zones);
    let (mut shopping_items, pantry_items) = pantry.filter(combined);

    for item in &request.additional_items {
        let item = item.trim();
        if item.is_empty() {
            continue;
        }
        shopping_items.push(CombinedIngredient::unmeasured(item, zones.classify(item)));
    }
    zones.sort(&mut shopping_items);

    let formatted_text = shopping_list_to_text(&shopping_items, &request.include_pantry);

    info!(
        "Shopping list: {} items to buy, {} pantry items",
        shopping_items.len(),
        pantry_items.len()
    );

    ShoppingList {
        shopping_items,
        pantry_items,
        formatted_text,
    }
}

/// Build a shopping list using the current snapshot of the configured rules
pub fn generate(
    request: &ShoppingListRequest,
    recipes: &HashMap<RecipeId, ParsedRecipe>,
    rules: &RuleSets,
) -> ShoppingList {
    if request.is_empty() {
        return ShoppingList::default();
    }

    let zones = rules.zones.get();
    let pantry = rules.pantry.get();
    build_shopping_list(request, recipes, &zones, &pantry)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ingredient_model::ParsedIngredient;
    use crate::zones::Zone;

    fn zones() -> ZoneRules {
        ZoneRules::new(vec![
            Zone::new("produce", &["onion", "garlic"]),
            Zone::new("dairy", &["milk", "butter"]),
            Zone::new("household", &["paper", "soap"]),
        ])
    }

    fn recipe(name: &str, servings: u32, ingredients: &[(Option<f64>, Option<&str>, &str)]) -> ParsedRecipe {
        let ingredients = ingredients
            .iter()
            .map(|(quantity, unit, name)| ParsedIngredient {
                quantity: *quantity,
                unit: unit.map(str::to_string),
                name: name.to_string(),
                raw_text: name.to_string(),
            })
            .collect();
        ParsedRecipe::new(name, servings, ingredients, "")
    }

    fn recipes() -> HashMap<RecipeId, ParsedRecipe> {
        HashMap::from([
            (
                1,
                recipe(
                    "Soup",
                    2,
                    &[
                        (Some(1.0), None, "onion"),
                        (Some(1.0), Some("cup"), "milk"),
                        (None, Some("to taste"), "salt"),
                    ],
                ),
            ),
            (
                2,
                recipe("Toast", 1, &[(Some(1.0), Some("tbsp"), "butter"), (Some(2.0), Some("clove"), "garlic")]),
            ),
        ])
    }

    #[test]
    fn test_text_rendering() {
        let items = vec![
            CombinedIngredient::unmeasured("onion", "produce"),
            CombinedIngredient {
                name: "milk".to_string(),
                quantity: Some(1.18),
                unit: Some("l".to_string()),
                display: "milk 1.18l".to_string(),
                zone: "dairy".to_string(),
            },
        ];
        let pantry = vec!["salt".to_string(), "olive oil".to_string()];

        assert_eq!(shopping_list_to_text(&items, &pantry), "onion\nmilk 1.18l\nolive oil\nsalt");
        assert_eq!(shopping_list_to_text(&[], &[]), "");
    }

    #[test]
    fn test_empty_request_gives_empty_list() {
        let list = build_shopping_list(&ShoppingListRequest::default(), &recipes(), &zones(), &PantryRules::default());
        assert_eq!(list, ShoppingList::default());
    }

    #[test]
    fn test_scaling_and_pantry() {
        let request = ShoppingListRequest {
            selections: vec![RecipeSelection { recipe_id: 1, target_servings: 4 }],
            include_pantry: vec!["salt".to_string()],
            additional_items: Vec::new(),
        };

        let list = build_shopping_list(&request, &recipes(), &zones(), &PantryRules::new(&["salt"]));

        let displays: Vec<&str> = list.shopping_items.iter().map(|i| i.display.as_str()).collect();
        assert_eq!(displays, vec!["onion 2", "milk 473ml"]);
        assert_eq!(list.pantry_items, vec!["salt".to_string()]);
        assert_eq!(list.formatted_text, "onion 2\nmilk 473ml\nsalt");
    }

    #[test]
    fn test_additional_items_are_zoned_and_sorted() {
        let request = ShoppingListRequest {
            selections: vec![RecipeSelection { recipe_id: 2, target_servings: 1 }],
            include_pantry: Vec::new(),
            additional_items: vec!["Paper towels".to_string(), "Coffee".to_string(), "  ".to_string()],
        };

        let list = build_shopping_list(&request, &recipes(), &zones(), &PantryRules::default());

        let entries: Vec<(&str, &str)> = list
            .shopping_items
            .iter()
            .map(|i| (i.display.as_str(), i.zone.as_str()))
            .collect();
        assert_eq!(
            entries,
            vec![
                ("garlic 2clove", "produce"),
                ("butter 15ml", "dairy"),
                ("Paper towels", "household"),
                ("Coffee", "unzoned"),
            ]
        );
    }

    #[test]
    fn test_additional_items_without_recipes() {
        let request = ShoppingListRequest {
            selections: Vec::new(),
            include_pantry: Vec::new(),
            additional_items: vec!["Dish soap".to_string()],
        };

        let list = build_shopping_list(&request, &recipes(), &zones(), &PantryRules::default());

        assert_eq!(list.formatted_text, "Dish soap");
        assert!(list.pantry_items.is_empty());
    }

    #[test]
    fn test_unknown_and_repeated_selections() {
        let request = ShoppingListRequest {
            selections: vec![
                RecipeSelection { recipe_id: 2, target_servings: 1 },
                RecipeSelection { recipe_id: 42, target_servings: 3 },
                RecipeSelection { recipe_id: 2, target_servings: 2 },
            ],
            ..Default::default()
        };

        let list = build_shopping_list(&request, &recipes(), &zones(), &PantryRules::default());

        let displays: Vec<&str> = list.shopping_items.iter().map(|i| i.display.as_str()).collect();
        assert_eq!(displays, vec!["garlic 4clove", "butter 30ml"]);
    }

    #[test]
    fn test_generate_uses_rule_snapshots() {
        let rules = RuleSets::fixed(zones(), PantryRules::new(&["salt"]), Default::default());
        let request = ShoppingListRequest {
            selections: vec![RecipeSelection { recipe_id: 1, target_servings: 2 }],
            ..Default::default()
        };

        let list = generate(&request, &recipes(), &rules);

        assert_eq!(list.formatted_text, "onion 1\nmilk 237ml");
        assert_eq!(list.pantry_items, vec!["salt".to_string()]);
    }

    #[test]
    fn test_request_json_defaults() {
        let request: ShoppingListRequest =
            serde_json::from_str(r#"{"selections": [{"recipe_id": 3, "target_servings": 6}]}"#).unwrap();

        assert_eq!(request.selections, vec![RecipeSelection { recipe_id: 3, target_servings: 6 }]);
        assert!(request.include_pantry.is_empty());
        assert!(request.additional_items.is_empty());
    }
}
