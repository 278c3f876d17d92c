//! # Recipe Parser Example
//!
//! Parses two small recipes, shows what the line parser extracts from each
//! ingredient, and combines them into a zone-sorted shopping list for a
//! different number of servings.

use shopping_list::additional_items::AdditionalItems;
use shopping_list::pantry::PantryRules;
use shopping_list::recipe_parser::parse_recipe;
use shopping_list::rule_cache::RuleSets;
use shopping_list::shopping_list::{generate, RecipeSelection, ShoppingListRequest};
use shopping_list::zones::ZoneRules;
use std::collections::HashMap;

fn main() {
    println!("🍳 Recipe Parser Example");
    println!("========================\n");

    let pancakes = parse_recipe(
        "pancakes.md",
        r#"# Fluffy Pancakes
Servings: 2

## Ingredients
- 1 1/2 cups all-purpose flour
- 2 cups milk
- 2 eggs
- 2 tbsp butter, melted
- salt to taste

## Steps
Whisk, rest, fry.
"#,
    );

    let omelette = parse_recipe(
        "herb-omelette.md",
        r#"## Ingredients
* 3 eggs
* 1/2 cup milk
* 4 oz gruyere cheese
* 1 bunch chives
"#,
    );

    for recipe in [&pancakes, &omelette] {
        println!("📖 {} (serves {})", recipe.name, recipe.servings);
        for ingredient in &recipe.ingredients {
            println!("  {:<28} → {}", ingredient.raw_text, ingredient);
        }
        println!();
    }

    let rules = RuleSets::fixed(
        ZoneRules::parse("produce: chive, herb\ndairy: milk, egg, butter, cheese\nbaking: flour, sugar"),
        PantryRules::new(&["salt", "flour"]),
        AdditionalItems::new(&["Coffee", "Paper towels"]),
    );

    let recipes = HashMap::from([(1, pancakes), (2, omelette)]);
    let request = ShoppingListRequest {
        selections: vec![
            RecipeSelection { recipe_id: 1, target_servings: 4 },
            RecipeSelection { recipe_id: 2, target_servings: 4 },
        ],
        include_pantry: vec!["salt".to_string()],
        additional_items: vec!["Coffee".to_string()],
    };

    let list = generate(&request, &recipes, &rules);

    println!("🛒 Shopping list");
    println!("----------------");
    for item in &list.shopping_items {
        println!("  [{:<9}] {}", item.zone, item.display);
    }
    println!("\n🏠 Pantry: {}", list.pantry_items.join(", "));
    println!("\n📋 Copy/paste:\n{}", list.formatted_text);
}
