//! # Recipe Parsing Integration Tests
//!
//! Parses whole recipe documents the way they are found in a recipes
//! folder and checks the extracted ingredients line by line.

use shopping_list::ingredient_parser::{parse_ingredient_line, TO_TASTE};
use shopping_list::recipe_parser::{parse_recipe, EMPTY_SECTION_ERROR, MISSING_SECTION_ERROR};

const CHILI: &str = r#"# Weeknight Chili

Servings: 6

A quick chili that freezes well.

## Ingredients

- 2 lbs ground beef
- 1 1/2 cups diced tomatoes
- 1/2 tsp cayenne
- 2-3 cloves garlic, minced
- 1 can kidney beans,
- 2 tablespoons chili powder
- 1 bunch cilantro
- Salt and pepper to taste
- sour cream

## Instructions

1. Brown the beef.
2. Add everything else and simmer.
"#;

#[test]
fn test_parse_chili() {
    let recipe = parse_recipe("weeknight-chili.md", CHILI);

    assert_eq!(recipe.name, "Weeknight Chili");
    assert_eq!(recipe.servings, 6);
    assert!(!recipe.has_error());

    let parsed: Vec<(Option<f64>, Option<&str>, &str)> = recipe
        .ingredients
        .iter()
        .map(|i| (i.quantity, i.unit.as_deref(), i.name.as_str()))
        .collect();

    assert_eq!(
        parsed,
        vec![
            (Some(2.0), Some("lb"), "ground beef"),
            (Some(1.5), Some("cup"), "diced tomatoes"),
            (Some(0.5), Some("tsp"), "cayenne"),
            (Some(3.0), Some("clove"), "garlic, minced"),
            (Some(1.0), Some("can"), "kidney beans"),
            (Some(2.0), Some("tbsp"), "chili powder"),
            (Some(1.0), Some("bunch"), "cilantro"),
            (None, Some(TO_TASTE), "Salt and pepper"),
            (None, None, "sour cream"),
        ]
    );

    // Instructions are not ingredients
    assert!(recipe.ingredients.iter().all(|i| !i.raw_text.contains("Brown")));
    assert_eq!(recipe.ingredients[0].raw_text, "- 2 lbs ground beef");
}

#[test]
fn test_missing_and_empty_sections() {
    let missing = parse_recipe("notes.md", "# Notes\nServings: 2\nJust some notes.");
    assert_eq!(missing.error.as_deref(), Some(MISSING_SECTION_ERROR));
    assert_eq!(missing.name, "Notes");
    assert_eq!(missing.servings, 2);
    assert!(missing.ingredients.is_empty());

    let empty = parse_recipe("empty.md", "# Empty\n## Ingredients\n\n# just a comment\n\n## Steps\n- 2 eggs\n");
    assert_eq!(empty.error.as_deref(), Some(EMPTY_SECTION_ERROR));
    assert!(empty.ingredients.is_empty());
}

#[test]
fn test_default_servings_and_filename_title() {
    let recipe = parse_recipe("green_bean-casserole.md", "Servings: lots\n\n## ingredients\n1 lb green beans\n");

    assert_eq!(recipe.name, "Green Bean Casserole");
    assert_eq!(recipe.servings, 4);
    assert_eq!(recipe.ingredients.len(), 1);
}

#[test]
fn test_quantity_priority() {
    let quantity = |line: &str| parse_ingredient_line(line).and_then(|i| i.quantity);

    assert_eq!(quantity("1 1/2 cups flour"), Some(1.5));
    assert_eq!(quantity("3/4 cup sugar"), Some(0.75));
    assert_eq!(quantity("1/3 cup oil"), Some(0.333));
    assert_eq!(quantity("2-4 potatoes"), Some(4.0));
    assert_eq!(quantity("2.5 kg potatoes"), Some(2.5));
    assert_eq!(quantity("1/0 cup nothing"), Some(0.0));
    assert_eq!(quantity("a handful of spinach"), None);
}

#[test]
fn test_lines_without_ingredients() {
    assert!(parse_ingredient_line("").is_none());
    assert!(parse_ingredient_line("   ").is_none());
    assert!(parse_ingredient_line("# Sauce").is_none());
    assert!(parse_ingredient_line("- to taste").is_none());
    assert!(parse_ingredient_line("-").is_none());
}
