//! # Recipe Parser
//!
//! Parses a whole markdown recipe document: the title, the base servings and
//! the `## Ingredients` section. A document without a usable ingredients
//! section still yields a [`ParsedRecipe`], carrying a diagnostic in
//! `error` next to whatever title and servings were found.
//!
//! ```rust
//! use shopping_list::recipe_parser::parse_recipe;
//!
//! let recipe = parse_recipe(
//!     "pancakes.md",
//!     "# Pancakes\nServings: 2\n\n## Ingredients\n- 1 cup milk\n- 2 eggs\n\n## Steps\nMix.",
//! );
//! assert_eq!(recipe.name, "Pancakes");
//! assert_eq!(recipe.servings, 2);
//! assert_eq!(recipe.ingredients.len(), 2);
//! assert!(recipe.error.is_none());
//! ```

use crate::ingredient_model::ParsedRecipe;
use crate::ingredient_parser::parse_ingredient_line;
use crate::measurement_patterns::{INGREDIENTS_HEADING_REGEX, SERVINGS_REGEX, TITLE_REGEX};
use log::{debug, info, warn};

/// Servings assumed when a document does not state them
pub const DEFAULT_SERVINGS: u32 = 4;

pub const MISSING_SECTION_ERROR: &str = "Missing '## Ingredients' section";
pub const EMPTY_SECTION_ERROR: &str = "No ingredients found in '## Ingredients' section";

/// Derive a display title from a file name: "chicken-tikka_masala.md" -> "Chicken Tikka Masala"
pub fn title_from_filename(filename: &str) -> String {
    let stem = match filename.rsplit_once('.') {
        Some((stem, _)) => stem,
        None => filename,
    };

    let spaced = stem.replace(['-', '_'], " ").split_whitespace().collect::<Vec<_>>().join(" ");
    title_case(&spaced)
}

/// Uppercase every letter that follows a non-letter, lowercase the rest
fn title_case(text: &str) -> String {
    let mut title = String::with_capacity(text.len());
    let mut after_letter = false;

    for c in text.chars() {
        if after_letter {
            title.extend(c.to_lowercase());
        } else {
            title.extend(c.to_uppercase());
        }
        after_letter = c.is_alphabetic();
    }

    title
}

fn extract_title(filename: &str, content: &str) -> String {
    TITLE_REGEX
        .captures(content)
        .map(|caps| caps[1].trim().to_string())
        .filter(|title| !title.is_empty())
        .unwrap_or_else(|| title_from_filename(filename))
}

fn extract_servings(content: &str) -> u32 {
    SERVINGS_REGEX
        .captures(content)
        .and_then(|caps| caps[1].parse().ok())
        .unwrap_or(DEFAULT_SERVINGS)
}

/// Lines of the ingredients section, or `None` when there is no such heading
///
/// The section runs from the line after the heading up to the next line
/// starting with `##`, or the end of the document.
fn ingredients_section(content: &str) -> Option<Vec<&str>> {
    let mut lines = content.lines();
    lines.find(|line| INGREDIENTS_HEADING_REGEX.is_match(line))?;

    Some(lines.take_while(|line| !line.starts_with("##")).collect())
}

/// Parse a markdown recipe document
pub fn parse_recipe(filename: &str, content: &str) -> ParsedRecipe {
    let name = extract_title(filename, content);
    let servings = extract_servings(content);
    debug!("Parsing recipe '{}' from {} ({} servings)", name, filename, servings);

    let Some(section) = ingredients_section(content) else {
        warn!("{}: {}", filename, MISSING_SECTION_ERROR);
        return ParsedRecipe::new(&name, servings, Vec::new(), content).with_error(MISSING_SECTION_ERROR);
    };

    let ingredients: Vec<_> = section
        .into_iter()
        .filter(|line| !line.trim().is_empty())
        .filter_map(parse_ingredient_line)
        .collect();

    if ingredients.is_empty() {
        warn!("{}: {}", filename, EMPTY_SECTION_ERROR);
        return ParsedRecipe::new(&name, servings, Vec::new(), content).with_error(EMPTY_SECTION_ERROR);
    }

    info!("Parsed recipe '{}' with {} ingredients", name, ingredients.len());
    ParsedRecipe::new(&name, servings, ingredients, content)
}

#[cfg(test)]
mod tests {
    use super::*;

    const LASAGNA: &str = "# Mom's Lasagna\n\
        Servings: 6\n\
        \n\
        Some intro text.\n\
        \n\
        ## Ingredients\n\
        - 1 lb ground beef\n\
        - 2 cups ricotta\n\
        # optional\n\
        - 1 onion, diced\n\
        - salt to taste\n\
        \n\
        ## Instructions\n\
        1. Brown the beef.\n";

    #[test]
    fn test_parse_full_recipe() {
        let recipe = parse_recipe("lasagna.md", LASAGNA);

        assert_eq!(recipe.name, "Mom's Lasagna");
        assert_eq!(recipe.servings, 6);
        assert_eq!(recipe.error, None);
        assert_eq!(recipe.raw_content, LASAGNA);

        let names: Vec<&str> = recipe.ingredients.iter().map(|i| i.name.as_str()).collect();
        assert_eq!(names, vec!["ground beef", "ricotta", "onion, diced", "salt"]);
        assert_eq!(recipe.ingredients[0].unit, Some("lb".to_string()));
        assert_eq!(recipe.ingredients[3].unit, Some("to taste".to_string()));
    }

    #[test]
    fn test_title_from_filename() {
        let recipe = parse_recipe("chicken-tikka_masala.md", "## Ingredients\n- 1 chicken");
        assert_eq!(recipe.name, "Chicken Tikka Masala");

        assert_eq!(title_from_filename("easy_BBQ-ribs.md"), "Easy Bbq Ribs");
        assert_eq!(title_from_filename("soup"), "Soup");
        assert_eq!(title_from_filename("my.best.stew.md"), "My.Best.Stew");
        assert_eq!(title_from_filename("o'brien-stew.md"), "O'Brien Stew");
        assert_eq!(title_from_filename("  two--bean_chili "), "Two Bean Chili");
    }

    #[test]
    fn test_deeper_ingredients_heading() {
        let recipe = parse_recipe("x.md", "# X\n### Ingredients\n- 2 eggs\n");

        assert_eq!(recipe.error, None);
        assert_eq!(recipe.ingredients.len(), 1);
        assert_eq!(recipe.ingredients[0].name, "eggs");
    }

    #[test]
    fn test_servings_default_and_case() {
        let recipe = parse_recipe("a.md", "## Ingredients\n- 1 egg");
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);

        let recipe = parse_recipe("a.md", "servings: 12\n## Ingredients\n- 1 egg");
        assert_eq!(recipe.servings, 12);

        let recipe = parse_recipe("a.md", "Servings: lots\n## Ingredients\n- 1 egg");
        assert_eq!(recipe.servings, DEFAULT_SERVINGS);
    }

    #[test]
    fn test_missing_section() {
        let recipe = parse_recipe("toast.md", "# Toast\nServings: 1\n\nJust toast it.");

        assert_eq!(recipe.name, "Toast");
        assert_eq!(recipe.servings, 1);
        assert!(recipe.ingredients.is_empty());
        assert_eq!(recipe.error, Some(MISSING_SECTION_ERROR.to_string()));
    }

    #[test]
    fn test_empty_section() {
        let content = "# Air\n\n## Ingredients\n\n# nothing here\n\n## Steps\nBreathe.";
        let recipe = parse_recipe("air.md", content);

        assert!(recipe.ingredients.is_empty());
        assert_eq!(
            recipe.error,
            Some("No ingredients found in '## Ingredients' section".to_string())
        );
    }

    #[test]
    fn test_section_runs_to_end_of_document() {
        let recipe = parse_recipe("a.md", "## ingredients\n- 2 eggs\n- 1 cup milk");
        assert_eq!(recipe.ingredients.len(), 2);
        assert_eq!(recipe.ingredients[1].name, "milk");
    }

    #[test]
    fn test_level_two_heading_is_not_a_title() {
        let recipe = parse_recipe("quick-bread.md", "## Ingredients\n- 3 cups flour");
        assert_eq!(recipe.name, "Quick Bread");
    }
}
