use anyhow::{bail, Context, Result};
use log::{info, warn};
use shopping_list::config::Config;
use shopping_list::ingredient_model::{ParsedRecipe, RecipeId};
use shopping_list::recipe_parser::parse_recipe;
use shopping_list::rule_cache::RuleSets;
use shopping_list::shopping_list::{generate, RecipeSelection, ShoppingListRequest};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

const USAGE: &str = "Usage: shopping-list [--extras] [--with-pantry] [--json] [+ITEM ...] [RECIPE.md[=SERVINGS] ...]";

/// Command line choices
#[derive(Debug, Default)]
struct Args {
    recipes: Vec<(PathBuf, Option<u32>)>,
    additional_items: Vec<String>,
    with_pantry: bool,
    list_extras: bool,
    json: bool,
    help: bool,
}

fn parse_args(args: impl Iterator<Item = String>) -> Result<Args> {
    let mut parsed = Args::default();

    for arg in args {
        match arg.as_str() {
            "--extras" => parsed.list_extras = true,
            "--with-pantry" => parsed.with_pantry = true,
            "--json" => parsed.json = true,
            "-h" | "--help" => parsed.help = true,
            flag if flag.starts_with("--") => bail!("Unknown option '{}'\n{}", flag, USAGE),
            _ => {
                if let Some(item) = arg.strip_prefix('+') {
                    parsed.additional_items.push(item.to_string());
                } else if let Some((path, servings)) = arg.rsplit_once('=') {
                    let servings = servings
                        .parse()
                        .with_context(|| format!("Invalid servings in '{}'", arg))?;
                    parsed.recipes.push((PathBuf::from(path), Some(servings)));
                } else {
                    parsed.recipes.push((PathBuf::from(&arg), None));
                }
            }
        }
    }

    Ok(parsed)
}

/// Markdown recipes in `dir`, skipping `00-` templates, sorted by file name
fn recipe_files(dir: &Path) -> Result<Vec<PathBuf>> {
    let mut files = Vec::new();
    for entry in fs::read_dir(dir).with_context(|| format!("Failed to list recipes in {}", dir.display()))? {
        let path = entry?.path();
        let is_markdown = path.extension().is_some_and(|ext| ext == "md");
        let is_template = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.starts_with("00-"));
        if is_markdown && !is_template {
            files.push(path);
        }
    }
    files.sort();
    Ok(files)
}

fn load_recipe(path: &Path) -> Result<ParsedRecipe> {
    let content = fs::read_to_string(path).with_context(|| format!("Failed to read recipe {}", path.display()))?;
    let filename = path
        .file_name()
        .and_then(|name| name.to_str())
        .unwrap_or_default();

    let recipe = parse_recipe(filename, &content);
    if let Some(error) = &recipe.error {
        warn!("{}: {}", path.display(), error);
    }
    Ok(recipe)
}

fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenv::dotenv().ok();

    // Initialize logging
    env_logger::init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let args = parse_args(std::env::args().skip(1))?;
    let rules = RuleSets::from_config(&config);

    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    if args.list_extras {
        for item in rules.additional_items.get().items() {
            println!("{}", item);
        }
        return Ok(());
    }

    let wanted: Vec<(PathBuf, Option<u32>)> = if args.recipes.is_empty() {
        recipe_files(&config.recipes_path)?
            .into_iter()
            .map(|path| (path, None))
            .collect()
    } else {
        args.recipes
    };

    info!("Building shopping list from {} recipes", wanted.len());

    let mut recipes: HashMap<RecipeId, ParsedRecipe> = HashMap::new();
    let mut selections = Vec::new();
    for (id, (path, servings)) in (1..).zip(wanted) {
        let recipe = load_recipe(&path)?;
        selections.push(RecipeSelection {
            recipe_id: id,
            target_servings: servings.unwrap_or(recipe.servings),
        });
        recipes.insert(id, recipe);
    }

    let mut request = ShoppingListRequest {
        selections,
        include_pantry: Vec::new(),
        additional_items: args.additional_items,
    };

    if args.with_pantry {
        // Pantry names are only known after filtering
        request.include_pantry = generate(&request, &recipes, &rules).pantry_items;
    }

    let list = generate(&request, &recipes, &rules);
    if args.json {
        let json = serde_json::to_string_pretty(&list).context("Failed to serialize shopping list")?;
        println!("{}", json);
    } else if !list.formatted_text.is_empty() {
        println!("{}", list.formatted_text);
    }

    Ok(())
}
