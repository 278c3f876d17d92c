//! # Configuration Module
//!
//! Runtime configuration comes from environment variables (a `.env` file is
//! honoured by the binary). The rule files it points at share one
//! line-oriented format: blank lines and lines starting with `#` are
//! ignored, and a file that does not exist counts as empty.

use crate::errors::{Result, ShoppingListError};
use log::debug;
use std::env;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

pub const DEFAULT_RECIPES_PATH: &str = "recipes";
pub const DEFAULT_CATEGORIES_PATH: &str = "categories.txt";
pub const DEFAULT_PANTRY_PATH: &str = "config/pantry.txt";
pub const DEFAULT_ADDITIONAL_ITEMS_PATH: &str = "config/additional-items.txt";

/// Locations of recipes and rule files
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Directory holding markdown recipes
    pub recipes_path: PathBuf,
    /// Zone rules, one `zone: pattern, pattern` entry per line
    pub zones_path: PathBuf,
    /// Pantry patterns, one per line
    pub pantry_path: PathBuf,
    /// Additional non-recipe items, one per line
    pub additional_items_path: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            recipes_path: PathBuf::from(DEFAULT_RECIPES_PATH),
            zones_path: PathBuf::from(DEFAULT_CATEGORIES_PATH),
            pantry_path: PathBuf::from(DEFAULT_PANTRY_PATH),
            additional_items_path: PathBuf::from(DEFAULT_ADDITIONAL_ITEMS_PATH),
        }
    }
}

impl Config {
    /// Build the configuration from `RECIPES_PATH`, `CATEGORIES_PATH`,
    /// `PANTRY_PATH` and `ADDITIONAL_ITEMS_PATH`, falling back to defaults
    pub fn from_env() -> Result<Self> {
        Ok(Self {
            recipes_path: path_var("RECIPES_PATH", DEFAULT_RECIPES_PATH)?,
            zones_path: path_var("CATEGORIES_PATH", DEFAULT_CATEGORIES_PATH)?,
            pantry_path: path_var("PANTRY_PATH", DEFAULT_PANTRY_PATH)?,
            additional_items_path: path_var("ADDITIONAL_ITEMS_PATH", DEFAULT_ADDITIONAL_ITEMS_PATH)?,
        })
    }
}

fn path_var(name: &'static str, default: &str) -> Result<PathBuf> {
    match env::var(name) {
        Ok(value) if value.trim().is_empty() => Ok(PathBuf::from(default)),
        Ok(value) => Ok(PathBuf::from(value)),
        Err(env::VarError::NotPresent) => Ok(PathBuf::from(default)),
        Err(source) => Err(ShoppingListError::Env { name, source }),
    }
}

/// Read a rule file, treating a missing file as absent rather than an error
pub fn read_optional(path: &Path) -> Result<Option<String>> {
    match fs::read_to_string(path) {
        Ok(content) => Ok(Some(content)),
        Err(err) if err.kind() == ErrorKind::NotFound => {
            debug!("Rule file {} not found, using no rules", path.display());
            Ok(None)
        }
        Err(source) => Err(ShoppingListError::Io {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Trimmed, non-empty, non-comment lines of a rule file
pub fn config_lines(content: &str) -> impl Iterator<Item = &str> {
    content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
}
