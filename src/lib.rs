//! # Shopping List
//!
//! Parses markdown recipes, scales their ingredients to the servings being
//! cooked, and combines them into a single shopping list sorted by store
//! zone, with pantry staples split out as a reminder list.

pub mod additional_items;
pub mod combiner;
pub mod config;
pub mod errors;
pub mod ingredient_model;
pub mod ingredient_parser;
pub mod measurement_patterns;
pub mod name_normalizer;
pub mod pantry;
pub mod recipe_parser;
pub mod rule_cache;
pub mod shopping_list;
pub mod unit_converter;
pub mod zones;
