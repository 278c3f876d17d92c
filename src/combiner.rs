//! # Ingredient Combiner
//!
//! Aggregates ingredient lines from several recipes into one shopping list.
//!
//! For every line the quantity is scaled by its recipe's multiplier and
//! converted to metric; lines are then grouped by
//! `(normalized name, converted unit)`. Lines only merge when both parts of
//! the key are equal, so "8 oz cheese" and "0.5 lb cheese" (both grams) sum
//! while "2 cloves garlic" and "1 garlic" stay apart.
//!
//! Rounding happens per line during conversion, before summation. A summed
//! total is passed through the converter once more so that, for example,
//! 946ml + 237ml is shown as 1.18l.

use crate::ingredient_model::{CombinedIngredient, IngredientLine, RecipeId};
use crate::name_normalizer::normalize_ingredient_name;
use crate::unit_converter::{convert_to_metric, format_quantity};
use crate::zones::ZoneRules;
use log::{debug, info, trace};
use std::collections::HashMap;

/// Scale factor for cooking `target_servings` of a recipe written for `base_servings`
///
/// A recipe with zero base servings is not scaled.
pub fn recipe_multiplier(base_servings: u32, target_servings: u32) -> f64 {
    if base_servings == 0 {
        1.0
    } else {
        f64::from(target_servings) / f64::from(base_servings)
    }
}

type GroupKey = (String, Option<String>);

/// Lines that share a grouping key
struct Group {
    display_name: String,
    unit: Option<String>,
    quantities: Vec<f64>,
    lines: usize,
}

impl Group {
    fn add(&mut self, quantity: Option<f64>) {
        if let Some(quantity) = quantity {
            self.quantities.push(quantity);
        }
        self.lines += 1;
    }

    /// Sum of the quantified lines, `None` when there are none
    ///
    /// Values are added smallest first so the float total does not depend
    /// on the order lines arrived in.
    fn total(&mut self) -> Option<f64> {
        if self.quantities.is_empty() {
            return None;
        }
        self.quantities.sort_by(f64::total_cmp);
        Some(self.quantities.iter().sum())
    }

    fn into_combined(mut self, zones: &ZoneRules) -> CombinedIngredient {
        let total = self.total();
        let (quantity, unit) = convert_to_metric(total, self.unit.as_deref());
        let quantity_text = format_quantity(quantity, unit.as_deref());
        let display = if quantity_text.is_empty() {
            self.display_name.clone()
        } else {
            format!("{} {}", self.display_name, quantity_text)
        };
        let zone = zones.classify(&self.display_name).to_string();

        trace!("Group '{}' from {} lines -> '{}' in {}", self.display_name, self.lines, display, zone);

        CombinedIngredient {
            name: self.display_name,
            quantity,
            unit,
            display,
            zone,
        }
    }
}

/// Combine and scale ingredient lines from multiple recipes
///
/// `multipliers` maps recipe ids to their scale factor; lines from recipes
/// without an entry are used as written. The result is sorted by zone
/// order, then by lowercased name.
pub fn combine_ingredients(
    lines: &[IngredientLine],
    multipliers: &HashMap<RecipeId, f64>,
    zones: &ZoneRules,
) -> Vec<CombinedIngredient> {
    let mut groups: Vec<Group> = Vec::new();
    let mut index: HashMap<GroupKey, usize> = HashMap::new();

    for line in lines {
        let multiplier = multipliers.get(&line.recipe_id).copied().unwrap_or(1.0);
        let scaled = line.quantity.map(|quantity| quantity * multiplier);
        let (quantity, unit) = convert_to_metric(scaled, line.unit.as_deref());
        let key = (normalize_ingredient_name(&line.name), unit.clone());

        trace!(
            "Line '{}' (recipe {}, x{}) -> {:?} {:?} under {:?}",
            line.name,
            line.recipe_id,
            multiplier,
            quantity,
            unit,
            key
        );

        let position = *index.entry(key).or_insert_with(|| {
            groups.push(Group {
                display_name: line.name.clone(),
                unit,
                quantities: Vec::new(),
                lines: 0,
            });
            groups.len() - 1
        });
        groups[position].add(quantity);
    }

    debug!("Grouped {} ingredient lines into {} items", lines.len(), groups.len());

    let mut combined: Vec<CombinedIngredient> =
        groups.into_iter().map(|group| group.into_combined(zones)).collect();
    zones.sort(&mut combined);

    info!("Combined shopping list has {} items", combined.len());
    combined
}
