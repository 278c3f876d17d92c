//! # Name Normalizer
//!
//! Builds the grouping key used to recognize "Onions" and "onion" as the same
//! ingredient: lowercase, trimmed, whitespace collapsed, and the last word
//! singularized. The last word is assumed to be the head noun, so
//! "red bell peppers" becomes "red bell pepper" while "peppers, red" keeps
//! its plural.

/// Words ending in "s" that are already singular
const INVARIANT_WORDS: &[&str] = &[
    "asparagus",
    "couscous",
    "hummus",
    "molasses",
    "swiss",
    "citrus",
    "octopus",
    "schnapps",
];

/// Irregular "-ves" plurals
const IRREGULAR_PLURALS: &[(&str, &str)] = &[
    ("leaves", "leaf"),
    ("loaves", "loaf"),
    ("halves", "half"),
    ("knives", "knife"),
    ("calves", "calf"),
];

/// Endings that take "-es" in the plural
const ES_ENDINGS: &[&str] = &["ches", "shes", "sses", "xes", "oes"];

/// Strip `suffix` from the end of `word`, ignoring ASCII case
fn strip_suffix_ignore_case<'a>(word: &'a str, suffix: &str) -> Option<&'a str> {
    let split = word.len().checked_sub(suffix.len())?;
    if !word.is_char_boundary(split) {
        return None;
    }
    let (stem, ending) = word.split_at(split);
    ending.eq_ignore_ascii_case(suffix).then_some(stem)
}

/// Convert a plural word to its singular form
///
/// Words ending in "ies" always become "y" ("cherries" -> "cherry"). Other
/// words are only changed when a regular plural ending is recognized;
/// anything else is returned unchanged.
pub fn singularize(word: &str) -> String {
    if let Some(stem) = strip_suffix_ignore_case(word, "ies") {
        return format!("{}y", stem);
    }

    let lower = word.to_lowercase();

    if INVARIANT_WORDS.contains(&lower.as_str()) {
        return word.to_string();
    }

    if let Some((_, singular)) = IRREGULAR_PLURALS.iter().find(|(plural, _)| *plural == lower) {
        return singular.to_string();
    }

    for ending in ES_ENDINGS {
        if let Some(stem) = strip_suffix_ignore_case(word, ending) {
            return format!("{}{}", stem, &ending[..ending.len() - 2]);
        }
    }

    // grass, fungus, basis
    let singular_ending = ["ss", "us", "is"]
        .iter()
        .any(|ending| strip_suffix_ignore_case(word, ending).is_some());

    match strip_suffix_ignore_case(word, "s") {
        Some(stem) if stem.len() > 1 && !singular_ending => stem.to_string(),
        _ => word.to_string(),
    }
}

/// Normalize an ingredient name into its grouping key
pub fn normalize_ingredient_name(name: &str) -> String {
    let lowered = name.trim().to_lowercase();
    let mut words: Vec<String> = lowered.split_whitespace().map(str::to_string).collect();

    if let Some(last) = words.last_mut() {
        *last = singularize(last);
    }

    words.join(" ")
}
