//! Consolidation of recipe ingredient lines into shopping list lines.
//!
//! Lines are grouped by normalised name and normalised unit. Quantities in a
//! group are summed over the lines that have one and rounded to three
//! decimals; a group where no line has a quantity keeps none. Units are never
//! converted, so "1 cup flour" and "120 g flour" stay separate lines.

use std::{collections::BTreeMap, sync::LazyLock};

use regex::Regex;

use crate::domain::recipe::entities::Ingredient;

static WHITESPACE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\s+").expect("valid regex"));

/// Trimmed, lower-cased, inner whitespace collapsed to single spaces.
pub fn normalize_key(value: &str) -> String {
    WHITESPACE
        .replace_all(value.trim(), " ")
        .to_lowercase()
}

#[derive(Debug, Clone, PartialEq)]
pub struct ConsolidatedLine {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Groups `lines`, keeping the first-seen spelling of name and unit.
/// Output is ordered by name key, then unit key (lines without unit first).
pub fn consolidate<'a, I>(lines: I) -> Vec<ConsolidatedLine>
where
    I: IntoIterator<Item = &'a Ingredient>,
{
    let mut groups: BTreeMap<(String, Option<String>), ConsolidatedLine> = BTreeMap::new();

    for line in lines {
        let name_key = normalize_key(&line.name);
        if name_key.is_empty() {
            continue;
        }
        let unit = line
            .unit
            .as_deref()
            .map(str::trim)
            .filter(|u| !u.is_empty());
        let unit_key = unit.map(normalize_key);

        let entry = groups
            .entry((name_key, unit_key))
            .or_insert_with(|| ConsolidatedLine {
                name: WHITESPACE.replace_all(line.name.trim(), " ").into_owned(),
                quantity: None,
                unit: unit.map(str::to_string),
            });

        if let Some(quantity) = line.quantity {
            entry.quantity = Some(entry.quantity.unwrap_or(0.0) + quantity);
        }
    }

    groups
        .into_values()
        .map(|mut line| {
            line.quantity = line.quantity.map(round_quantity);
            line
        })
        .collect()
}

fn round_quantity(value: f64) -> f64 {
    (value * 1000.0).round() / 1000.0
}
