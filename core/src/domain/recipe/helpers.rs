use crate::domain::{
    common::entities::app_errors::CoreError,
    recipe::value_objects::{IngredientInput, QuantityInput},
};

/// Trims `value` and turns blank strings into `None`.
pub fn non_blank(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

/// Splits every entry on commas, trims, drops empties and duplicates.
pub fn normalize_tags(raw: &[String]) -> Option<Vec<String>> {
    let mut tags: Vec<String> = Vec::new();
    for tag in raw.iter().flat_map(|entry| entry.split(',')) {
        let tag = tag.trim();
        if !tag.is_empty() && !tags.iter().any(|t| t == tag) {
            tags.push(tag.to_string());
        }
    }

    (!tags.is_empty()).then_some(tags)
}

/// One instruction per non-blank line, in order.
pub fn split_steps(raw: &[String]) -> Vec<String> {
    raw.iter()
        .flat_map(|entry| entry.lines())
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}

/// Accepts decimals (`"1.5"`, `"2,5"`), fractions (`"1/2"`) and mixed
/// numbers (`"1 1/2"`). Blank text means no quantity. Signs, exponents and
/// anything beyond `<whole> <fraction>` are rejected.
pub fn parse_quantity(input: &QuantityInput) -> Result<Option<f64>, CoreError> {
    let text = match input {
        QuantityInput::Number(n) => return finite(*n).map(Some),
        QuantityInput::Text(text) => text.trim(),
    };

    if text.is_empty() {
        return Ok(None);
    }

    let parts: Vec<&str> = text.split_whitespace().collect();
    let value = match parts.as_slice() {
        [single] => fraction(single).or_else(|| unsigned(single)),
        [whole, part] if whole.chars().all(|c| c.is_ascii_digit()) => {
            match (unsigned(whole), fraction(part)) {
                (Some(whole), Some(part)) => Some(whole + part),
                _ => None,
            }
        }
        _ => None,
    };

    value
        .ok_or_else(|| CoreError::Invalid(format!("invalid quantity: {text}")))
        .and_then(finite)
        .map(Some)
}

/// Plain digits with an optional `.` or `,` decimal separator.
fn unsigned(text: &str) -> Option<f64> {
    if text.is_empty() || !text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',') {
        return None;
    }
    text.replace(',', ".").parse().ok()
}

fn fraction(text: &str) -> Option<f64> {
    let (num, den) = text.split_once('/')?;
    let num = unsigned(num)?;
    let den = unsigned(den)?;
    (den > 0.0).then(|| num / den)
}

fn finite(value: f64) -> Result<f64, CoreError> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(CoreError::Invalid(format!("invalid quantity: {value}")))
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CleanIngredient {
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

/// Drops rows without a name and parses the rest.
pub fn clean_ingredients(rows: Vec<IngredientInput>) -> Result<Vec<CleanIngredient>, CoreError> {
    rows.into_iter()
        .filter(|row| !row.name.trim().is_empty())
        .map(|row| {
            let quantity = match &row.quantity {
                Some(q) => parse_quantity(q)?,
                None => None,
            };
            Ok(CleanIngredient {
                name: row.name.trim().to_string(),
                quantity,
                unit: non_blank(row.unit),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn tags_are_split_trimmed_and_deduplicated() {
        assert_eq!(
            normalize_tags(&strings(&["vegan, quick", " gluten-free ,,vegan"])),
            Some(strings(&["vegan", "quick", "gluten-free"]))
        );
        assert_eq!(normalize_tags(&strings(&[" , "])), None);
        assert_eq!(normalize_tags(&[]), None);
    }

    #[test]
    fn steps_skip_blank_lines() {
        let steps = split_steps(&strings(&["Chop onions\n\n  Fry them  \n", "Serve"]));
        assert_eq!(steps, strings(&["Chop onions", "Fry them", "Serve"]));
    }

    #[test]
    fn quantities_accept_fractions_and_decimals() {
        let parse = |s: &str| parse_quantity(&QuantityInput::Text(s.to_string()));
        assert_eq!(parse("2"), Ok(Some(2.0)));
        assert_eq!(parse("2,5"), Ok(Some(2.5)));
        assert_eq!(parse("1/2"), Ok(Some(0.5)));
        assert_eq!(parse("1 1/2"), Ok(Some(1.5)));
        assert_eq!(parse("  "), Ok(None));
        assert_eq!(parse_quantity(&QuantityInput::Number(3.0)), Ok(Some(3.0)));
    }

    #[test]
    fn bad_quantities_are_rejected() {
        let parse = |s: &str| parse_quantity(&QuantityInput::Text(s.to_string()));
        assert!(matches!(parse("a pinch"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1/0"), Err(CoreError::Invalid(_))));
        assert!(parse_quantity(&QuantityInput::Number(-1.0)).is_err());
    }

    #[test]
    fn only_whole_plus_fraction_may_span_two_tokens() {
        let parse = |s: &str| parse_quantity(&QuantityInput::Text(s.to_string()));
        assert_eq!(parse("2 3/4"), Ok(Some(2.75)));
        assert!(matches!(parse("2 -1"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1 2 3"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1/2 1"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1 2"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1.5 1/2"), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn signed_or_exotic_numbers_are_rejected() {
        let parse = |s: &str| parse_quantity(&QuantityInput::Text(s.to_string()));
        assert!(matches!(parse("-1"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("-1/2"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1/-2"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("+2"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("1e3"), Err(CoreError::Invalid(_))));
        assert!(matches!(parse("inf"), Err(CoreError::Invalid(_))));
    }

    #[test]
    fn nameless_ingredient_rows_are_dropped() {
        let rows = vec![
            IngredientInput {
                name: "  Flour ".to_string(),
                quantity: Some(QuantityInput::Text("500".to_string())),
                unit: Some(" g ".to_string()),
            },
            IngredientInput {
                name: "   ".to_string(),
                quantity: Some(QuantityInput::Number(1.0)),
                unit: None,
            },
            IngredientInput {
                name: "Salt".to_string(),
                quantity: None,
                unit: Some(String::new()),
            },
        ];

        let cleaned = clean_ingredients(rows).unwrap();
        assert_eq!(
            cleaned,
            vec![
                CleanIngredient {
                    name: "Flour".to_string(),
                    quantity: Some(500.0),
                    unit: Some("g".to_string()),
                },
                CleanIngredient {
                    name: "Salt".to_string(),
                    quantity: None,
                    unit: None,
                },
            ]
        );
    }
}
