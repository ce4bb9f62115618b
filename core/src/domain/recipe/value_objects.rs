use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::OffsetLimit;

/// Quantity as typed by a user: either a JSON number or free text such as
/// `"1.5"` or `"1 1/2"`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
#[serde(untagged)]
pub enum QuantityInput {
    Number(f64),
    Text(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct IngredientInput {
    pub name: String,
    #[serde(default)]
    pub quantity: Option<QuantityInput>,
    #[serde(default)]
    pub unit: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeInput {
    pub title: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    /// Entries may themselves be comma-separated lists.
    pub tags: Vec<String>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub image_url: Option<String>,
    pub is_public: bool,
    pub ingredients: Vec<IngredientInput>,
    /// Entries may themselves contain several newline-separated steps.
    pub steps: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRecipesInput {
    pub search: Option<String>,
    pub cuisines: Vec<String>,
    pub max_total_time: Option<i32>,
    pub pagination: OffsetLimit,
}

/// Normalised search criteria handed to the repository.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SearchRecipesFilter {
    pub viewer_id: Option<Uuid>,
    /// Lower-cased search text; `None` matches everything.
    pub search: Option<String>,
    /// Lower-cased cuisines; empty matches every cuisine.
    pub cuisines: Vec<String>,
    pub max_total_time: Option<i32>,
    pub pagination: OffsetLimit,
}
