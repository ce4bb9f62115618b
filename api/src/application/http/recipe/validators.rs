use larder_core::domain::recipe::value_objects::{CreateRecipeInput, IngredientInput};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

/// Accepts either one string (comma or newline separated, depending on the
/// field) or an array of strings.
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema, PartialEq)]
#[serde(untagged)]
pub enum TextOrList {
    Text(String),
    List(Vec<String>),
}

impl Default for TextOrList {
    fn default() -> Self {
        TextOrList::List(Vec::new())
    }
}

impl From<TextOrList> for Vec<String> {
    fn from(value: TextOrList) -> Self {
        match value {
            TextOrList::Text(text) => vec![text],
            TextOrList::List(list) => list,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateRecipeValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    #[serde(default)]
    pub description: Option<String>,

    #[serde(default)]
    pub cuisine: Option<String>,

    /// `"vegan, quick"` or `["vegan", "quick"]`.
    #[serde(default)]
    pub tags: TextOrList,

    #[serde(default)]
    #[validate(range(
        min = 0,
        max = 100_000,
        message = "prep_time_minutes must be between 0 and 100000"
    ))]
    pub prep_time_minutes: Option<i32>,

    #[serde(default)]
    #[validate(range(
        min = 0,
        max = 100_000,
        message = "cook_time_minutes must be between 0 and 100000"
    ))]
    pub cook_time_minutes: Option<i32>,

    #[serde(default)]
    #[validate(range(min = 1, message = "servings must be at least 1"))]
    pub servings: Option<i32>,

    #[serde(default)]
    pub image_url: Option<String>,

    #[serde(default)]
    pub is_public: Option<bool>,

    #[serde(default)]
    pub ingredients: Vec<IngredientInput>,

    /// One step per line, or one step per entry.
    #[serde(default)]
    pub steps: TextOrList,
}

impl From<CreateRecipeValidator> for CreateRecipeInput {
    fn from(payload: CreateRecipeValidator) -> Self {
        Self {
            title: payload.title,
            description: payload.description,
            cuisine: payload.cuisine,
            tags: payload.tags.into(),
            prep_time_minutes: payload.prep_time_minutes,
            cook_time_minutes: payload.cook_time_minutes,
            servings: payload.servings,
            image_url: payload.image_url,
            is_public: payload.is_public.unwrap_or(true),
            ingredients: payload.ingredients,
            steps: payload.steps.into(),
        }
    }
}
