use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::{generate_timestamp, generate_uuid_v7};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Recipe {
    pub id: Uuid,
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub image_url: Option<String>,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Clone)]
pub struct RecipeConfig {
    pub author_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
    pub prep_time_minutes: Option<i32>,
    pub cook_time_minutes: Option<i32>,
    pub servings: Option<i32>,
    pub image_url: Option<String>,
    pub is_public: bool,
}

impl Recipe {
    pub fn new(config: RecipeConfig) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            author_id: config.author_id,
            title: config.title,
            description: config.description,
            cuisine: config.cuisine,
            tags: config.tags,
            prep_time_minutes: config.prep_time_minutes,
            cook_time_minutes: config.cook_time_minutes,
            servings: config.servings,
            image_url: config.image_url,
            is_public: config.is_public,
            created_at: now,
            updated_at: now,
        }
    }

    /// Prep plus cook time; `None` when neither is known.
    pub fn total_time(&self) -> Option<i64> {
        match (self.prep_time_minutes, self.cook_time_minutes) {
            (None, None) => None,
            (prep, cook) => Some(i64::from(prep.unwrap_or(0)) + i64::from(cook.unwrap_or(0))),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct Ingredient {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub name: String,
    pub quantity: Option<f64>,
    pub unit: Option<String>,
}

impl Ingredient {
    pub fn new(recipe_id: Uuid, name: String, quantity: Option<f64>, unit: Option<String>) -> Self {
        Self {
            id: generate_uuid_v7(),
            recipe_id,
            name,
            quantity,
            unit,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct RecipeStep {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub step_number: i32,
    pub instruction: String,
}

impl RecipeStep {
    pub fn new(recipe_id: Uuid, step_number: i32, instruction: String) -> Self {
        Self {
            id: generate_uuid_v7(),
            recipe_id,
            step_number,
            instruction,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeDetails {
    pub recipe: Recipe,
    pub ingredients: Vec<Ingredient>,
    pub steps: Vec<RecipeStep>,
}

/// Result of publishing a recipe. Child rows that could not be written are
/// reported in `warnings`; the recipe itself stays published.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct CreateRecipeOutcome {
    pub details: RecipeDetails,
    pub warnings: Vec<String>,
}

/// One row of the recipe feed, as seen by a particular viewer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, ToSchema)]
pub struct RecipeSummary {
    pub recipe_id: Uuid,
    pub title: String,
    pub description: Option<String>,
    pub image_url: Option<String>,
    pub cuisine: Option<String>,
    pub tags: Option<Vec<String>>,
    pub total_time: Option<i64>,
    pub author_username: Option<String>,
    pub like_count: i64,
    pub comment_count: i64,
    pub is_liked: bool,
    pub is_saved: bool,
    pub created_at: DateTime<Utc>,
}
