use sea_orm::{FromQueryResult, prelude::DateTimeWithTimeZone};
use uuid::Uuid;

use crate::{
    domain::recipe::entities::{Ingredient, Recipe, RecipeStep, RecipeSummary},
    entity::{recipe_ingredients, recipe_steps, recipes},
};

impl From<recipes::Model> for Recipe {
    fn from(model: recipes::Model) -> Self {
        Self {
            id: model.id,
            author_id: model.author_id,
            title: model.title,
            description: model.description,
            cuisine: model.cuisine,
            tags: model.tags,
            prep_time_minutes: model.prep_time_minutes,
            cook_time_minutes: model.cook_time_minutes,
            servings: model.servings,
            image_url: model.image_url,
            is_public: model.is_public,
            created_at: model.created_at.to_utc(),
            updated_at: model.updated_at.to_utc(),
        }
    }
}

impl From<recipe_ingredients::Model> for Ingredient {
    fn from(model: recipe_ingredients::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            name: model.name,
            quantity: model.quantity,
            unit: model.unit,
        }
    }
}

impl From<recipe_steps::Model> for RecipeStep {
    fn from(model: recipe_steps::Model) -> Self {
        Self {
            id: model.id,
            recipe_id: model.recipe_id,
            step_number: model.step_number,
            instruction: model.instruction,
        }
    }
}

/// Row produced by the feed query.
#[derive(Debug, FromQueryResult)]
pub struct RecipeFeedRow {
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
    pub created_at: DateTimeWithTimeZone,
}

impl From<RecipeFeedRow> for RecipeSummary {
    fn from(row: RecipeFeedRow) -> Self {
        Self {
            recipe_id: row.recipe_id,
            title: row.title,
            description: row.description,
            image_url: row.image_url,
            cuisine: row.cuisine,
            tags: row.tags,
            total_time: row.total_time,
            author_username: row.author_username,
            like_count: row.like_count,
            comment_count: row.comment_count,
            is_liked: row.is_liked,
            is_saved: row.is_saved,
            created_at: row.created_at.to_utc(),
        }
    }
}
