use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    recipe::{
        entities::{CreateRecipeOutcome, Ingredient, Recipe, RecipeDetails, RecipeStep, RecipeSummary},
        value_objects::{CreateRecipeInput, SearchRecipesFilter, SearchRecipesInput},
    },
};

pub trait RecipeService: Send + Sync {
    fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> impl Future<Output = Result<CreateRecipeOutcome, CoreError>> + Send;

    fn get_recipe(
        &self,
        viewer: Option<Identity>,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<RecipeDetails, CoreError>> + Send;

    fn search_recipes(
        &self,
        viewer: Option<Identity>,
        input: SearchRecipesInput,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;
}

#[cfg_attr(test, mockall::automock)]
pub trait RecipeRepository: Send + Sync {
    fn create_recipe(&self, recipe: Recipe)
    -> impl Future<Output = Result<Recipe, CoreError>> + Send;

    fn add_ingredients(
        &self,
        ingredients: Vec<Ingredient>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn add_steps(
        &self,
        steps: Vec<RecipeStep>,
    ) -> impl Future<Output = Result<Vec<RecipeStep>, CoreError>> + Send;

    fn get_by_id(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Option<Recipe>, CoreError>> + Send;

    fn get_ingredients(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    /// Steps ordered by step number.
    fn get_steps(
        &self,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<Vec<RecipeStep>, CoreError>> + Send;

    fn get_ingredients_for_recipes(
        &self,
        recipe_ids: Vec<Uuid>,
    ) -> impl Future<Output = Result<Vec<Ingredient>, CoreError>> + Send;

    fn search(
        &self,
        filter: SearchRecipesFilter,
    ) -> impl Future<Output = Result<Vec<RecipeSummary>, CoreError>> + Send;
}
