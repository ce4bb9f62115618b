use tracing::{instrument, warn};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    engagement::ports::EngagementRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    recipe::{
        entities::{
            CreateRecipeOutcome, Ingredient, Recipe, RecipeConfig, RecipeDetails, RecipeStep,
            RecipeSummary,
        },
        helpers::{clean_ingredients, non_blank, normalize_tags, split_steps},
        policies::can_view_recipe,
        ports::{RecipeRepository, RecipeService},
        value_objects::{CreateRecipeInput, SearchRecipesFilter, SearchRecipesInput},
    },
    shopping_list::ports::ShoppingListRepository,
};

/// Upper bound on prep and cook minutes (about ten weeks).
pub const MAX_MINUTES: i32 = 100_000;

fn validate_minutes(value: Option<i32>, field: &str) -> Result<Option<i32>, CoreError> {
    match value {
        Some(v) if v < 0 => Err(CoreError::Invalid(format!("{field} must not be negative"))),
        Some(v) if v > MAX_MINUTES => Err(CoreError::Invalid(format!(
            "{field} must be at most {MAX_MINUTES}"
        ))),
        other => Ok(other),
    }
}

impl<P, R, E, C, M, S, H, T> Service<P, R, E, C, M, S, H, T>
where
    R: RecipeRepository,
{
    /// Loads a recipe the viewer is allowed to see. Hidden recipes are
    /// reported as missing.
    pub(crate) async fn visible_recipe(
        &self,
        viewer: Option<&Identity>,
        recipe_id: Uuid,
    ) -> Result<Recipe, CoreError> {
        self.recipe_repository
            .get_by_id(recipe_id)
            .await?
            .filter(|recipe| can_view_recipe(viewer, recipe))
            .ok_or(CoreError::NotFound)
    }
}

impl<P, R, E, C, M, S, H, T> RecipeService for Service<P, R, E, C, M, S, H, T>
where
    P: ProfileRepository,
    R: RecipeRepository,
    E: EngagementRepository,
    C: CommentRepository,
    M: MealPlanRepository,
    S: ShoppingListRepository,
    H: HealthCheckRepository,
    T: TokenVerifier,
{
    #[instrument(skip(self, input), fields(user_id = %identity.id()))]
    async fn create_recipe(
        &self,
        identity: Identity,
        input: CreateRecipeInput,
    ) -> Result<CreateRecipeOutcome, CoreError> {
        let title = input.title.trim().to_string();
        if title.is_empty() {
            return Err(CoreError::Invalid("title is required".to_string()));
        }

        let prep_time_minutes = validate_minutes(input.prep_time_minutes, "prep_time_minutes")?;
        let cook_time_minutes = validate_minutes(input.cook_time_minutes, "cook_time_minutes")?;
        if input.servings.is_some_and(|s| s < 1) {
            return Err(CoreError::Invalid("servings must be at least 1".to_string()));
        }

        let ingredients = clean_ingredients(input.ingredients)?;
        let steps = split_steps(&input.steps);

        let recipe = self
            .recipe_repository
            .create_recipe(Recipe::new(RecipeConfig {
                author_id: identity.id(),
                title,
                description: non_blank(input.description),
                cuisine: non_blank(input.cuisine),
                tags: normalize_tags(&input.tags),
                prep_time_minutes,
                cook_time_minutes,
                servings: input.servings,
                image_url: non_blank(input.image_url),
                is_public: input.is_public,
            }))
            .await?;

        let mut warnings = Vec::new();

        let ingredients = if ingredients.is_empty() {
            Vec::new()
        } else {
            let rows = ingredients
                .into_iter()
                .map(|i| Ingredient::new(recipe.id, i.name, i.quantity, i.unit))
                .collect();
            self.recipe_repository
                .add_ingredients(rows)
                .await
                .unwrap_or_else(|e| {
                    warn!(recipe_id = %recipe.id, "ingredients failed: {}", e);
                    warnings.push(format!("Recipe saved, but ingredients failed: {e}"));
                    Vec::new()
                })
        };

        let steps = if steps.is_empty() {
            Vec::new()
        } else {
            let rows = steps
                .into_iter()
                .zip(1..)
                .map(|(instruction, number)| RecipeStep::new(recipe.id, number, instruction))
                .collect();
            self.recipe_repository
                .add_steps(rows)
                .await
                .unwrap_or_else(|e| {
                    warn!(recipe_id = %recipe.id, "steps failed: {}", e);
                    warnings.push(format!("Recipe saved, but steps failed: {e}"));
                    Vec::new()
                })
        };

        Ok(CreateRecipeOutcome {
            details: RecipeDetails {
                recipe,
                ingredients,
                steps,
            },
            warnings,
        })
    }

    #[instrument(skip(self, viewer))]
    async fn get_recipe(
        &self,
        viewer: Option<Identity>,
        recipe_id: Uuid,
    ) -> Result<RecipeDetails, CoreError> {
        let recipe = self.visible_recipe(viewer.as_ref(), recipe_id).await?;
        let ingredients = self.recipe_repository.get_ingredients(recipe.id).await?;
        let steps = self.recipe_repository.get_steps(recipe.id).await?;

        Ok(RecipeDetails {
            recipe,
            ingredients,
            steps,
        })
    }

    #[instrument(skip(self, viewer))]
    async fn search_recipes(
        &self,
        viewer: Option<Identity>,
        input: SearchRecipesInput,
    ) -> Result<Vec<RecipeSummary>, CoreError> {
        if input.max_total_time.is_some_and(|t| t < 0) {
            return Err(CoreError::Invalid(
                "max_total_time must not be negative".to_string(),
            ));
        }

        let filter = SearchRecipesFilter {
            viewer_id: viewer.as_ref().map(Identity::id),
            search: non_blank(input.search).map(|s| s.to_lowercase()),
            cuisines: input
                .cuisines
                .iter()
                .map(|c| c.trim().to_lowercase())
                .filter(|c| !c.is_empty())
                .collect(),
            max_total_time: input.max_total_time,
            pagination: input.pagination,
        };

        self.recipe_repository.search(filter).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        common::test_support::{mock_service, sample_recipe},
        recipe::value_objects::{IngredientInput, QuantityInput},
    };

    fn input(title: &str) -> CreateRecipeInput {
        CreateRecipeInput {
            title: title.to_string(),
            description: Some("  ".to_string()),
            cuisine: Some(" Thai ".to_string()),
            tags: vec!["quick, spicy".to_string()],
            prep_time_minutes: Some(10),
            cook_time_minutes: None,
            servings: Some(2),
            image_url: Some(String::new()),
            is_public: true,
            ingredients: Vec::new(),
            steps: Vec::new(),
        }
    }

    #[tokio::test]
    async fn title_only_recipe_has_no_children() {
        let mut service = mock_service();
        service
            .recipe_repository
            .expect_create_recipe()
            .times(1)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        service.recipe_repository.expect_add_ingredients().never();
        service.recipe_repository.expect_add_steps().never();

        let identity = Identity::new(Uuid::new_v4(), None);
        let outcome = service
            .create_recipe(identity.clone(), input("  Green curry "))
            .await
            .unwrap();

        let recipe = &outcome.details.recipe;
        assert_eq!(recipe.title, "Green curry");
        assert_eq!(recipe.author_id, identity.id());
        assert_eq!(recipe.description, None);
        assert_eq!(recipe.cuisine.as_deref(), Some("Thai"));
        assert_eq!(
            recipe.tags,
            Some(vec!["quick".to_string(), "spicy".to_string()])
        );
        assert_eq!(recipe.image_url, None);
        assert!(outcome.details.ingredients.is_empty());
        assert!(outcome.details.steps.is_empty());
        assert!(outcome.warnings.is_empty());
    }

    #[tokio::test]
    async fn blank_title_is_rejected_before_writing() {
        let mut service = mock_service();
        service.recipe_repository.expect_create_recipe().never();

        let result = service
            .create_recipe(Identity::new(Uuid::new_v4(), None), input("   "))
            .await;

        assert_eq!(
            result,
            Err(CoreError::Invalid("title is required".to_string()))
        );
    }

    #[tokio::test]
    async fn steps_are_numbered_and_ingredient_failure_is_a_warning() {
        let mut service = mock_service();
        service
            .recipe_repository
            .expect_create_recipe()
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        service
            .recipe_repository
            .expect_add_ingredients()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));
        service
            .recipe_repository
            .expect_add_steps()
            .withf(|steps| {
                steps.iter().map(|s| s.step_number).collect::<Vec<_>>() == vec![1, 2]
            })
            .returning(|steps| Box::pin(async move { Ok(steps) }));

        let mut request = input("Pad thai");
        request.ingredients = vec![IngredientInput {
            name: "Rice noodles".to_string(),
            quantity: Some(QuantityInput::Text("200".to_string())),
            unit: Some("g".to_string()),
        }];
        request.steps = vec!["Soak noodles\n\nStir fry".to_string()];

        let outcome = service
            .create_recipe(Identity::new(Uuid::new_v4(), None), request)
            .await
            .unwrap();

        assert!(outcome.details.ingredients.is_empty());
        assert_eq!(outcome.details.steps.len(), 2);
        assert_eq!(outcome.details.steps[1].instruction, "Stir fry");
        assert_eq!(
            outcome.warnings,
            vec!["Recipe saved, but ingredients failed: Internal server error".to_string()]
        );
    }

    #[tokio::test]
    async fn step_failure_is_a_warning_and_keeps_ingredients() {
        let mut service = mock_service();
        service
            .recipe_repository
            .expect_create_recipe()
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));
        service
            .recipe_repository
            .expect_add_ingredients()
            .times(1)
            .returning(|ingredients| Box::pin(async move { Ok(ingredients) }));
        service
            .recipe_repository
            .expect_add_steps()
            .times(1)
            .returning(|_| Box::pin(async { Err(CoreError::InternalServerError) }));

        let mut request = input("Dal");
        request.ingredients = vec![IngredientInput {
            name: "Red lentils".to_string(),
            quantity: Some(QuantityInput::Text("1 1/2".to_string())),
            unit: Some("cup".to_string()),
        }];
        request.steps = vec!["Rinse\nSimmer".to_string()];

        let outcome = service
            .create_recipe(Identity::new(Uuid::new_v4(), None), request)
            .await
            .unwrap();

        assert_eq!(outcome.details.ingredients.len(), 1);
        assert_eq!(outcome.details.ingredients[0].quantity, Some(1.5));
        assert!(outcome.details.steps.is_empty());
        assert_eq!(
            outcome.warnings,
            vec!["Recipe saved, but steps failed: Internal server error".to_string()]
        );
    }

    #[tokio::test]
    async fn minutes_above_bound_are_rejected_before_writing() {
        let mut service = mock_service();
        service.recipe_repository.expect_create_recipe().never();

        let mut request = input("Sourdough starter");
        request.cook_time_minutes = Some(i32::MAX);
        let result = service
            .create_recipe(Identity::new(Uuid::new_v4(), None), request)
            .await;

        assert_eq!(
            result,
            Err(CoreError::Invalid(
                "cook_time_minutes must be at most 100000".to_string()
            ))
        );
    }

    #[tokio::test]
    async fn minutes_at_bound_are_accepted() {
        let mut service = mock_service();
        service
            .recipe_repository
            .expect_create_recipe()
            .times(1)
            .returning(|recipe| Box::pin(async move { Ok(recipe) }));

        let mut request = input("Garum");
        request.prep_time_minutes = Some(MAX_MINUTES);
        request.cook_time_minutes = Some(MAX_MINUTES);
        let outcome = service
            .create_recipe(Identity::new(Uuid::new_v4(), None), request)
            .await
            .unwrap();

        assert_eq!(
            outcome.details.recipe.total_time(),
            Some(2 * i64::from(MAX_MINUTES))
        );
    }

    #[tokio::test]
    async fn private_recipe_is_hidden_from_other_users() {
        let author = Identity::new(Uuid::new_v4(), None);
        let mut recipe = sample_recipe(author.id());
        recipe.is_public = false;
        let recipe_id = recipe.id;

        let mut service = mock_service();
        service
            .recipe_repository
            .expect_get_by_id()
            .returning(move |_| {
                let recipe = recipe.clone();
                Box::pin(async move { Ok(Some(recipe)) })
            });
        service
            .recipe_repository
            .expect_get_ingredients()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));
        service
            .recipe_repository
            .expect_get_steps()
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let stranger = Identity::new(Uuid::new_v4(), None);
        assert_eq!(
            service.get_recipe(Some(stranger), recipe_id).await,
            Err(CoreError::NotFound)
        );
        assert_eq!(
            service.get_recipe(None, recipe_id).await,
            Err(CoreError::NotFound)
        );
        assert!(service.get_recipe(Some(author), recipe_id).await.is_ok());
    }

    #[tokio::test]
    async fn search_filter_is_normalised() {
        let viewer = Identity::new(Uuid::new_v4(), None);
        let viewer_id = viewer.id();

        let mut service = mock_service();
        service
            .recipe_repository
            .expect_search()
            .withf(move |filter| {
                filter.viewer_id == Some(viewer_id)
                    && filter.search.as_deref() == Some("curry")
                    && filter.cuisines == vec!["thai".to_string()]
                    && filter.max_total_time == Some(30)
            })
            .returning(|_| Box::pin(async { Ok(Vec::new()) }));

        let result = service
            .search_recipes(
                Some(viewer),
                SearchRecipesInput {
                    search: Some("  Curry ".to_string()),
                    cuisines: vec![" Thai".to_string(), " ".to_string()],
                    max_total_time: Some(30),
                    ..Default::default()
                },
            )
            .await;

        assert_eq!(result, Ok(Vec::new()));
    }
}
