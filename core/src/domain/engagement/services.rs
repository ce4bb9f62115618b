use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    engagement::{
        entities::{EngagementKind, ToggleOutcome},
        ports::{EngagementRepository, EngagementService},
    },
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
};

impl<P, R, E, C, M, S, H, T> Service<P, R, E, C, M, S, H, T>
where
    R: RecipeRepository,
    E: EngagementRepository,
{
    async fn toggle_engagement(
        &self,
        kind: EngagementKind,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<ToggleOutcome, CoreError> {
        let recipe = self.visible_recipe(Some(&identity), recipe_id).await?;

        let outcome = self
            .engagement_repository
            .toggle(kind, recipe.id, identity.id())
            .await?;

        info!(
            recipe_id = %recipe.id,
            user_id = %identity.id(),
            active = outcome.active,
            "toggled {:?}",
            kind
        );

        Ok(outcome)
    }
}

impl<P, R, E, C, M, S, H, T> EngagementService for Service<P, R, E, C, M, S, H, T>
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
    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn toggle_like(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<ToggleOutcome, CoreError> {
        self.toggle_engagement(EngagementKind::Like, identity, recipe_id)
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn toggle_save(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> Result<ToggleOutcome, CoreError> {
        self.toggle_engagement(EngagementKind::Save, identity, recipe_id)
            .await
    }
}
