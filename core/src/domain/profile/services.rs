use tracing::instrument;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    engagement::ports::EngagementRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    profile::{
        entities::Profile,
        ports::{ProfileRepository, ProfileService},
    },
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
};

impl<P, R, E, C, M, S, H, T> ProfileService for Service<P, R, E, C, M, S, H, T>
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
    async fn ensure_profile(&self, identity: Identity) -> Result<Profile, CoreError> {
        self.profile_repository
            .upsert(Profile::from_identity(&identity))
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_profile(&self, identity: Identity) -> Result<Profile, CoreError> {
        self.profile_repository
            .get_by_id(identity.id())
            .await?
            .ok_or(CoreError::NotFound)
    }
}
