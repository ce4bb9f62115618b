use crate::domain::{
    authentication::ports::TokenVerifier,
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    engagement::ports::EngagementRepository,
    health::{
        entities::DatabaseHealthStatus,
        ports::{HealthCheckRepository, HealthCheckService},
    },
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
};

impl<P, R, E, C, M, S, H, T> HealthCheckService for Service<P, R, E, C, M, S, H, T>
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
    async fn readness(&self) -> Result<DatabaseHealthStatus, CoreError> {
        self.health_check_repository.readness().await
    }
}
