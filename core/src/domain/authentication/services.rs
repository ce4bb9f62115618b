use tracing::debug;

use crate::domain::{
    authentication::{
        ports::{AuthService, TokenVerifier},
        value_objects::{AuthorizeRequestInput, AuthorizeRequestOutput, Identity},
    },
    comment::ports::CommentRepository,
    common::{entities::app_errors::CoreError, services::Service},
    engagement::ports::EngagementRepository,
    health::ports::HealthCheckRepository,
    meal_plan::ports::MealPlanRepository,
    profile::ports::ProfileRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
};

impl<P, R, E, C, M, S, H, T> AuthService for Service<P, R, E, C, M, S, H, T>
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
    async fn authorize_request(
        &self,
        input: AuthorizeRequestInput,
    ) -> Result<AuthorizeRequestOutput, CoreError> {
        let claims = self.token_verifier.verify(&input.token)?;
        debug!(user_id = %claims.sub, "authorized request");

        Ok(AuthorizeRequestOutput {
            identity: Identity::new(claims.sub, claims.email),
        })
    }
}
