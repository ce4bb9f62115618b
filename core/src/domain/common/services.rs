/// Application service. Every domain service trait is implemented on it,
/// generic over the ports it drives.
#[derive(Clone)]
pub struct Service<P, R, E, C, M, S, H, T> {
    pub profile_repository: P,
    pub recipe_repository: R,
    pub engagement_repository: E,
    pub comment_repository: C,
    pub meal_plan_repository: M,
    pub shopping_list_repository: S,
    pub health_check_repository: H,
    pub token_verifier: T,
}

impl<P, R, E, C, M, S, H, T> Service<P, R, E, C, M, S, H, T> {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        profile_repository: P,
        recipe_repository: R,
        engagement_repository: E,
        comment_repository: C,
        meal_plan_repository: M,
        shopping_list_repository: S,
        health_check_repository: H,
        token_verifier: T,
    ) -> Self {
        Self {
            profile_repository,
            recipe_repository,
            engagement_repository,
            comment_repository,
            meal_plan_repository,
            shopping_list_repository,
            health_check_repository,
            token_verifier,
        }
    }
}
