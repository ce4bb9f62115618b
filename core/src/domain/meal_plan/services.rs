use tracing::{info, instrument};
use uuid::Uuid;

use crate::domain::{
    authentication::{ports::TokenVerifier, value_objects::Identity},
    comment::ports::CommentRepository,
    common::{
        entities::app_errors::CoreError,
        policies::{ensure_policy, is_owner},
        services::Service,
    },
    engagement::ports::EngagementRepository,
    health::ports::HealthCheckRepository,
    meal_plan::{
        entities::{MealPlan, MealPlanDetails, MealPlanItem},
        helpers::group_by_date,
        ports::{MealPlanRepository, MealPlanService},
        value_objects::{AddMealPlanItemInput, CreateMealPlanInput},
    },
    profile::ports::ProfileRepository,
    recipe::ports::RecipeRepository,
    shopping_list::ports::ShoppingListRepository,
};

impl<P, R, E, C, M, S, H, T> Service<P, R, E, C, M, S, H, T>
where
    M: MealPlanRepository,
{
    pub(crate) async fn owned_plan(
        &self,
        identity: &Identity,
        plan_id: Uuid,
    ) -> Result<MealPlan, CoreError> {
        let plan = self
            .meal_plan_repository
            .get_plan_by_id(plan_id)
            .await?
            .ok_or(CoreError::NotFound)?;

        ensure_policy(
            Ok(is_owner(identity, plan.user_id)),
            "meal plan belongs to another user",
        )?;

        Ok(plan)
    }
}

impl<P, R, E, C, M, S, H, T> MealPlanService for Service<P, R, E, C, M, S, H, T>
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
    async fn create_meal_plan(
        &self,
        identity: Identity,
        input: CreateMealPlanInput,
    ) -> Result<MealPlan, CoreError> {
        let title = input.title.trim();
        if title.is_empty() {
            return Err(CoreError::Invalid("title is required".to_string()));
        }
        if input.start_date > input.end_date {
            return Err(CoreError::Invalid(
                "start_date must not be after end_date".to_string(),
            ));
        }

        let plan = self
            .meal_plan_repository
            .create_plan(MealPlan::new(
                identity.id(),
                title.to_string(),
                input.start_date,
                input.end_date,
            ))
            .await?;

        info!(plan_id = %plan.id, "meal plan created");
        Ok(plan)
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_meal_plans(&self, identity: Identity) -> Result<Vec<MealPlan>, CoreError> {
        self.meal_plan_repository
            .get_plans_by_user(identity.id())
            .await
    }

    #[instrument(skip(self), fields(user_id = %identity.id()))]
    async fn get_meal_plan(
        &self,
        identity: Identity,
        plan_id: Uuid,
    ) -> Result<MealPlanDetails, CoreError> {
        let plan = self.owned_plan(&identity, plan_id).await?;
        let items = self.meal_plan_repository.get_items(plan.id).await?;

        Ok(MealPlanDetails {
            plan,
            days: group_by_date(items),
        })
    }

    #[instrument(skip(self, input), fields(user_id = %identity.id(), plan_id = %input.meal_plan_id))]
    async fn add_meal_plan_item(
        &self,
        identity: Identity,
        input: AddMealPlanItemInput,
    ) -> Result<MealPlanItem, CoreError> {
        let plan = self.owned_plan(&identity, input.meal_plan_id).await?;

        if !plan.contains(input.scheduled_for) {
            return Err(CoreError::Invalid(format!(
                "{} is outside the plan range {} to {}",
                input.scheduled_for, plan.start_date, plan.end_date
            )));
        }

        let recipe = self.visible_recipe(Some(&identity), input.recipe_id).await?;

        let mut item = self
            .meal_plan_repository
            .add_item(MealPlanItem::new(
                plan.id,
                recipe.id,
                input.scheduled_for,
                input.meal,
            ))
            .await?;
        item.recipe_title = Some(recipe.title);

        Ok(item)
    }
}
