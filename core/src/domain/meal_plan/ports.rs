use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    meal_plan::{
        entities::{MealPlan, MealPlanDetails, MealPlanItem},
        value_objects::{AddMealPlanItemInput, CreateMealPlanInput},
    },
};

#[cfg_attr(test, mockall::automock)]
pub trait MealPlanRepository: Send + Sync {
    fn create_plan(&self, plan: MealPlan)
    -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    /// Plans of one user, latest start date first.
    fn get_plans_by_user(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn get_plan_by_id(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<Option<MealPlan>, CoreError>> + Send;

    fn add_item(
        &self,
        item: MealPlanItem,
    ) -> impl Future<Output = Result<MealPlanItem, CoreError>> + Send;

    /// Items of a plan with their recipe titles, earliest date first.
    fn get_items(
        &self,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<Vec<MealPlanItem>, CoreError>> + Send;
}

pub trait MealPlanService: Send + Sync {
    fn create_meal_plan(
        &self,
        identity: Identity,
        input: CreateMealPlanInput,
    ) -> impl Future<Output = Result<MealPlan, CoreError>> + Send;

    fn get_meal_plans(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Vec<MealPlan>, CoreError>> + Send;

    fn get_meal_plan(
        &self,
        identity: Identity,
        plan_id: Uuid,
    ) -> impl Future<Output = Result<MealPlanDetails, CoreError>> + Send;

    fn add_meal_plan_item(
        &self,
        identity: Identity,
        input: AddMealPlanItemInput,
    ) -> impl Future<Output = Result<MealPlanItem, CoreError>> + Send;
}
