use chrono::NaiveDate;
use larder_core::domain::meal_plan::entities::MealSlot;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateMealPlanValidator {
    #[validate(length(min = 1, message = "title is required"))]
    pub title: String,

    /// First day of the plan, `YYYY-MM-DD`.
    pub start_date: NaiveDate,

    /// Last day of the plan, inclusive.
    pub end_date: NaiveDate,
}

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct AddMealPlanItemValidator {
    pub recipe_id: Uuid,
    pub scheduled_for: NaiveDate,
    pub meal: MealSlot,
}
