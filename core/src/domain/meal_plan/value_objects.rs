use chrono::NaiveDate;
use uuid::Uuid;

use crate::domain::meal_plan::entities::MealSlot;

#[derive(Debug, Clone)]
pub struct CreateMealPlanInput {
    pub title: String,
    pub start_date: NaiveDate,
    pub end_date: NaiveDate,
}

#[derive(Debug, Clone)]
pub struct AddMealPlanItemInput {
    pub meal_plan_id: Uuid,
    pub recipe_id: Uuid,
    pub scheduled_for: NaiveDate,
    pub meal: MealSlot,
}
