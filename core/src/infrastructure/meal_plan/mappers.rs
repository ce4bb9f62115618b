use crate::{
    domain::{
        common::entities::app_errors::CoreError,
        meal_plan::entities::{MealPlan, MealPlanItem, MealSlot},
    },
    entity::{meal_plan_items, meal_plans, recipes},
};

impl From<meal_plans::Model> for MealPlan {
    fn from(model: meal_plans::Model) -> Self {
        Self {
            id: model.id,
            user_id: model.user_id,
            title: model.title,
            start_date: model.start_date,
            end_date: model.end_date,
            created_at: model.created_at.to_utc(),
        }
    }
}

pub fn map_item(
    model: meal_plan_items::Model,
    recipe: Option<recipes::Model>,
) -> Result<MealPlanItem, CoreError> {
    let meal: MealSlot = model.meal.parse()?;

    Ok(MealPlanItem {
        id: model.id,
        meal_plan_id: model.meal_plan_id,
        recipe_id: model.recipe_id,
        scheduled_for: model.scheduled_for,
        meal,
        recipe_title: recipe.map(|recipe| recipe.title),
        created_at: model.created_at.to_utc(),
    })
}
