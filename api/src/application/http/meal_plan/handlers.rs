pub mod add_meal_plan_item;
pub mod create_meal_plan;
pub mod get_meal_plan;
pub mod get_meal_plans;
