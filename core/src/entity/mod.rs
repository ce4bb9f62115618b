//! sea-orm entity models, one module per table.

pub mod comments;
pub mod meal_plan_items;
pub mod meal_plans;
pub mod profiles;
pub mod recipe_ingredients;
pub mod recipe_likes;
pub mod recipe_saves;
pub mod recipe_steps;
pub mod recipes;
pub mod shopping_list_items;
pub mod shopping_lists;
