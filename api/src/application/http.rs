pub mod comment;
pub mod health;
pub mod meal_plan;
pub mod profile;
pub mod query_params;
pub mod recipe;
pub mod server;
pub mod shopping_list;
