pub mod auth;
pub mod comment;
pub mod db;
pub mod engagement;
pub mod health;
pub mod meal_plan;
pub mod profile;
pub mod recipe;
pub mod shopping_list;
