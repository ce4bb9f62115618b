pub mod create_recipe;
pub mod get_recipe;
pub mod search_recipes;
pub mod toggle_like;
pub mod toggle_save;
