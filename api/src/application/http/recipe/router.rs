use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    create_recipe::{__path_create_recipe, create_recipe},
    get_recipe::{__path_get_recipe, get_recipe},
    search_recipes::{__path_search_recipes, search_recipes},
    toggle_like::{__path_toggle_like, toggle_like},
    toggle_save::{__path_toggle_save, toggle_save},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(create_recipe, search_recipes, get_recipe, toggle_like, toggle_save))]
pub struct RecipeApiDoc;

pub fn recipe_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/recipes"),
            get(search_recipes).post(create_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}"),
            get(get_recipe),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}/like"),
            post(toggle_like),
        )
        .route(
            &format!("{root_path}/recipes/{{recipe_id}}/save"),
            post(toggle_save),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
