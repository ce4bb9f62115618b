use axum::{
    Router, middleware,
    routing::{get, post, put},
};
use utoipa::OpenApi;

use super::handlers::{
    generate_shopping_list::{__path_generate_shopping_list, generate_shopping_list},
    get_shopping_lists::{__path_get_shopping_lists, get_shopping_lists},
    set_item_checked::{__path_set_item_checked, set_item_checked},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(generate_shopping_list, get_shopping_lists, set_item_checked))]
pub struct ShoppingListApiDoc;

pub fn shopping_list_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/meal-plans/{{meal_plan_id}}/shopping-list"),
            post(generate_shopping_list),
        )
        .route(
            &format!("{root_path}/shopping-lists"),
            get(get_shopping_lists),
        )
        .route(
            &format!("{root_path}/shopping-lists/{{shopping_list_id}}/items/{{item_id}}"),
            put(set_item_checked),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
