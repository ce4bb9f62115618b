use axum::{
    Router, middleware,
    routing::{get, post},
};
use utoipa::OpenApi;

use super::handlers::{
    add_meal_plan_item::{__path_add_meal_plan_item, add_meal_plan_item},
    create_meal_plan::{__path_create_meal_plan, create_meal_plan},
    get_meal_plan::{__path_get_meal_plan, get_meal_plan},
    get_meal_plans::{__path_get_meal_plans, get_meal_plans},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_meal_plans, create_meal_plan, get_meal_plan, add_meal_plan_item))]
pub struct MealPlanApiDoc;

pub fn meal_plan_routes(state: AppState) -> Router<AppState> {
    let root_path = &state.args.server.root_path;

    Router::new()
        .route(
            &format!("{root_path}/meal-plans"),
            get(get_meal_plans).post(create_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/{{meal_plan_id}}"),
            get(get_meal_plan),
        )
        .route(
            &format!("{root_path}/meal-plans/{{meal_plan_id}}/items"),
            post(add_meal_plan_item),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
