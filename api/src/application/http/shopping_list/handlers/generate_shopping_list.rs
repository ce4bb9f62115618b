use axum::extract::{Path, State};
use larder_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ShoppingListResponse {
    pub data: ShoppingList,
}

#[utoipa::path(
    post,
    path = "/meal-plans/{meal_plan_id}/shopping-list",
    tag = "shopping-list",
    summary = "Generate shopping list",
    description = "Builds a draft list from every recipe scheduled in the plan. Lines with the same ingredient and unit are merged and their quantities added.",
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 201, body = ShoppingListResponse),
        (status = 403, description = "Plan belongs to another user"),
        (status = 404, description = "Plan not found")
    ),
)]
pub async fn generate_shopping_list(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ShoppingListResponse>, ApiError> {
    let list = state
        .service
        .generate_shopping_list(identity, meal_plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(ShoppingListResponse { data: list }))
}
