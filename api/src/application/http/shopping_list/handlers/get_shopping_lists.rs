use axum::extract::{Query, State};
use larder_core::domain::shopping_list::{entities::ShoppingList, ports::ShoppingListService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        query_params::PaginationQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetShoppingListsResponse {
    pub data: Vec<ShoppingList>,
}

#[utoipa::path(
    get,
    path = "/shopping-lists",
    tag = "shopping-list",
    summary = "List own shopping lists",
    description = "Newest first, items in list order.",
    params(PaginationQuery),
    responses(
        (status = 200, body = GetShoppingListsResponse)
    ),
)]
pub async fn get_shopping_lists(
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetShoppingListsResponse>, ApiError> {
    let lists = state
        .service
        .get_shopping_lists(identity, query.offset_limit())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetShoppingListsResponse { data: lists }))
}
