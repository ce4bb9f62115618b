use axum::extract::{Path, State};
use larder_core::domain::shopping_list::{
    entities::ShoppingListItem, ports::ShoppingListService, value_objects::SetItemCheckedInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
        shopping_list::validators::SetItemCheckedValidator,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SetItemCheckedResponse {
    pub data: ShoppingListItem,
}

#[utoipa::path(
    put,
    path = "/shopping-lists/{shopping_list_id}/items/{item_id}",
    tag = "shopping-list",
    summary = "Check or uncheck item",
    params(
        ("shopping_list_id" = Uuid, Path, description = "Shopping list ID"),
        ("item_id" = Uuid, Path, description = "Item ID"),
    ),
    responses(
        (status = 200, body = SetItemCheckedResponse),
        (status = 403, description = "List belongs to another user"),
        (status = 404, description = "List or item not found")
    ),
    request_body = SetItemCheckedValidator
)]
pub async fn set_item_checked(
    Path((shopping_list_id, item_id)): Path<(Uuid, Uuid)>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<SetItemCheckedValidator>,
) -> Result<Response<SetItemCheckedResponse>, ApiError> {
    let item = state
        .service
        .set_item_checked(
            identity,
            SetItemCheckedInput {
                shopping_list_id,
                item_id,
                checked: payload.checked,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SetItemCheckedResponse { data: item }))
}
