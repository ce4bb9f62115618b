use axum::extract::{Path, State};
use larder_core::domain::engagement::{entities::ToggleOutcome, ports::EngagementService};
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
pub struct ToggleLikeResponse {
    pub data: ToggleOutcome,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/like",
    tag = "recipe",
    summary = "Toggle like",
    description = "Likes the recipe, or removes the like when it already exists. Returns the new like count.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = ToggleLikeResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn toggle_like(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleLikeResponse>, ApiError> {
    let outcome = state
        .service
        .toggle_like(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleLikeResponse { data: outcome }))
}
