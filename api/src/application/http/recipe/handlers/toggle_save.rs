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
pub struct ToggleSaveResponse {
    pub data: ToggleOutcome,
}

#[utoipa::path(
    post,
    path = "/{recipe_id}/save",
    tag = "recipe",
    summary = "Toggle save",
    description = "Adds the recipe to the caller's saved recipes, or removes it.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 200, body = ToggleSaveResponse),
        (status = 401, description = "Not signed in"),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn toggle_save(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ToggleSaveResponse>, ApiError> {
    let outcome = state
        .service
        .toggle_save(identity, recipe_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ToggleSaveResponse { data: outcome }))
}
