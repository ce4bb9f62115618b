use axum::extract::State;
use larder_core::domain::recipe::{entities::CreateRecipeOutcome, ports::RecipeService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        recipe::validators::CreateRecipeValidator,
        server::{
            api_entities::{
                api_error::{ApiError, ValidateJson},
                response::Response,
            },
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct CreateRecipeResponse {
    pub data: CreateRecipeOutcome,
}

#[utoipa::path(
    post,
    path = "",
    tag = "recipe",
    summary = "Publish recipe",
    description = "Publishes a recipe with its ingredients and steps. When ingredients or steps cannot be stored the recipe stays published and `warnings` says what was lost.",
    responses(
        (status = 201, body = CreateRecipeResponse),
        (status = 400, description = "Invalid recipe")
    ),
    request_body = CreateRecipeValidator
)]
pub async fn create_recipe(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateRecipeValidator>,
) -> Result<Response<CreateRecipeResponse>, ApiError> {
    let outcome = state
        .service
        .create_recipe(identity, payload.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateRecipeResponse { data: outcome }))
}
