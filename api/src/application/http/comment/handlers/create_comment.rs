use axum::extract::{Path, State};
use larder_core::domain::comment::{
    entities::Comment, ports::CommentService, value_objects::CreateCommentInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        comment::validators::CreateCommentValidator,
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
pub struct CreateCommentResponse {
    pub data: Comment,
}

#[utoipa::path(
    post,
    path = "",
    tag = "comment",
    summary = "Comment on recipe",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
    ),
    responses(
        (status = 201, body = CreateCommentResponse),
        (status = 400, description = "Empty comment"),
        (status = 404, description = "Recipe not found")
    ),
    request_body = CreateCommentValidator
)]
pub async fn create_comment(
    Path(recipe_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateCommentValidator>,
) -> Result<Response<CreateCommentResponse>, ApiError> {
    let comment = state
        .service
        .create_comment(
            identity,
            CreateCommentInput {
                recipe_id,
                content: payload.content,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(CreateCommentResponse { data: comment }))
}
