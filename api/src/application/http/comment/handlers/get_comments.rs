use axum::extract::{Path, Query, State};
use larder_core::domain::comment::{
    entities::Comment, ports::CommentService, value_objects::GetCommentsInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::OptionalIdentity,
    http::{
        query_params::PaginationQuery,
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct GetCommentsResponse {
    pub data: Vec<Comment>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "comment",
    summary = "List comments",
    description = "Newest first, with the author's username.",
    params(
        ("recipe_id" = Uuid, Path, description = "Recipe ID"),
        PaginationQuery
    ),
    responses(
        (status = 200, body = GetCommentsResponse),
        (status = 404, description = "Recipe not found")
    ),
)]
pub async fn get_comments(
    Path(recipe_id): Path<Uuid>,
    Query(query): Query<PaginationQuery>,
    State(state): State<AppState>,
    OptionalIdentity(viewer): OptionalIdentity,
) -> Result<Response<GetCommentsResponse>, ApiError> {
    let comments = state
        .service
        .get_comments(
            viewer,
            GetCommentsInput {
                recipe_id,
                pagination: query.offset_limit(),
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetCommentsResponse { data: comments }))
}
