use axum::extract::State;
use larder_core::domain::profile::{entities::Profile, ports::ProfileService};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct ProfileResponse {
    pub data: Profile,
}

#[utoipa::path(
    post,
    path = "/me",
    tag = "profile",
    summary = "Ensure profile",
    description = "Creates the caller's profile on first sign-in. Calling it again is harmless.",
    responses(
        (status = 200, body = ProfileResponse)
    ),
)]
pub async fn ensure_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .ensure_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
