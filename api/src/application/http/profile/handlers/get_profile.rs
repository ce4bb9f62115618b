use axum::extract::State;
use larder_core::domain::profile::ports::ProfileService;

use super::ensure_profile::ProfileResponse;
use crate::application::{
    auth::RequiredIdentity,
    http::server::{
        api_entities::{api_error::ApiError, response::Response},
        app_state::AppState,
    },
};

#[utoipa::path(
    get,
    path = "/me",
    tag = "profile",
    summary = "Get own profile",
    responses(
        (status = 200, body = ProfileResponse),
        (status = 404, description = "Profile not created yet")
    ),
)]
pub async fn get_profile(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<ProfileResponse>, ApiError> {
    let profile = state
        .service
        .get_profile(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(ProfileResponse { data: profile }))
}
