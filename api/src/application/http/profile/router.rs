use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    ensure_profile::{__path_ensure_profile, ensure_profile},
    get_profile::{__path_get_profile, get_profile},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(ensure_profile, get_profile))]
pub struct ProfileApiDoc;

pub fn profile_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!("{}/profiles/me", state.args.server.root_path),
            get(get_profile).post(ensure_profile),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
