use axum::{Router, middleware, routing::get};
use utoipa::OpenApi;

use super::handlers::{
    create_comment::{__path_create_comment, create_comment},
    get_comments::{__path_get_comments, get_comments},
};
use crate::application::{auth::auth, http::server::app_state::AppState};

#[derive(OpenApi)]
#[openapi(paths(get_comments, create_comment))]
pub struct CommentApiDoc;

pub fn comment_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            &format!(
                "{}/recipes/{{recipe_id}}/comments",
                state.args.server.root_path
            ),
            get(get_comments).post(create_comment),
        )
        .layer(middleware::from_fn_with_state(state.clone(), auth))
}
