use axum::extract::{Query, State};
use larder_core::domain::recipe::{
    entities::RecipeSummary, ports::RecipeService, value_objects::SearchRecipesInput,
};
use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

use crate::application::{
    auth::OptionalIdentity,
    http::{
        query_params::{PaginationQuery, split_list},
        server::{
            api_entities::{api_error::ApiError, response::Response},
            app_state::AppState,
        },
    },
};

#[derive(Debug, Default, Deserialize, IntoParams)]
pub struct SearchRecipesQuery {
    /// Matched against title, description and tags.
    pub search: Option<String>,
    /// Comma-separated cuisines, e.g. `thai,italian`.
    pub cuisine: Option<String>,
    /// Upper bound on prep plus cook time, in minutes.
    pub max_total_time: Option<i32>,
    pub offset: Option<i64>,
    pub limit: Option<i64>,
}

impl From<SearchRecipesQuery> for SearchRecipesInput {
    fn from(query: SearchRecipesQuery) -> Self {
        Self {
            search: query.search,
            cuisines: split_list(query.cuisine.as_deref()),
            max_total_time: query.max_total_time,
            pagination: PaginationQuery {
                offset: query.offset,
                limit: query.limit,
            }
            .offset_limit(),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, ToSchema, PartialEq)]
pub struct SearchRecipesResponse {
    pub data: Vec<RecipeSummary>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "recipe",
    summary = "Search recipes",
    description = "Public recipes plus the caller's own. Title matches come first, then newest first.",
    params(SearchRecipesQuery),
    responses(
        (status = 200, body = SearchRecipesResponse)
    ),
)]
pub async fn search_recipes(
    Query(query): Query<SearchRecipesQuery>,
    State(state): State<AppState>,
    OptionalIdentity(viewer): OptionalIdentity,
) -> Result<Response<SearchRecipesResponse>, ApiError> {
    let recipes = state
        .service
        .search_recipes(viewer, query.into())
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(SearchRecipesResponse { data: recipes }))
}
