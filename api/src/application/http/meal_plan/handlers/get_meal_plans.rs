use axum::extract::State;
use larder_core::domain::meal_plan::{entities::MealPlan, ports::MealPlanService};
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
pub struct GetMealPlansResponse {
    pub data: Vec<MealPlan>,
}

#[utoipa::path(
    get,
    path = "",
    tag = "meal-plan",
    summary = "List own meal plans",
    description = "Latest start date first.",
    responses(
        (status = 200, body = GetMealPlansResponse)
    ),
)]
pub async fn get_meal_plans(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMealPlansResponse>, ApiError> {
    let plans = state
        .service
        .get_meal_plans(identity)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealPlansResponse { data: plans }))
}
