use axum::extract::{Path, State};
use larder_core::domain::meal_plan::{entities::MealPlanDetails, ports::MealPlanService};
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
pub struct GetMealPlanResponse {
    pub data: MealPlanDetails,
}

#[utoipa::path(
    get,
    path = "/{meal_plan_id}",
    tag = "meal-plan",
    summary = "Get meal plan",
    description = "Plan with its items grouped by day, breakfast to snack within a day.",
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 200, body = GetMealPlanResponse),
        (status = 403, description = "Plan belongs to another user"),
        (status = 404, description = "Plan not found")
    ),
)]
pub async fn get_meal_plan(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
) -> Result<Response<GetMealPlanResponse>, ApiError> {
    let details = state
        .service
        .get_meal_plan(identity, meal_plan_id)
        .await
        .map_err(ApiError::from)?;

    Ok(Response::OK(GetMealPlanResponse { data: details }))
}
