use axum::extract::State;
use larder_core::domain::meal_plan::{
    entities::MealPlan, ports::MealPlanService, value_objects::CreateMealPlanInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        meal_plan::validators::CreateMealPlanValidator,
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
pub struct MealPlanResponse {
    pub data: MealPlan,
}

#[utoipa::path(
    post,
    path = "",
    tag = "meal-plan",
    summary = "Create meal plan",
    responses(
        (status = 201, body = MealPlanResponse),
        (status = 400, description = "Missing title or start date after end date")
    ),
    request_body = CreateMealPlanValidator
)]
pub async fn create_meal_plan(
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<CreateMealPlanValidator>,
) -> Result<Response<MealPlanResponse>, ApiError> {
    let plan = state
        .service
        .create_meal_plan(
            identity,
            CreateMealPlanInput {
                title: payload.title,
                start_date: payload.start_date,
                end_date: payload.end_date,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(MealPlanResponse { data: plan }))
}
