use axum::extract::{Path, State};
use larder_core::domain::meal_plan::{
    entities::MealPlanItem, ports::MealPlanService, value_objects::AddMealPlanItemInput,
};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::application::{
    auth::RequiredIdentity,
    http::{
        meal_plan::validators::AddMealPlanItemValidator,
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
pub struct AddMealPlanItemResponse {
    pub data: MealPlanItem,
}

#[utoipa::path(
    post,
    path = "/{meal_plan_id}/items",
    tag = "meal-plan",
    summary = "Schedule recipe",
    description = "Schedules a visible recipe on a day inside the plan's range.",
    params(
        ("meal_plan_id" = Uuid, Path, description = "Meal plan ID"),
    ),
    responses(
        (status = 201, body = AddMealPlanItemResponse),
        (status = 400, description = "Date outside the plan"),
        (status = 403, description = "Plan belongs to another user"),
        (status = 404, description = "Plan or recipe not found")
    ),
    request_body = AddMealPlanItemValidator
)]
pub async fn add_meal_plan_item(
    Path(meal_plan_id): Path<Uuid>,
    State(state): State<AppState>,
    RequiredIdentity(identity): RequiredIdentity,
    ValidateJson(payload): ValidateJson<AddMealPlanItemValidator>,
) -> Result<Response<AddMealPlanItemResponse>, ApiError> {
    let item = state
        .service
        .add_meal_plan_item(
            identity,
            AddMealPlanItemInput {
                meal_plan_id,
                recipe_id: payload.recipe_id,
                scheduled_for: payload.scheduled_for,
                meal: payload.meal,
            },
        )
        .await
        .map_err(ApiError::from)?;

    Ok(Response::Created(AddMealPlanItemResponse { data: item }))
}
