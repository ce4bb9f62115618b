use utoipa::OpenApi;

use crate::application::http::{
    comment::router::CommentApiDoc, health::router::HealthApiDoc,
    meal_plan::router::MealPlanApiDoc, profile::router::ProfileApiDoc,
    recipe::router::RecipeApiDoc, shopping_list::router::ShoppingListApiDoc,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Larder API"
    ),
    nest(
        (path = "/profiles", api = ProfileApiDoc),
        (path = "/recipes", api = RecipeApiDoc),
        (path = "/recipes/{recipe_id}/comments", api = CommentApiDoc),
        (path = "/meal-plans", api = MealPlanApiDoc),
        (path = "/health", api = HealthApiDoc),
    )
)]
pub struct ApiDoc;

/// Full document. Shopping list routes span two prefixes and carry
/// absolute paths.
pub fn api_doc() -> utoipa::openapi::OpenApi {
    let mut openapi = ApiDoc::openapi();
    openapi.merge(ShoppingListApiDoc::openapi());
    openapi
}
