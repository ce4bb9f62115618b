use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use validator::Validate;

#[derive(Debug, Serialize, Deserialize, Validate, ToSchema)]
pub struct CreateCommentValidator {
    #[validate(length(min = 1, message = "content is required"))]
    pub content: String,
}
