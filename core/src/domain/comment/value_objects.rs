use uuid::Uuid;

use crate::domain::common::OffsetLimit;

#[derive(Debug, Clone)]
pub struct CreateCommentInput {
    pub recipe_id: Uuid,
    pub content: String,
}

#[derive(Debug, Clone)]
pub struct GetCommentsInput {
    pub recipe_id: Uuid,
    pub pagination: OffsetLimit,
}
