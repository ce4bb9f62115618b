use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::common::generate_timestamp;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Comment {
    pub id: Uuid,
    pub recipe_id: Uuid,
    pub user_id: Uuid,
    pub content: String,
    /// Filled in when read back together with the author's profile.
    pub author_username: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Comment {
    pub fn new(recipe_id: Uuid, user_id: Uuid, content: String) -> Self {
        let (now, timestamp) = generate_timestamp();

        Self {
            id: Uuid::new_v7(timestamp),
            recipe_id,
            user_id,
            content,
            author_username: None,
            created_at: now,
        }
    }
}
