use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
#[serde(rename_all = "lowercase")]
pub enum EngagementKind {
    Like,
    Save,
}

/// State of a like or save after it was toggled.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct ToggleOutcome {
    pub recipe_id: Uuid,
    pub kind: EngagementKind,
    pub active: bool,
    /// Number of users holding this like or save after the toggle.
    pub count: i64,
}
