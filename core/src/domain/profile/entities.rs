use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::domain::{authentication::value_objects::Identity, common::generate_timestamp};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct Profile {
    pub id: Uuid,
    pub username: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Profile {
    pub fn from_identity(identity: &Identity) -> Self {
        let (now, _) = generate_timestamp();

        Self {
            id: identity.id(),
            username: derive_username(identity),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Local part of the email, or the first 8 characters of the user id.
pub fn derive_username(identity: &Identity) -> String {
    identity
        .email
        .as_deref()
        .and_then(|email| email.split('@').next())
        .filter(|local| !local.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| identity.id().to_string().chars().take(8).collect())
}
