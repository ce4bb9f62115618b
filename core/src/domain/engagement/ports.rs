use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity,
    common::entities::app_errors::CoreError,
    engagement::entities::{EngagementKind, ToggleOutcome},
};

#[cfg_attr(test, mockall::automock)]
pub trait EngagementRepository: Send + Sync {
    /// Removes the (recipe, user) pair if present, inserts it otherwise.
    fn toggle(
        &self,
        kind: EngagementKind,
        recipe_id: Uuid,
        user_id: Uuid,
    ) -> impl Future<Output = Result<ToggleOutcome, CoreError>> + Send;
}

pub trait EngagementService: Send + Sync {
    fn toggle_like(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ToggleOutcome, CoreError>> + Send;

    fn toggle_save(
        &self,
        identity: Identity,
        recipe_id: Uuid,
    ) -> impl Future<Output = Result<ToggleOutcome, CoreError>> + Send;
}
