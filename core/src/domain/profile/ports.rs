use std::future::Future;
use uuid::Uuid;

use crate::domain::{
    authentication::value_objects::Identity, common::entities::app_errors::CoreError,
    profile::entities::Profile,
};

#[cfg_attr(test, mockall::automock)]
pub trait ProfileRepository: Send + Sync {
    /// Inserts the profile, or refreshes the username of an existing one.
    fn upsert(&self, profile: Profile) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn get_by_id(
        &self,
        user_id: Uuid,
    ) -> impl Future<Output = Result<Option<Profile>, CoreError>> + Send;
}

pub trait ProfileService: Send + Sync {
    fn ensure_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;

    fn get_profile(
        &self,
        identity: Identity,
    ) -> impl Future<Output = Result<Profile, CoreError>> + Send;
}
