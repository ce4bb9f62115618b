use uuid::Uuid;

use crate::domain::{authentication::value_objects::Identity, common::entities::app_errors::CoreError};

pub fn ensure_policy(
    result_has_permission: Result<bool, CoreError>,
    error_message: &str,
) -> Result<(), CoreError> {
    result_has_permission
        .map_err(|_| CoreError::Forbidden(error_message.to_string()))?
        .then_some(())
        .ok_or_else(|| CoreError::Forbidden(error_message.to_string()))
}

/// True when the identity owns the resource held by `owner_id`.
pub fn is_owner(identity: &Identity, owner_id: Uuid) -> bool {
    identity.id() == owner_id
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ensure_policy_passes_when_allowed() {
        assert!(ensure_policy(Ok(true), "nope").is_ok());
    }

    #[test]
    fn ensure_policy_rejects_denials_and_errors() {
        assert_eq!(
            ensure_policy(Ok(false), "not your plan"),
            Err(CoreError::Forbidden("not your plan".to_string()))
        );
        assert_eq!(
            ensure_policy(Err(CoreError::InternalServerError), "not your plan"),
            Err(CoreError::Forbidden("not your plan".to_string()))
        );
    }
}
