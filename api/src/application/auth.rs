use axum::{
    Json, RequestPartsExt,
    extract::{FromRef, FromRequestParts, Request, State},
    http::{StatusCode, request::Parts},
    middleware::Next,
    response::{IntoResponse, Response},
};
use axum_extra::{
    TypedHeader,
    headers::{Authorization, authorization::Bearer},
};
use larder_core::domain::{
    authentication::{
        ports::AuthService,
        value_objects::{AuthorizeRequestInput, Identity},
    },
    common::entities::app_errors::CoreError,
};
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::warn;

use super::http::server::app_state::AppState;

#[derive(Debug, Clone, Copy, Error, Deserialize, Serialize, PartialEq, Eq)]
pub enum AuthError {
    #[error("Invalid token")]
    InvalidToken,
    #[error("Token expired")]
    TokenExpired,
    #[error("Token not found")]
    TokenNotFound,
}

#[derive(Serialize, Deserialize)]
struct ErrorResponse {
    code: String,
    message: String,
    status: u16,
}

impl IntoResponse for AuthError {
    fn into_response(self) -> Response {
        let status = StatusCode::UNAUTHORIZED;
        let body = ErrorResponse {
            code: "E_UNAUTHORIZED".to_string(),
            message: self.to_string(),
            status: status.as_u16(),
        };

        (status, Json(body)).into_response()
    }
}

pub async fn extract_token_from_bearer(parts: &mut Parts) -> Result<String, AuthError> {
    let TypedHeader(Authorization(bearer)) = parts
        .extract::<TypedHeader<Authorization<Bearer>>>()
        .await
        .map_err(|_| AuthError::TokenNotFound)?;

    Ok(bearer.token().to_string())
}

/// Verifies the bearer token, when one is sent, and stores the resulting
/// [`Identity`] in the request extensions. A rejected token is remembered as
/// an [`AuthError`] so extractors can report why.
pub async fn auth(State(state): State<AppState>, req: Request, next: Next) -> Response {
    let (mut parts, body) = req.into_parts();

    if let Ok(token) = extract_token_from_bearer(&mut parts).await {
        match state
            .service
            .authorize_request(AuthorizeRequestInput { token })
            .await
        {
            Ok(output) => {
                parts.extensions.insert(output.identity);
            }
            Err(e) => {
                warn!("Rejected bearer token: {}", e);
                let error = match e {
                    CoreError::TokenExpired => AuthError::TokenExpired,
                    _ => AuthError::InvalidToken,
                };
                parts.extensions.insert(error);
            }
        }
    }

    next.run(Request::from_parts(parts, body)).await
}

/// Identity of the caller; rejects the request with 401 when there is none.
pub struct RequiredIdentity(pub Identity);

impl<S> FromRequestParts<S> for RequiredIdentity
where
    S: Send + Sync,
    AppState: FromRef<S>,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        if let Some(identity) = parts.extensions.get::<Identity>().cloned() {
            return Ok(RequiredIdentity(identity));
        }

        Err(parts
            .extensions
            .get::<AuthError>()
            .copied()
            .unwrap_or(AuthError::TokenNotFound))
    }
}

/// Identity of the caller when a valid token was sent. Anonymous callers
/// and callers with a rejected token both get `None`.
pub struct OptionalIdentity(pub Option<Identity>);

impl<S> FromRequestParts<S> for OptionalIdentity
where
    S: Send + Sync,
{
    type Rejection = AuthError;

    async fn from_request_parts(parts: &mut Parts, _: &S) -> Result<Self, Self::Rejection> {
        Ok(OptionalIdentity(parts.extensions.get::<Identity>().cloned()))
    }
}
