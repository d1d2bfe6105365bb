use axum::{extract::FromRequestParts, http::request::Parts};

use crate::config::Config;
use crate::error::AppError;

/// Proof that the request carried the configured bearer token.
/// Use as an extractor in route handlers that require auth.
///
/// There are no user accounts behind this: the token is a single shared
/// secret from the environment, so the extractor carries no identity.
#[derive(Debug, Clone, Copy)]
pub struct ApiToken;

impl<S> FromRequestParts<S> for ApiToken
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let config = parts
            .extensions
            .get::<Config>()
            .ok_or(AppError::Internal("Missing config".into()))?;

        let auth_header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok())
            .ok_or(AppError::Unauthorized(
                "Missing authentication token".into(),
            ))?;

        // Expect exactly two whitespace-separated words: scheme and token.
        let mut words = auth_header.split_whitespace();
        let (scheme, token) = match (words.next(), words.next(), words.next()) {
            (Some(scheme), Some(token), None) => (scheme, token),
            _ => return Err(AppError::Unauthorized("Invalid token format".into())),
        };

        if !scheme.eq_ignore_ascii_case("bearer") {
            return Err(AppError::Unauthorized(
                "Invalid token type. Expected 'Bearer'".into(),
            ));
        }

        if token != config.auth_token {
            return Err(AppError::Unauthorized("Invalid token".into()));
        }

        Ok(ApiToken)
    }
}
