//! Bearer-token authorization middleware

use crate::{error::AppError, middleware::AppState};
use axum::{
    extract::{FromRequestParts, Request, State},
    http::HeaderMap,
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

/// Caller identity attached to request extensions after authorization.
#[derive(Debug, Clone, Copy)]
pub struct AuthContext {
    pub user_id: i64,
}

impl<S> FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .copied()
            .ok_or(AppError::TokenInvalid(crate::auth::token::TokenError::Malformed))
    }
}

/// Extract the bearer token from the Authorization header.
pub fn extract_token(headers: &HeaderMap) -> Result<String, AppError> {
    headers
        .get("authorization")
        .and_then(|v| v.to_str().ok())
        .and_then(|s| s.strip_prefix("Bearer "))
        .filter(|token| !token.is_empty())
        .map(|token| token.to_string())
        .ok_or(AppError::TokenInvalid(
            crate::auth::token::TokenError::Malformed,
        ))
}

/// Require a valid access token; attaches [`AuthContext`] on success.
pub async fn require_auth(
    State(state): State<Arc<AppState>>,
    mut req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let token = extract_token(req.headers())?;

    let user_id = state.session_service.parse_token(&token).map_err(|err| {
        tracing::debug!(error = %err, "Rejected access token");
        err
    })?;

    req.extensions_mut().insert(AuthContext { user_id });

    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_token_valid() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer token-123".parse().unwrap());

        assert_eq!(extract_token(&headers).unwrap(), "token-123");
    }

    #[test]
    fn extract_token_missing_header() {
        let headers = HeaderMap::new();
        assert!(extract_token(&headers).is_err());
    }

    #[test]
    fn extract_token_wrong_scheme() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Basic dXNlcjpwYXNz".parse().unwrap());

        assert!(extract_token(&headers).is_err());
    }

    #[test]
    fn extract_token_empty_token() {
        let mut headers = HeaderMap::new();
        headers.insert("authorization", "Bearer ".parse().unwrap());

        assert!(extract_token(&headers).is_err());
    }
}
