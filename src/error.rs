//! Unified error model
//! Every failure a request can surface maps to one of these kinds, and each
//! kind maps to an HTTP status and a non-leaking user message.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Json, Response},
};
use serde::Serialize;
use thiserror::Error;

use crate::auth::token::TokenError;

/// Application error type
#[derive(Debug, Error)]
pub enum AppError {
    #[error("validation failed: {0}")]
    Validation(String),

    #[error("invalid credentials")]
    InvalidCredentials,

    #[error("email already registered")]
    DuplicateEmail,

    #[error("refresh session not found")]
    SessionNotFound,

    #[error("refresh token expired")]
    RefreshTokenExpired,

    #[error("invalid access token: {0}")]
    TokenInvalid(#[from] TokenError),

    #[error("employee not found")]
    EmployeeNotFound,

    #[error("password hashing failed: {0}")]
    Hashing(String),

    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("configuration error: {0}")]
    Config(String),

    #[error("internal server error")]
    Internal,
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::InvalidCredentials
            | AppError::SessionNotFound
            | AppError::RefreshTokenExpired
            | AppError::TokenInvalid(_) => StatusCode::UNAUTHORIZED,
            AppError::DuplicateEmail => StatusCode::CONFLICT,
            AppError::EmployeeNotFound => StatusCode::NOT_FOUND,
            AppError::Hashing(_)
            | AppError::Database(_)
            | AppError::Config(_)
            | AppError::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// User-facing message; never exposes internals.
    pub fn user_message(&self) -> String {
        match self {
            AppError::Validation(msg) => msg.clone(),
            AppError::InvalidCredentials => "Invalid email or password".to_string(),
            AppError::DuplicateEmail => "Email is already registered".to_string(),
            AppError::SessionNotFound => "Refresh session not found".to_string(),
            AppError::RefreshTokenExpired => {
                "Refresh token expired, sign in again".to_string()
            }
            AppError::TokenInvalid(_) => "Invalid access token".to_string(),
            AppError::EmployeeNotFound => "Employee not found".to_string(),
            AppError::Hashing(_) | AppError::Database(_) | AppError::Config(_)
            | AppError::Internal => "Internal server error".to_string(),
        }
    }

    pub fn code(&self) -> u16 {
        self.status_code().as_u16()
    }
}

/// Error response DTO
#[derive(Serialize)]
pub struct ErrorResponse {
    pub error: ErrorDetail,
}

#[derive(Serialize)]
pub struct ErrorDetail {
    pub code: u16,
    pub message: String,
    pub request_id: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let request_id = uuid::Uuid::new_v4().to_string();

        let error_response = ErrorResponse {
            error: ErrorDetail {
                code: self.code(),
                message: self.user_message(),
                request_id,
            },
        };

        if status.is_server_error() {
            tracing::error!(
                code = self.code(),
                error = %self,
                request_id = %error_response.error.request_id,
                "Request failed"
            );
        } else {
            tracing::debug!(
                code = self.code(),
                error = %self,
                request_id = %error_response.error.request_id,
                "Request rejected"
            );
        }

        (status, Json(error_response)).into_response()
    }
}

impl From<config::ConfigError> for AppError {
    fn from(e: config::ConfigError) -> Self {
        AppError::Config(e.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(e: validator::ValidationErrors) -> Self {
        AppError::Validation(e.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn error_codes() {
        assert_eq!(AppError::Validation("bad".to_string()).code(), 400);
        assert_eq!(AppError::InvalidCredentials.code(), 401);
        assert_eq!(AppError::DuplicateEmail.code(), 409);
        assert_eq!(AppError::SessionNotFound.code(), 401);
        assert_eq!(AppError::RefreshTokenExpired.code(), 401);
        assert_eq!(AppError::EmployeeNotFound.code(), 404);
        assert_eq!(AppError::Internal.code(), 500);
    }

    #[test]
    fn user_message_hides_database_detail() {
        let error = AppError::Database(sqlx::Error::RowNotFound);
        let message = error.user_message();
        assert_eq!(message, "Internal server error");
        assert!(!message.contains("sqlx"));
    }

    #[test]
    fn refresh_expiry_is_distinguishable_from_missing_session() {
        assert_ne!(
            AppError::RefreshTokenExpired.user_message(),
            AppError::SessionNotFound.user_message()
        );
    }
}
