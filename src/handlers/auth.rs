//! Authentication endpoints

use crate::{
    error::AppError,
    middleware::AppState,
    models::{
        session::RefreshTokenRequest,
        user::{SignInRequest, SignUpRequest},
    },
};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use std::sync::Arc;

/// POST /auth/sign-up
pub async fn sign_up(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignUpRequest>,
) -> Result<impl IntoResponse, AppError> {
    state.session_service.sign_up(req).await?;

    Ok(StatusCode::CREATED)
}

/// POST /auth/sign-in
pub async fn sign_in(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SignInRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = state.session_service.sign_in(req).await?;

    Ok(Json(tokens))
}

/// POST /auth/refresh
pub async fn refresh(
    State(state): State<Arc<AppState>>,
    Json(req): Json<RefreshTokenRequest>,
) -> Result<impl IntoResponse, AppError> {
    let tokens = state
        .session_service
        .refresh_tokens(&req.refresh_token)
        .await?;

    Ok(Json(tokens))
}
