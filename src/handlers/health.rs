//! Health and readiness endpoints

use crate::{db, middleware::AppState};
use axum::{extract::State, http::StatusCode, response::IntoResponse, Json};
use serde::Serialize;
use std::sync::{Arc, OnceLock};
use std::time::Instant;

static START_TIME: OnceLock<Instant> = OnceLock::new();

/// Record the process start time; called once from main.
pub fn set_start_time() {
    let _ = START_TIME.set(Instant::now());
}

fn uptime_secs() -> u64 {
    START_TIME.get().map_or(0, |start| start.elapsed().as_secs())
}

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub uptime_secs: u64,
}

#[derive(Serialize)]
pub struct ReadinessResponse {
    pub ready: bool,
    pub checks: Vec<HealthCheck>,
}

#[derive(Serialize)]
pub struct HealthCheck {
    pub name: String,
    pub status: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

/// Liveness probe; fast, no dependency checks.
pub async fn health_check() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        uptime_secs: uptime_secs(),
    })
}

/// Readiness probe; checks database connectivity.
pub async fn readiness_check(State(state): State<Arc<AppState>>) -> impl IntoResponse {
    let db_check = match db::health_check(&state.db).await {
        Ok(()) => HealthCheck {
            name: "database".to_string(),
            status: "ok".to_string(),
            message: None,
        },
        Err(e) => HealthCheck {
            name: "database".to_string(),
            status: "failed".to_string(),
            message: Some(e.to_string()),
        },
    };

    let ready = db_check.status == "ok";
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    (
        status,
        Json(ReadinessResponse {
            ready,
            checks: vec![db_check],
        }),
    )
}
