//! Employee record endpoints

use crate::{
    error::AppError,
    middleware::AppState,
    models::employee::{CreateEmployeeRequest, UpdateEmployeeRequest},
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use std::sync::Arc;

/// POST /employees
pub async fn create_employee(
    State(state): State<Arc<AppState>>,
    Json(req): Json<CreateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state.employee_service.create(req).await?;

    Ok((StatusCode::CREATED, Json(employee)))
}

/// GET /employees
pub async fn list_employees(
    State(state): State<Arc<AppState>>,
) -> Result<impl IntoResponse, AppError> {
    let employees = state.employee_service.list().await?;

    Ok(Json(employees))
}

/// GET /employees/{id}
pub async fn get_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state.employee_service.get_by_id(id).await?;

    Ok(Json(employee))
}

/// PUT /employees/{id}
pub async fn update_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
    Json(req): Json<UpdateEmployeeRequest>,
) -> Result<impl IntoResponse, AppError> {
    let employee = state.employee_service.update(id, req).await?;

    Ok(Json(employee))
}

/// DELETE /employees/{id}
pub async fn delete_employee(
    State(state): State<Arc<AppState>>,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state.employee_service.delete(id).await?;

    Ok(StatusCode::NO_CONTENT)
}
