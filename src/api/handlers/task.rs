use crate::api::dtos::requests::{CreateTaskRequest, UpdateStatusRequest};
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::IntoResponse,
    Json,
};
use serde_json::json;
use std::sync::Arc;
use tracing::info;

pub async fn list(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let tasks = state.task_repo.list().await?;
    Ok(Json(tasks))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateTaskRequest>,
) -> Result<impl IntoResponse, AppError> {
    let task = payload.into_new(user.id)?;

    if let Some(property_id) = task.property_id {
        state
            .property_repo
            .find_by_id(property_id)
            .await?
            .ok_or(AppError::NotFound("Property not found".into()))?;
    }
    if let Some(booking_id) = task.booking_id {
        state
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(AppError::NotFound("Booking not found".into()))?;
    }

    let id = state.task_repo.create(&task).await?;

    info!("Created task {}", id);

    Ok(Json(json!({ "success": true, "taskId": id })))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload.status()?;

    state
        .task_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Task not found".into()))?;

    state.task_repo.update_status(id, &status).await?;

    info!("Task {} status set to {}", id, status);

    Ok(Json(json!({ "success": true })))
}
