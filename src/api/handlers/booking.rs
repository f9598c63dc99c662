use crate::api::dtos::requests::UpdateStatusRequest;
use crate::api::dtos::responses::BookingDetailResponse;
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
    let bookings = state.booking_repo.list().await?;
    Ok(Json(bookings))
}

/// Booking detail plus its message thread and task list, loaded in sequence.
pub async fn show(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let booking = state
        .booking_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Booking not found".into()))?;

    let messages = state.message_repo.list_by_booking(id).await?;
    let tasks = state.task_repo.list_by_booking(id).await?;

    Ok(Json(BookingDetailResponse {
        booking,
        messages,
        tasks,
    }))
}

pub async fn update_status(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateStatusRequest>,
) -> Result<impl IntoResponse, AppError> {
    let status = payload.status()?;
    state.booking_repo.update_status(id, &status).await?;

    info!("Booking {} status set to {}", id, status);

    Ok(Json(json!({ "success": true })))
}
