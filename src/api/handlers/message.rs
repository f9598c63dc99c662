use crate::api::dtos::requests::CreateMessageRequest;
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
    let messages = state.message_repo.list().await?;
    Ok(Json(messages))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Json(payload): Json<CreateMessageRequest>,
) -> Result<impl IntoResponse, AppError> {
    // The credential only carries id/email; resolve the display name
    let sender_name = state
        .user_repo
        .find_by_id(user.id)
        .await?
        .map(|u| u.name)
        .unwrap_or_else(|| "Staff".to_string());

    let message = payload.into_new(sender_name, user.email)?;

    // A message may stand alone, but a referenced booking must exist
    if let Some(booking_id) = message.booking_id {
        state
            .booking_repo
            .find_by_id(booking_id)
            .await?
            .ok_or(AppError::NotFound("Booking not found".into()))?;
    }

    let id = state.message_repo.create(&message).await?;

    info!("Message {} sent", id);

    Ok(Json(json!({ "success": true, "messageId": id })))
}

pub async fn mark_read(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    state
        .message_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Message not found".into()))?;

    state.message_repo.mark_read(id).await?;

    Ok(Json(json!({ "success": true })))
}
