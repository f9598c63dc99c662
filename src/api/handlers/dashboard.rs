use crate::api::dtos::responses::{DashboardResponse, DashboardStats};
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{extract::State, response::IntoResponse, Json};
use std::sync::Arc;

/// Seven independent aggregate reads, fanned out concurrently and joined.
/// If any one fails the whole dashboard fails; there is no partial render.
pub async fn show(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let (
        total_properties,
        active_bookings,
        unread_messages,
        pending_tasks,
        total_revenue,
        recent_bookings,
        pending_task_list,
    ) = tokio::try_join!(
        state.property_repo.count(),
        state.booking_repo.count_by_status("confirmed"),
        state.message_repo.count_unread(),
        state.task_repo.count_pending(),
        state.booking_repo.revenue_total(),
        state.booking_repo.recent(5),
        state.task_repo.pending_soonest(5),
    )
    .map_err(|e| AppError::Aggregation(e.to_string()))?;

    Ok(Json(DashboardResponse {
        user,
        stats: DashboardStats {
            total_properties,
            active_bookings,
            unread_messages,
            pending_tasks,
            total_revenue,
        },
        recent_bookings,
        pending_tasks: pending_task_list,
    }))
}
