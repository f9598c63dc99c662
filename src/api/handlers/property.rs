use crate::api::dtos::requests::CreatePropertyRequest;
use crate::api::dtos::responses::PropertyDetailResponse;
use crate::api::extractors::auth::AuthUser;
use crate::error::AppError;
use crate::state::AppState;
use axum::{
    extract::{Path, State},
    response::{Html, IntoResponse, Redirect},
    Form, Json,
};
use std::sync::Arc;
use tracing::info;

pub async fn list(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let properties = state.property_repo.list().await?;
    Ok(Json(properties))
}

pub async fn create_form(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
) -> Result<impl IntoResponse, AppError> {
    let mut ctx = tera::Context::new();
    ctx.insert("errors", &Option::<Vec<String>>::None);
    let html = state
        .templates
        .render("property_form.html", &ctx)
        .map_err(|_| AppError::Internal)?;
    Ok(Html(html))
}

pub async fn create(
    State(state): State<Arc<AppState>>,
    AuthUser(user): AuthUser,
    Form(payload): Form<CreatePropertyRequest>,
) -> Result<impl IntoResponse, AppError> {
    let property = payload.into_new(user.id)?;
    let id = state.property_repo.create(&property).await?;

    info!("Created property {}", id);

    Ok(Redirect::to("/properties"))
}

/// Property detail composed with its bookings, newest check-in first.
pub async fn show(
    State(state): State<Arc<AppState>>,
    _user: AuthUser,
    Path(id): Path<i64>,
) -> Result<impl IntoResponse, AppError> {
    let property = state
        .property_repo
        .find_by_id(id)
        .await?
        .ok_or(AppError::NotFound("Property not found".into()))?;

    let bookings = state.booking_repo.list_by_property(id).await?;

    Ok(Json(PropertyDetailResponse { property, bookings }))
}
