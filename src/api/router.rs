use crate::api::handlers::{auth, booking, dashboard, message, property, task};
use crate::state::AppState;
use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    response::{IntoResponse, Redirect},
    routing::{get, post},
    Json, Router,
};
use serde_json::json;
use std::sync::Arc;
use std::time::Duration;
use tower_cookies::CookieManagerLayer;
use tower_http::{classify::ServerErrorsFailureClass, trace::TraceLayer};
use tracing::{error, info, info_span, Span};
use uuid::Uuid;

pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(|| async { Redirect::to("/dashboard") }))

        // Auth
        .route("/auth/login", get(auth::login_form).post(auth::login))
        .route("/auth/logout", post(auth::logout))

        // Dashboard
        .route("/dashboard", get(dashboard::show))

        // Properties
        .route("/properties", get(property::list).post(property::create))
        .route("/properties/create", get(property::create_form))
        .route("/properties/{id}", get(property::show))

        // Bookings
        .route("/bookings", get(booking::list))
        .route("/bookings/{id}", get(booking::show))
        .route("/bookings/{id}/status", post(booking::update_status))

        // Messages
        .route("/messages", get(message::list).post(message::create))
        .route("/messages/{id}/read", post(message::mark_read))

        // Tasks
        .route("/tasks", get(task::list).post(task::create))
        .route("/tasks/{id}/status", post(task::update_status))

        .fallback(route_not_found)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &Request<Body>| {
                    let request_id = Uuid::new_v4().to_string();
                    info_span!(
                        "http_request",
                        request_id = %request_id,
                        method = ?request.method(),
                        uri = ?request.uri(),
                        version = ?request.version(),
                    )
                })
                .on_request(|request: &Request<Body>, _span: &Span| {
                    info!(
                        "started processing request: {} {}",
                        request.method(),
                        request.uri().path()
                    );
                })
                .on_response(
                    |response: &axum::http::Response<Body>, latency: Duration, _span: &Span| {
                        info!(
                            status = response.status().as_u16(),
                            latency_ms = latency.as_millis(),
                            "finished processing request"
                        );
                    },
                )
                .on_failure(
                    |error: ServerErrorsFailureClass, _latency: Duration, _span: &Span| {
                        error!("request failed: {:?}", error);
                    },
                ),
        )
        .layer(CookieManagerLayer::new())
        .with_state(state)
}

async fn route_not_found() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Route not found" })),
    )
}
