mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use chrono::{DateTime, Utc};
use common::TestApp;
use serde_json::{json, Value};
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn get_booking(app: &TestApp, token: &str, id: i64) -> axum::response::Response {
    app.router
        .clone()
        .oneshot(
            Request::builder()
                .uri(format!("/bookings/{}", id))
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap()
}

#[tokio::test]
async fn list_orders_by_check_in_descending() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/bookings")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let bookings = parse_body(res).await;
    let bookings = bookings.as_array().unwrap();
    assert_eq!(bookings.len(), 3);
    assert_eq!(bookings[0]["guest_name"], "Bob Smith"); // 2024-02-20
    assert_eq!(bookings[1]["guest_name"], "Alice Johnson"); // 2024-02-15
    assert_eq!(bookings[2]["guest_name"], "Carol Davis"); // 2024-02-10
    assert_eq!(bookings[0]["property_name"], "Cozy Beach House");
}

#[tokio::test]
async fn detail_composes_messages_and_tasks() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = get_booking(&app, &token, 1).await;
    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;

    assert_eq!(body["booking"]["guest_name"], "Alice Johnson");
    assert_eq!(body["booking"]["property_name"], "Luxury Downtown Apartment");
    assert_eq!(body["booking"]["property_address"], "123 Main St, Downtown");
    assert!(body["messages"].as_array().unwrap().is_empty());

    let tasks = body["tasks"].as_array().unwrap();
    assert_eq!(tasks.len(), 1);
    assert_eq!(tasks[0]["title"], "Pre-arrival cleaning");
}

#[tokio::test]
async fn unknown_booking_is_404() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = get_booking(&app, &token, 999).await;
    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn status_update_is_visible_and_bumps_updated_at() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bookings/1/status")
                .header(header::COOKIE, format!("token={}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "completed" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    assert_eq!(parse_body(res).await["success"], true);

    let res = get_booking(&app, &token, 1).await;
    let body = parse_body(res).await;
    assert_eq!(body["booking"]["status"], "completed");

    let created: DateTime<Utc> = body["booking"]["created_at"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    let updated: DateTime<Utc> = body["booking"]["updated_at"]
        .as_str()
        .unwrap()
        .parse()
        .unwrap();
    assert!(updated > created);
}

#[tokio::test]
async fn status_update_accepts_any_status_string() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bookings/2/status")
                .header(header::COOKIE, format!("token={}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "no-show" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);

    let res = get_booking(&app, &token, 2).await;
    assert_eq!(parse_body(res).await["booking"]["status"], "no-show");
}

#[tokio::test]
async fn status_update_on_missing_booking_is_404_and_leaves_store_unchanged() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bookings/999/status")
                .header(header::COOKIE, format!("token={}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from(json!({ "status": "completed" }).to_string()))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);

    // existing rows keep their seeded statuses
    let res = get_booking(&app, &token, 1).await;
    assert_eq!(parse_body(res).await["booking"]["status"], "confirmed");
}

#[tokio::test]
async fn status_update_without_status_field_is_rejected() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/bookings/1/status")
                .header(header::COOKIE, format!("token={}", token))
                .header(header::CONTENT_TYPE, "application/json")
                .body(Body::from("{}"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
}
