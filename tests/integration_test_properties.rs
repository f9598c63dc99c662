mod common;

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
};
use common::TestApp;
use serde_json::Value;
use tower::ServiceExt;

async fn parse_body(response: axum::response::Response) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn list_properties(app: &TestApp, token: &str) -> Value {
    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/properties")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(res.status(), StatusCode::OK);
    parse_body(res).await
}

#[tokio::test]
async fn list_returns_seeded_properties_with_owner_names() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let list = list_properties(&app, &token).await;
    let properties = list.as_array().unwrap();
    assert_eq!(properties.len(), 3);
    for p in properties {
        assert_eq!(p["owner_name"], "John Owner");
    }
    // newest first
    assert_eq!(properties[0]["name"], "Modern Studio Loft");
}

#[tokio::test]
async fn create_form_renders_for_staff() {
    let app = TestApp::new().await;
    let token = app.login("manager@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/properties/create")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
}

#[tokio::test]
async fn create_property_then_redirects_to_list() {
    let app = TestApp::new().await;
    let token = app.login("manager@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/properties")
                .header(header::COOKIE, format!("token={}", token))
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from(
                    "name=Test+Villa&address=12+Hill+Rd&type=villa&bedrooms=4&bathrooms=3&max_guests=8&price_per_night=310.50",
                ))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::SEE_OTHER);
    assert_eq!(res.headers().get(header::LOCATION).unwrap(), "/properties");

    let list = list_properties(&app, &token).await;
    let properties = list.as_array().unwrap();
    assert_eq!(properties.len(), 4);
    assert_eq!(properties[0]["name"], "Test Villa");
    assert_eq!(properties[0]["price_per_night"], 310.5);
    // owner defaults to the authenticated user (manager, id 2)
    assert_eq!(properties[0]["owner_id"], 2);
}

#[tokio::test]
async fn create_with_missing_fields_is_rejected_and_inserts_nothing() {
    let app = TestApp::new().await;
    let token = app.login("manager@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .method("POST")
                .uri("/properties")
                .header(header::COOKIE, format!("token={}", token))
                .header(header::CONTENT_TYPE, "application/x-www-form-urlencoded")
                .body(Body::from("name=Just+A+Name"))
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::BAD_REQUEST);
    let body = parse_body(res).await;
    let msg = body["error"].as_str().unwrap();
    assert!(msg.contains("address"));
    assert!(msg.contains("type"));
    assert!(msg.contains("price_per_night"));

    let list = list_properties(&app, &token).await;
    assert_eq!(list.as_array().unwrap().len(), 3);
}

#[tokio::test]
async fn detail_composes_property_and_its_bookings() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/properties/1")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::OK);
    let body = parse_body(res).await;
    assert_eq!(body["property"]["name"], "Luxury Downtown Apartment");
    let bookings = body["bookings"].as_array().unwrap();
    assert_eq!(bookings.len(), 1);
    assert_eq!(bookings[0]["guest_name"], "Alice Johnson");
}

#[tokio::test]
async fn unknown_property_is_404() {
    let app = TestApp::new().await;
    let token = app.login("admin@example.com", "password").await;

    let res = app
        .router
        .clone()
        .oneshot(
            Request::builder()
                .uri("/properties/999")
                .header(header::COOKIE, format!("token={}", token))
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(res.status(), StatusCode::NOT_FOUND);
}
