//! Integration tests for the unauthenticated root endpoints.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_welcome_message() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["msg"], "Welcome to UserHub");
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = helpers::TestApp::new().await;

    let response = app.request("GET", "/health", None, None).await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["data"]["status"], "ok");
    assert!(response.body["data"]["version"].as_str().is_some());
}
