//! Integration tests for the authentication flow.

mod helpers;

use axum::http::StatusCode;

#[tokio::test]
async fn test_authenticate_success() {
    let app = helpers::TestApp::new().await;
    app.register("johndoe", "password123").await;

    let response = app.authenticate("johndoe", "password123").await;

    assert_eq!(response.status, StatusCode::OK);
    assert_eq!(response.body["success"], true);
    assert_eq!(response.body["data"]["token_type"], "bearer");
    let token = response.body["data"]["access_token"].as_str().unwrap();
    assert!(!token.is_empty());
}

#[tokio::test]
async fn test_authenticate_wrong_password() {
    let app = helpers::TestApp::new().await;
    app.register("johndoe", "password123").await;

    let response = app.authenticate("johndoe", "wrongpassword").await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_authenticate_unknown_username() {
    let app = helpers::TestApp::new().await;

    let response = app.authenticate("nobody", "password123").await;

    // Same status and message as a wrong password, so the response does not
    // reveal whether the account exists.
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Incorrect username or password");
}

#[tokio::test]
async fn test_missing_authorization_header() {
    let app = helpers::TestApp::new().await;
    app.register("johndoe", "password123").await;

    let response = app.request("GET", "/users/1", None, None).await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["error"], "UNAUTHORIZED");
    assert_eq!(response.body["message"], "Not authenticated");
}

#[tokio::test]
async fn test_malformed_authorization_header() {
    let app = helpers::TestApp::new().await;
    app.register("johndoe", "password123").await;

    let response = app
        .request_with_auth_header("GET", "/users/1", "Token abcdef")
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Not authenticated");
}

#[tokio::test]
async fn test_garbage_bearer_token() {
    let app = helpers::TestApp::new().await;
    app.register("johndoe", "password123").await;

    let response = app
        .request("GET", "/users/1", None, Some("not-a-real-token"))
        .await;

    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Could not validate credentials");
}

#[tokio::test]
async fn test_token_for_deleted_user_is_rejected() {
    let app = helpers::TestApp::new().await;
    let register = app.register("johndoe", "password123").await;
    let user_id = register.body["data"]["id"].as_i64().unwrap();
    let token = app.login("johndoe", "password123").await;

    let response = app
        .request("DELETE", &format!("/users/{user_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::OK);

    // The token is still well-formed, but its subject no longer exists.
    let response = app
        .request("GET", &format!("/users/{user_id}"), None, Some(&token))
        .await;
    assert_eq!(response.status, StatusCode::UNAUTHORIZED);
    assert_eq!(response.body["message"], "Could not validate credentials");
}
