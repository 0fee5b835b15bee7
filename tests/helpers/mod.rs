//! Shared harness for the integration tests.
//!
//! Each test builds its own [`TestApp`] backed by an in-memory SQLite
//! database, so tests are isolated and need no external services.

#![allow(dead_code)]

use std::sync::Arc;

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::Value;
use tower::ServiceExt;

use userhub_api::router::build_router;
use userhub_api::state::AppState;
use userhub_auth::guard::IdentityGuard;
use userhub_auth::password::PasswordHasher;
use userhub_auth::token::{TokenDecoder, TokenEncoder};
use userhub_core::config::AppConfig;
use userhub_database::repositories::{ActionRepository, UserRepository};
use userhub_service::account::AccountService;
use userhub_service::audit::AuditService;
use userhub_service::histogram::HistogramService;

pub struct TestApp {
    pub router: Router,
    pub db_pool: sqlx::SqlitePool,
    pub action_repo: Arc<ActionRepository>,
    pub account_service: Arc<AccountService>,
}

pub struct TestResponse {
    pub status: StatusCode,
    pub body: Value,
}

impl TestApp {
    pub async fn new() -> Self {
        let config = AppConfig::load("tests/fixtures/test_config.toml")
            .expect("Failed to load test config");

        let db_pool = userhub_database::connection::create_pool(&config.database)
            .await
            .expect("Failed to connect to test database");
        userhub_database::migration::run_migrations(&db_pool)
            .await
            .expect("Failed to run migrations");

        let user_repo = Arc::new(UserRepository::new(db_pool.clone()));
        let action_repo = Arc::new(ActionRepository::new(db_pool.clone()));

        let password_hasher = Arc::new(PasswordHasher::new());
        let token_encoder = Arc::new(TokenEncoder::new(&config.auth));
        let token_decoder = Arc::new(TokenDecoder::new(&config.auth));
        let guard = Arc::new(IdentityGuard::new(token_decoder, Arc::clone(&user_repo)));

        let audit_service = Arc::new(AuditService::new(Arc::clone(&action_repo)));
        let account_service = Arc::new(AccountService::new(
            user_repo,
            password_hasher,
            token_encoder,
            Arc::clone(&audit_service),
        ));
        let histogram_service = Arc::new(HistogramService::new(Arc::clone(&action_repo)));

        let router = build_router(AppState {
            guard,
            account_service: Arc::clone(&account_service),
            audit_service,
            histogram_service,
        });

        Self {
            router,
            db_pool,
            action_repo,
            account_service,
        }
    }

    /// Sends a JSON request, attaching `Authorization: Bearer <token>` when
    /// a token is given, and decodes the response body as JSON.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let body_str = body.map(|b| b.to_string()).unwrap_or_default();

        let mut builder = Request::builder()
            .method(method)
            .uri(path)
            .header("Content-Type", "application/json");
        if let Some(token) = token {
            builder = builder.header("Authorization", format!("Bearer {token}"));
        }

        let request = builder
            .body(Body::from(body_str))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Sends a request with a verbatim `Authorization` header value, for
    /// exercising malformed credentials.
    pub async fn request_with_auth_header(
        &self,
        method: &str,
        path: &str,
        auth_header: &str,
    ) -> TestResponse {
        let request = Request::builder()
            .method(method)
            .uri(path)
            .header("Authorization", auth_header)
            .body(Body::empty())
            .expect("Failed to build request");
        self.send(request).await
    }

    /// POSTs a new account to `/users/`.
    pub async fn register(&self, username: &str, password: &str) -> TestResponse {
        let body = serde_json::json!({ "username": username, "password": password });
        self.request("POST", "/users/", Some(body), None).await
    }

    /// Submits the login form to `/authenticate` and returns the raw response.
    pub async fn authenticate(&self, username: &str, password: &str) -> TestResponse {
        let form = format!("username={username}&password={password}");
        let request = Request::builder()
            .method("POST")
            .uri("/authenticate")
            .header("Content-Type", "application/x-www-form-urlencoded")
            .body(Body::from(form))
            .expect("Failed to build request");
        self.send(request).await
    }

    /// Logs in and returns the bearer token, panicking on failure.
    pub async fn login(&self, username: &str, password: &str) -> String {
        let response = self.authenticate(username, password).await;
        assert_eq!(
            response.status,
            StatusCode::OK,
            "Login failed: {:?}",
            response.body
        );
        response.body["data"]["access_token"]
            .as_str()
            .expect("No access token in login response")
            .to_string()
    }

    /// Inserts a ledger entry directly, bypassing the HTTP surface, so tests
    /// can plant actions with arbitrary timestamps.
    pub async fn seed_action(&self, owner_id: i64, title: &str, timestamp: &str) {
        self.action_repo
            .create(owner_id, title, timestamp)
            .await
            .expect("Failed to seed action");
    }

    async fn send(&self, request: Request<Body>) -> TestResponse {
        let response = self
            .router
            .clone()
            .oneshot(request)
            .await
            .expect("Failed to send request");
        let status = response.status();
        let body_bytes = axum::body::to_bytes(response.into_body(), 1024 * 1024)
            .await
            .expect("Failed to read response body");
        let body: Value = serde_json::from_slice(&body_bytes).unwrap_or(Value::Null);
        TestResponse { status, body }
    }
}
