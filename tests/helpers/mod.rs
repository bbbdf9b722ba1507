//! Shared test helpers for integration tests.

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use serde_json::{Value, json};
use tower::ServiceExt;

use mentorhub_api::{AppState, build_router};
use mentorhub_core::config::AppConfig;

/// Test application context driving the real router in-process.
pub struct TestApp {
    /// The Axum router for making test requests
    pub router: Router,
}

/// Decoded response from a test request.
pub struct TestResponse {
    /// HTTP status code
    pub status: StatusCode,
    /// Parsed JSON body (`Null` when empty or not JSON)
    pub body: Value,
}

impl TestApp {
    /// Create a new test application over fresh in-memory state.
    pub fn new() -> Self {
        let mut config = AppConfig::default();
        // Minimal hashing cost and avatar size keep the suite fast.
        config.auth.argon2_memory_kib = 1024;
        config.auth.argon2_iterations = 1;
        config.avatar.side_px = 16;

        let state = AppState::build(config).expect("Failed to build app state");
        Self {
            router: build_router(state),
        }
    }

    /// Send a request and parse the JSON response body.
    pub async fn request(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> TestResponse {
        let (status, bytes) = self.send(method, path, body, token).await;
        let body = if bytes.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&bytes).unwrap_or(Value::Null)
        };
        TestResponse { status, body }
    }

    /// Send a request and return the raw response bytes.
    pub async fn request_bytes(
        &self,
        method: &str,
        path: &str,
        token: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let (status, bytes) = self.send(method, path, None, token).await;
        (status, bytes)
    }

    async fn send(
        &self,
        method: &str,
        path: &str,
        body: Option<Value>,
        token: Option<&str>,
    ) -> (StatusCode, Vec<u8>) {
        let mut builder = Request::builder().method(method).uri(path);
        if let Some(token) = token {
            builder = builder.header("authorization", format!("Bearer {token}"));
        }

        let request = match body {
            Some(body) => builder
                .header("content-type", "application/json")
                .body(Body::from(body.to_string()))
                .unwrap(),
            None => builder.body(Body::empty()).unwrap(),
        };

        let response = self.router.clone().oneshot(request).await.unwrap();
        let status = response.status();
        let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap()
            .to_vec();
        (status, bytes)
    }

    /// Register an account, asserting success.
    pub async fn signup(&self, email: &str, name: &str, role: &str) {
        let response = self
            .request(
                "POST",
                "/api/signup",
                Some(json!({
                    "email": email,
                    "password": "password123",
                    "name": name,
                    "role": role,
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::CREATED, "signup failed: {}", response.body);
    }

    /// Log an account in and return its bearer token.
    pub async fn login(&self, email: &str) -> String {
        let response = self
            .request(
                "POST",
                "/api/login",
                Some(json!({
                    "email": email,
                    "password": "password123",
                })),
                None,
            )
            .await;
        assert_eq!(response.status, StatusCode::OK, "login failed: {}", response.body);
        response.body["token"].as_str().unwrap().to_string()
    }

    /// Register and log in, returning the bearer token.
    pub async fn signup_and_login(&self, email: &str, name: &str, role: &str) -> String {
        self.signup(email, name, role).await;
        self.login(email).await
    }

    /// Fetch the caller's own account id.
    pub async fn account_id(&self, token: &str) -> i64 {
        let response = self.request("GET", "/api/me", None, Some(token)).await;
        assert_eq!(response.status, StatusCode::OK);
        response.body["id"].as_i64().unwrap()
    }
}
