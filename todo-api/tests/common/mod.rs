/// Common test utilities for router tests
///
/// Builds the full router over an in-memory record store, so these tests run
/// without a database.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use std::sync::Arc;
use todo_api::app::{build_router, AppState};
use todo_shared::service::AuthService;
use todo_shared::store::MemoryRecordStore;
use tower::ServiceExt;

pub const TEST_SECRET: &str = "test-secret-key-at-least-32-bytes-long";

/// Router plus a handle on its store
pub struct TestContext {
    pub app: Router,
    pub store: Arc<MemoryRecordStore>,
}

impl TestContext {
    pub fn new() -> Self {
        let store = Arc::new(MemoryRecordStore::new());
        let auth = AuthService::new(store.clone(), TEST_SECRET);

        Self {
            app: build_router(AppState::new(auth)),
            store,
        }
    }

    /// Sends a request and returns status plus parsed JSON body (Null if empty)
    pub async fn send(&self, request: Request<Body>) -> (StatusCode, Value) {
        let response = self.app.clone().oneshot(request).await.unwrap();
        let status = response.status();

        let body = axum::body::to_bytes(response.into_body(), usize::MAX)
            .await
            .unwrap();
        let json = if body.is_empty() {
            Value::Null
        } else {
            serde_json::from_slice(&body).unwrap()
        };

        (status, json)
    }

    /// POSTs `{ username, password }` to `path`
    pub async fn post_credentials(
        &self,
        path: &str,
        username: &str,
        password: &str,
    ) -> (StatusCode, Value) {
        let request = Request::builder()
            .method("POST")
            .uri(path)
            .header("content-type", "application/json")
            .body(Body::from(
                json!({ "username": username, "password": password }).to_string(),
            ))
            .unwrap();

        self.send(request).await
    }

    pub async fn register(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_credentials("/auth/register", username, password).await
    }

    pub async fn login(&self, username: &str, password: &str) -> (StatusCode, Value) {
        self.post_credentials("/auth/login", username, password).await
    }
}
