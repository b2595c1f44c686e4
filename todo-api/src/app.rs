/// Application state and router builder
///
/// # Example
///
/// ```no_run
/// use std::sync::Arc;
/// use todo_api::app::{build_router, AppState};
/// use todo_shared::service::AuthService;
/// use todo_shared::store::MemoryRecordStore;
///
/// # async fn example() -> anyhow::Result<()> {
/// let auth = AuthService::new(
///     Arc::new(MemoryRecordStore::new()),
///     "test-secret-key-at-least-32-bytes-long",
/// );
/// let app = build_router(AppState::new(auth));
///
/// let listener = tokio::net::TcpListener::bind("0.0.0.0:8080").await?;
/// axum::serve(listener, app).await?;
/// # Ok(())
/// # }
/// ```

use axum::{
    routing::{get, post},
    Router,
};
use todo_shared::service::AuthService;
use tower_http::trace::{DefaultMakeSpan, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Shared application state
///
/// Cloned for each request handler via Axum's `State` extractor. It carries
/// no mutable state.
#[derive(Clone, Debug)]
pub struct AppState {
    /// Registration and login
    pub auth: AuthService,
}

impl AppState {
    /// Creates new application state
    pub fn new(auth: AuthService) -> Self {
        Self { auth }
    }
}

/// Builds the Axum router
///
/// ```text
/// /
/// ├── GET  /health
/// └── /auth/
///     ├── POST /register
///     └── POST /login
/// ```
pub fn build_router(state: AppState) -> Router {
    use crate::routes;

    let auth_routes = Router::new()
        .route("/register", post(routes::auth::register))
        .route("/login", post(routes::auth::login));

    Router::new()
        .route("/health", get(routes::health::health_check))
        .nest("/auth", auth_routes)
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(DefaultMakeSpan::new().level(Level::INFO))
                .on_response(DefaultOnResponse::new().level(Level::INFO)),
        )
        .with_state(state)
}
