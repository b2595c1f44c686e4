/// Authentication endpoints
///
/// - `POST /auth/register` - Create an account and get a session token
/// - `POST /auth/login` - Exchange credentials for a session token

use crate::{app::AppState, error::ApiResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    Json,
};
use serde::{Deserialize, Serialize};

/// Request body for both endpoints
///
/// Neither field is validated beyond being present. A body that fails to
/// parse is answered like any other internal failure.
#[derive(Deserialize)]
pub struct Credentials {
    /// Username
    pub username: String,

    /// Plaintext password
    pub password: String,
}

/// Successful response for both endpoints
#[derive(Debug, Serialize, Deserialize)]
pub struct TokenResponse {
    /// Signed session token, valid for 24 hours
    pub token: String,
}

/// Register a new user
///
/// Creates the account and its welcome todo, then returns a session token.
///
/// # Endpoint
///
/// ```text
/// POST /auth/register
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw1" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `503 Service Unavailable`: Any failure, including a taken username or an
///   unreadable body
pub async fn register(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = body?;
    let token = state.auth.register(&req.username, &req.password).await?;

    Ok(Json(TokenResponse { token }))
}

/// Log in
///
/// # Endpoint
///
/// ```text
/// POST /auth/login
/// Content-Type: application/json
///
/// { "username": "alice", "password": "pw1" }
/// ```
///
/// # Response
///
/// ```json
/// { "token": "eyJ..." }
/// ```
///
/// # Errors
///
/// - `404 Not Found`: `{ "message": "User not found" }`
/// - `401 Unauthorized`: `{ "message": "Invalid password" }`
/// - `503 Service Unavailable`: Store or signing failure, or an unreadable body
pub async fn login(
    State(state): State<AppState>,
    body: Result<Json<Credentials>, JsonRejection>,
) -> ApiResult<Json<TokenResponse>> {
    let Json(req) = body?;
    let token = state.auth.login(&req.username, &req.password).await?;

    Ok(Json(TokenResponse { token }))
}
