/// Router tests for the auth endpoints
///
/// These drive the full Axum router with an in-memory record store and check
/// the HTTP contract: status codes, bodies and persisted records.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{TestContext, TEST_SECRET};
use serde_json::json;
use todo_shared::auth::jwt::validate_token;
use todo_shared::store::RecordStore;
use uuid::Uuid;

fn token_user_id(body: &serde_json::Value) -> Uuid {
    let token = body["token"].as_str().expect("token should be a string");
    validate_token(token, TEST_SECRET).expect("token should validate").id
}

#[tokio::test]
async fn test_register_returns_token_and_creates_records() {
    let ctx = TestContext::new();

    let (status, body) = ctx.register("alice", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body.as_object().unwrap().len(), 1);

    let user = ctx.store.find_user_by_username("alice").await.unwrap().unwrap();
    assert_eq!(token_user_id(&body), user.id);

    let todos = ctx.store.todos_for(user.id);
    assert_eq!(todos.len(), 1);
    assert_eq!(todos[0].task, "Hello :) Add your first todo!");
}

#[tokio::test]
async fn test_full_scenario() {
    let ctx = TestContext::new();

    let (status, t1) = ctx.register("alice", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    let alice_id = token_user_id(&t1);

    let (status, t2) = ctx.login("alice", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token_user_id(&t2), alice_id);

    let (status, body) = ctx.login("alice", "wrong").await;
    assert_eq!(status, StatusCode::UNAUTHORIZED);
    assert_eq!(body, json!({ "message": "Invalid password" }));

    let (status, body) = ctx.login("bob", "x").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "message": "User not found" }));

    let (status, body) = ctx.register("alice", "pw2").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_null());

    let (status, t3) = ctx.login("alice", "pw1").await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(token_user_id(&t3), alice_id);

    assert_eq!(ctx.store.user_count(), 1);
    assert_eq!(ctx.store.todo_count(), 1);
}

#[tokio::test]
async fn test_token_valid_for_24_hours() {
    let ctx = TestContext::new();

    let (_, body) = ctx.register("alice", "pw1").await;
    let claims = validate_token(body["token"].as_str().unwrap(), TEST_SECRET).unwrap();

    let now = chrono::Utc::now().timestamp();
    assert!((claims.iat - now).abs() <= 5);
    assert_eq!(claims.exp - claims.iat, 24 * 60 * 60);
}

#[tokio::test]
async fn test_register_failure_leaves_no_records() {
    let ctx = TestContext::new();
    ctx.store.set_fail_todo_inserts(true);

    let (status, body) = ctx.register("alice", "pw1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_null());
    assert_eq!(ctx.store.user_count(), 0);
    assert_eq!(ctx.store.todo_count(), 0);

    let (status, _) = ctx.login("alice", "pw1").await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_login_store_outage_is_503() {
    let ctx = TestContext::new();
    ctx.register("alice", "pw1").await;
    ctx.store.set_unavailable(true);

    let (status, body) = ctx.login("alice", "pw1").await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_null());
}

#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_duplicate_registration() {
    let ctx = TestContext::new();

    let (a, b) = tokio::join!(ctx.register("carol", "a"), ctx.register("carol", "b"));

    let mut statuses = [a.0.as_u16(), b.0.as_u16()];
    statuses.sort();
    assert_eq!(statuses, [200, 503]);
    assert_eq!(ctx.store.user_count(), 1);
    assert_eq!(ctx.store.todo_count(), 1);
}

#[tokio::test]
async fn test_empty_password_round_trips() {
    let ctx = TestContext::new();

    assert_eq!(ctx.register("dave", "").await.0, StatusCode::OK);
    assert_eq!(ctx.login("dave", "").await.0, StatusCode::OK);
    assert_eq!(ctx.login("dave", "x").await.0, StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_health_reports_store_state() {
    let ctx = TestContext::new();
    let request = || {
        Request::builder()
            .uri("/health")
            .body(Body::empty())
            .unwrap()
    };

    let (status, body) = ctx.send(request()).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["database"], "connected");

    ctx.store.set_unavailable(true);
    let (_, body) = ctx.send(request()).await;
    assert_eq!(body["status"], "degraded");
}

#[tokio::test]
async fn test_login_missing_field_is_503() {
    let ctx = TestContext::new();
    ctx.register("alice", "pw1").await;

    let request = Request::builder()
        .method("POST")
        .uri("/auth/login")
        .header("content-type", "application/json")
        .body(Body::from(json!({ "username": "alice" }).to_string()))
        .unwrap();

    let (status, body) = ctx.send(request).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_null());
}

#[tokio::test]
async fn test_register_without_content_type_is_503() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .body(Body::from(
            json!({ "username": "alice", "password": "pw1" }).to_string(),
        ))
        .unwrap();

    let (status, body) = ctx.send(request).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_null());
    assert_eq!(ctx.store.user_count(), 0);
}

#[tokio::test]
async fn test_register_invalid_json_is_503() {
    let ctx = TestContext::new();

    let request = Request::builder()
        .method("POST")
        .uri("/auth/register")
        .header("content-type", "application/json")
        .body(Body::from("{not json"))
        .unwrap();

    let (status, body) = ctx.send(request).await;
    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert!(body.is_null());
}
