//! Common test utilities and helpers
//!
//! - Test server construction over a fresh in-memory store
//! - Account helpers that register a user and return its token
//! - The `auth-token` header pair
//! - Postgres fixtures in [`database`]

pub mod database;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use blog_api::backend::middleware::AUTH_HEADER;
use blog_api::backend::routes::create_router;
use blog_api::backend::server::AppState;
use serde_json::{json, Value};

/// Secret shared by every test server
pub const TEST_SECRET: &str = "integration-test-secret";

/// Lowest bcrypt cost, keeps the suite fast
pub const TEST_BCRYPT_COST: u32 = 4;

/// Test server over a fresh in-memory store
pub fn test_server() -> TestServer {
    let state = AppState::in_memory(TEST_SECRET, TEST_BCRYPT_COST).unwrap();
    TestServer::new(create_router(state)).unwrap()
}

/// Header pair carrying a token
pub fn auth_header(token: &str) -> (HeaderName, HeaderValue) {
    (
        HeaderName::from_static(AUTH_HEADER),
        HeaderValue::from_str(token).unwrap(),
    )
}

/// Register an account and return its token
pub async fn register_user(server: &TestServer, name: &str, email: &str, password: &str) -> String {
    let response = server
        .post("/register")
        .json(&json!({
            "name": name,
            "email": email,
            "password": password
        }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    body["authtoken"]
        .as_str()
        .expect("register response carries authtoken")
        .to_string()
}

/// Create a post as the token's owner and return the response body
pub async fn create_post(server: &TestServer, token: &str, title: &str, body: &str) -> Value {
    let (name, value) = auth_header(token);
    let response = server
        .post("/write")
        .add_header(name, value)
        .json(&json!({ "title": title, "body": body }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    response.json()
}
