//! Post API integration tests
//!
//! Create, list, get, update and delete, always scoped to the caller.

use axum::http::StatusCode;
use pretty_assertions::assert_eq;
use serde_json::{json, Value};

use crate::common::{auth_header, create_post, register_user, test_server};

#[tokio::test]
async fn test_create_post_returns_record() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;

    let post = create_post(&server, &token, "Hello", "First post").await;

    assert!(post["id"].is_string());
    assert_eq!(post["title"], "Hello");
    assert_eq!(post["body"], "First post");

    let (name, value) = auth_header(&token);
    let profile: Value = server.post("/getuser").add_header(name, value).await.json();
    assert_eq!(post["user"], profile["id"]);
}

#[tokio::test]
async fn test_create_post_requires_token() {
    let server = test_server();

    let response = server
        .post("/write")
        .json(&json!({ "title": "Hello", "body": "World" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn test_create_post_missing_field() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;

    let (name, value) = auth_header(&token);
    let response = server
        .post("/write")
        .add_header(name, value)
        .json(&json!({ "title": "No body" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
}

#[tokio::test]
async fn test_list_posts_is_owner_scoped_in_insertion_order() {
    let server = test_server();
    let ada = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let bob = register_user(&server, "Bob", "bob@example.com", "password123").await;

    create_post(&server, &ada, "One", "a").await;
    create_post(&server, &bob, "Bob's", "b").await;
    create_post(&server, &ada, "Two", "c").await;

    let (name, value) = auth_header(&ada);
    let response = server.get("/posts").add_header(name, value).await;
    assert_eq!(response.status_code(), StatusCode::OK);

    let posts: Vec<Value> = response.json();
    let titles: Vec<&str> = posts
        .iter()
        .map(|post| post["title"].as_str().unwrap())
        .collect();
    assert_eq!(titles, vec!["One", "Two"]);
}

#[tokio::test]
async fn test_list_posts_empty() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;

    let (name, value) = auth_header(&token);
    let response = server.get("/posts").add_header(name, value).await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let posts: Vec<Value> = response.json();
    assert!(posts.is_empty());
}

#[tokio::test]
async fn test_get_post_by_owner() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let post = create_post(&server, &token, "Hello", "World").await;

    let (name, value) = auth_header(&token);
    let response = server
        .get(&format!("/posts/{}", post["id"].as_str().unwrap()))
        .add_header(name, value)
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let fetched: Value = response.json();
    assert_eq!(fetched, post);
}

#[tokio::test]
async fn test_foreign_post_is_indistinguishable_from_missing() {
    let server = test_server();
    let ada = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let bob = register_user(&server, "Bob", "bob@example.com", "password123").await;
    let post = create_post(&server, &ada, "Private", "Ada only").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&bob);
    let foreign = server
        .get(&format!("/posts/{}", id))
        .add_header(name, value)
        .await;

    let (name, value) = auth_header(&bob);
    let missing = server
        .get(&format!("/posts/{}", uuid::Uuid::new_v4()))
        .add_header(name, value)
        .await;

    let (name, value) = auth_header(&bob);
    let garbage = server.get("/posts/not-a-uuid").add_header(name, value).await;

    assert_eq!(foreign.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(missing.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(garbage.status_code(), StatusCode::NOT_FOUND);
    assert_eq!(foreign.text(), missing.text());
    assert_eq!(foreign.text(), garbage.text());

    let body: Value = foreign.json();
    assert_eq!(body["error"], "Post not found");
}

#[tokio::test]
async fn test_update_post() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let post = create_post(&server, &token, "Draft", "Rough").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&token);
    let response = server
        .put(&format!("/post/update/{}", id))
        .add_header(name, value)
        .json(&json!({ "title": "Final", "body": "Polished" }))
        .await;

    assert_eq!(response.status_code(), StatusCode::OK);
    let updated: Value = response.json();
    assert_eq!(updated["id"], post["id"]);
    assert_eq!(updated["user"], post["user"]);
    assert_eq!(updated["title"], "Final");
    assert_eq!(updated["body"], "Polished");

    let (name, value) = auth_header(&token);
    let fetched: Value = server
        .get(&format!("/posts/{}", id))
        .add_header(name, value)
        .await
        .json();
    assert_eq!(fetched, updated);
}

#[tokio::test]
async fn test_update_requires_both_fields() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let post = create_post(&server, &token, "Keep", "Me").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&token);
    let response = server
        .put(&format!("/post/update/{}", id))
        .add_header(name, value)
        .json(&json!({ "title": "Only title" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);

    let (name, value) = auth_header(&token);
    let fetched: Value = server
        .get(&format!("/posts/{}", id))
        .add_header(name, value)
        .await
        .json();
    assert_eq!(fetched, post);
}

#[tokio::test]
async fn test_update_foreign_post_leaves_it_untouched() {
    let server = test_server();
    let ada = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let bob = register_user(&server, "Bob", "bob@example.com", "password123").await;
    let post = create_post(&server, &ada, "Mine", "Hands off").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&bob);
    let response = server
        .put(&format!("/post/update/{}", id))
        .add_header(name, value)
        .json(&json!({ "title": "Hijacked", "body": "Oops" }))
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let (name, value) = auth_header(&ada);
    let fetched: Value = server
        .get(&format!("/posts/{}", id))
        .add_header(name, value)
        .await
        .json();
    assert_eq!(fetched, post);
}

#[tokio::test]
async fn test_delete_post() {
    let server = test_server();
    let token = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let post = create_post(&server, &token, "Short lived", "Bye").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&token);
    let response = server
        .delete(&format!("/post/delete/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::OK);
    let body: Value = response.json();
    assert_eq!(body, json!({ "message": "Post deleted successfully" }));

    let (name, value) = auth_header(&token);
    let again = server
        .delete(&format!("/post/delete/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(again.status_code(), StatusCode::NOT_FOUND);

    let (name, value) = auth_header(&token);
    let gone = server
        .get(&format!("/posts/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(gone.status_code(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn test_delete_foreign_post_is_not_found() {
    let server = test_server();
    let ada = register_user(&server, "Ada", "ada@example.com", "password123").await;
    let bob = register_user(&server, "Bob", "bob@example.com", "password123").await;
    let post = create_post(&server, &ada, "Mine", "Still here").await;
    let id = post["id"].as_str().unwrap();

    let (name, value) = auth_header(&bob);
    let response = server
        .delete(&format!("/post/delete/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

    let (name, value) = auth_header(&ada);
    let still_there = server
        .get(&format!("/posts/{}", id))
        .add_header(name, value)
        .await;
    assert_eq!(still_there.status_code(), StatusCode::OK);
}
