//! HTTP contract tests
//!
//! Drive the composed router with `oneshot` requests and assert the
//! exact statuses and messages on the wire. Follow and like edges are
//! written through the timeline repository since they have no HTTP
//! surface of their own.

use auth::AuthConfig;
use axum::Router;
use axum::body::{Body, to_bytes};
use axum::http::{Request, StatusCode, header};
use sqlx::SqlitePool;
use timeline::SqliteTimelineRepository;
use timeline::domain::repository::TimelineRepository;
use tower::ServiceExt;

fn test_app(pool: SqlitePool) -> Router {
    api::app(pool, AuthConfig::development())
}

fn json_request(method: &str, uri: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn bearer_request(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {token}"))
        .body(Body::empty())
        .unwrap()
}

async fn body_string(response: axum::response::Response) -> String {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    String::from_utf8(bytes.to_vec()).unwrap()
}

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

async fn register(app: &Router, username: &str, password: &str) {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register/",
            serde_json::json!({
                "username": username,
                "password": password,
                "name": format!("{username} display"),
                "gender": "other",
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "User created successfully");
}

async fn login(app: &Router, username: &str, password: &str) -> String {
    let response = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login/",
            serde_json::json!({"username": username, "password": password}),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    body["jwtToken"].as_str().unwrap().to_string()
}

async fn post_tweet(app: &Router, token: &str, text: &str) {
    let mut request = json_request("POST", "/user/tweets/", serde_json::json!({"tweet": text}));
    request.headers_mut().insert(
        header::AUTHORIZATION,
        format!("Bearer {token}").parse().unwrap(),
    );

    let response = app.clone().oneshot(request).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_string(response).await, "Created a Tweet");
}

async fn tweet_id_of(pool: &SqlitePool, body: &str) -> String {
    sqlx::query_scalar::<_, String>("SELECT tweet_id FROM tweets WHERE body = ?")
        .bind(body)
        .fetch_one(pool)
        .await
        .unwrap()
}

async fn user_id_of(pool: &SqlitePool, username: &str) -> kernel::id::UserId {
    let raw = sqlx::query_scalar::<_, String>("SELECT user_id FROM users WHERE username = ?")
        .bind(username)
        .fetch_one(pool)
        .await
        .unwrap();
    kernel::id::UserId::parse_str(&raw).unwrap()
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn register_login_post_list_roundtrip(pool: SqlitePool) {
    let app = test_app(pool);

    register(&app, "alice", "secret1").await;
    let token = login(&app, "alice", "secret1").await;
    post_tweet(&app, &token, "hello world").await;

    let response = app
        .clone()
        .oneshot(bearer_request("GET", "/user/tweets/", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    assert_eq!(body[0]["tweet"], "hello world");
    assert_eq!(body[0]["likes"], 0);
    assert_eq!(body[0]["replies"], 0);
    assert!(body[0]["dateTime"].is_string());
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn register_rejections(pool: SqlitePool) {
    let app = test_app(pool);
    register(&app, "alice", "secret1").await;

    let duplicate = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register/",
            serde_json::json!({
                "username": "alice",
                "password": "secret2",
                "name": "Alice Again",
                "gender": "other",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(duplicate.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(duplicate).await["detail"], "User already exists");

    let short = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/register/",
            serde_json::json!({
                "username": "bob",
                "password": "12345",
                "name": "Bob",
                "gender": "other",
            }),
        ))
        .await
        .unwrap();
    assert_eq!(short.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(short).await["detail"], "Password is too short");
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn login_rejections(pool: SqlitePool) {
    let app = test_app(pool);
    register(&app, "alice", "secret1").await;

    let unknown = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login/",
            serde_json::json!({"username": "nobody", "password": "secret1"}),
        ))
        .await
        .unwrap();
    assert_eq!(unknown.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(unknown).await["detail"], "Invalid user");

    let wrong = app
        .clone()
        .oneshot(json_request(
            "POST",
            "/login/",
            serde_json::json!({"username": "alice", "password": "wrong-1"}),
        ))
        .await
        .unwrap();
    assert_eq!(wrong.status(), StatusCode::BAD_REQUEST);
    assert_eq!(body_json(wrong).await["detail"], "Invalid password");
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn protected_routes_require_valid_bearer(pool: SqlitePool) {
    let app = test_app(pool);

    let missing = app
        .clone()
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/user/tweets/feed/")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(missing).await["detail"], "Invalid JWT Token");

    let garbage = app
        .clone()
        .oneshot(bearer_request("GET", "/user/tweets/feed/", "not-a-token"))
        .await
        .unwrap();
    assert_eq!(garbage.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(garbage).await["detail"], "Invalid JWT Token");
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn tweet_visibility_follows_the_follow_graph(pool: SqlitePool) {
    let app = test_app(pool.clone());
    let repo = SqliteTimelineRepository::new(pool.clone());

    register(&app, "author", "secret1").await;
    register(&app, "follower", "secret1").await;
    register(&app, "stranger", "secret1").await;

    let author_token = login(&app, "author", "secret1").await;
    post_tweet(&app, &author_token, "for my followers").await;

    let author_id = user_id_of(&pool, "author").await;
    let follower_id = user_id_of(&pool, "follower").await;
    repo.add_follow(follower_id, author_id).await.unwrap();

    let tweet_id = tweet_id_of(&pool, "for my followers").await;
    let uri = format!("/tweets/{tweet_id}/");

    let follower_token = login(&app, "follower", "secret1").await;
    let allowed = app
        .clone()
        .oneshot(bearer_request("GET", &uri, &follower_token))
        .await
        .unwrap();
    assert_eq!(allowed.status(), StatusCode::OK);
    let body = body_json(allowed).await;
    assert_eq!(body["tweet"], "for my followers");
    assert_eq!(body["likes"], 0);
    assert_eq!(body["replies"], 0);

    let stranger_token = login(&app, "stranger", "secret1").await;
    let denied = app
        .clone()
        .oneshot(bearer_request("GET", &uri, &stranger_token))
        .await
        .unwrap();
    assert_eq!(denied.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(denied).await["detail"], "Invalid Request");
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn feed_returns_four_newest_from_followed(pool: SqlitePool) {
    let app = test_app(pool.clone());
    let repo = SqliteTimelineRepository::new(pool.clone());

    register(&app, "author", "secret1").await;
    register(&app, "reader", "secret1").await;

    let author_token = login(&app, "author", "secret1").await;
    for n in 1..=5 {
        post_tweet(&app, &author_token, &format!("tweet {n}")).await;
        // Distinct millisecond timestamps keep the ordering deterministic
        tokio::time::sleep(std::time::Duration::from_millis(5)).await;
    }

    let author_id = user_id_of(&pool, "author").await;
    let reader_id = user_id_of(&pool, "reader").await;
    repo.add_follow(reader_id, author_id).await.unwrap();

    let reader_token = login(&app, "reader", "secret1").await;
    let response = app
        .clone()
        .oneshot(bearer_request("GET", "/user/tweets/feed/", &reader_token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::OK);
    let body = body_json(response).await;
    let feed = body.as_array().unwrap();
    assert_eq!(feed.len(), 4);
    assert_eq!(feed[0]["tweet"], "tweet 5");
    assert_eq!(feed[3]["tweet"], "tweet 2");
    assert!(feed.iter().all(|item| item["username"] == "author"));
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn delete_tweet_outcomes(pool: SqlitePool) {
    let app = test_app(pool.clone());

    register(&app, "alice", "secret1").await;
    register(&app, "bob", "secret1").await;

    let alice_token = login(&app, "alice", "secret1").await;
    post_tweet(&app, &alice_token, "mine").await;

    let tweet_id = tweet_id_of(&pool, "mine").await;
    let uri = format!("/tweets/{tweet_id}/");

    let bob_token = login(&app, "bob", "secret1").await;
    let not_owner = app
        .clone()
        .oneshot(bearer_request("DELETE", &uri, &bob_token))
        .await
        .unwrap();
    assert_eq!(not_owner.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(not_owner).await["detail"], "Invalid Request");

    let removed = app
        .clone()
        .oneshot(bearer_request("DELETE", &uri, &alice_token))
        .await
        .unwrap();
    assert_eq!(removed.status(), StatusCode::OK);
    assert_eq!(body_string(removed).await, "Tweet Removed");

    let missing = app
        .clone()
        .oneshot(bearer_request("DELETE", &uri, &alice_token))
        .await
        .unwrap();
    assert_eq!(missing.status(), StatusCode::NOT_FOUND);
    assert_eq!(body_json(missing).await["detail"], "Tweet does not exist");
}

#[sqlx::test(migrations = "../../../database/migrations")]
async fn follow_lists_over_http(pool: SqlitePool) {
    let app = test_app(pool.clone());
    let repo = SqliteTimelineRepository::new(pool.clone());

    register(&app, "alice", "secret1").await;
    register(&app, "bob", "secret1").await;

    let alice_id = user_id_of(&pool, "alice").await;
    let bob_id = user_id_of(&pool, "bob").await;
    repo.add_follow(alice_id, bob_id).await.unwrap();

    let alice_token = login(&app, "alice", "secret1").await;
    let following = app
        .clone()
        .oneshot(bearer_request("GET", "/user/following/", &alice_token))
        .await
        .unwrap();
    assert_eq!(following.status(), StatusCode::OK);
    assert_eq!(
        body_json(following).await,
        serde_json::json!([{"name": "bob display"}])
    );

    let bob_token = login(&app, "bob", "secret1").await;
    let followers = app
        .clone()
        .oneshot(bearer_request("GET", "/user/followers/", &bob_token))
        .await
        .unwrap();
    assert_eq!(followers.status(), StatusCode::OK);
    assert_eq!(
        body_json(followers).await,
        serde_json::json!([{"name": "alice display"}])
    );
}
