//! Integration tests for `GET /getuserinfo` and token handling.

mod common;

use axum::body::Body;
use axum::http::header::{AUTHORIZATION, REFERER};
use axum::http::{Request, StatusCode};
use common::{body_json, get, get_auth, token_for, LOGIN_URL, LOGOUT_URL};
use scriptpad_db::MemoryStore;
use tower::ServiceExt;

#[tokio::test]
async fn anonymous_caller_gets_login_link() {
    let app = common::build_test_app(MemoryStore::new());

    let json = body_json(get(app, "/getuserinfo").await).await;

    assert_eq!(json["nickname"], "");
    assert_eq!(json["url"], LOGIN_URL);
}

#[tokio::test]
async fn logged_in_caller_gets_nickname_and_logout_link() {
    let app = common::build_test_app(MemoryStore::new());
    let token = token_for("alice-id", "alice", false);

    let response = get_auth(app, "/getuserinfo", &token).await;
    assert_eq!(response.status(), StatusCode::OK);

    let json = body_json(response).await;
    assert_eq!(json["nickname"], "alice");
    assert_eq!(json["url"], LOGOUT_URL);
}

#[tokio::test]
async fn links_return_to_referrer() {
    let app = common::build_test_app(MemoryStore::new());

    let request = Request::builder()
        .uri("/getuserinfo")
        .header(REFERER, "http://localhost:5173/editor")
        .body(Body::empty())
        .unwrap();
    let json = body_json(app.oneshot(request).await.unwrap()).await;

    assert_eq!(
        json["url"],
        format!("{LOGIN_URL}?continue=http%3A%2F%2Flocalhost%3A5173%2Feditor")
    );
}

#[tokio::test]
async fn forged_token_is_rejected_not_downgraded() {
    let app = common::build_test_app(MemoryStore::new());

    let response = get_auth(app, "/getuserinfo", "not.a.jwt").await;

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
    assert_eq!(body_json(response).await["code"], "UNAUTHORIZED");
}

#[tokio::test]
async fn non_bearer_header_is_rejected() {
    let app = common::build_test_app(MemoryStore::new());

    let request = Request::builder()
        .uri("/getuserinfo")
        .header(AUTHORIZATION, "Basic YWxpY2U6c2VjcmV0")
        .body(Body::empty())
        .unwrap();
    let response = app.oneshot(request).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}
