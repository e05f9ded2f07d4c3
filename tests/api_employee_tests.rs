//! Employee API tests over the full router, including authorization

use axum::{
    body::Body,
    http::{header, Request, StatusCode},
    Router,
};
use chrono::{Duration, Utc};
use http_body_util::BodyExt;
use serde_json::json;
use staff_system::auth::TokenSigner;
use tower::ServiceExt;

mod common;
use common::{build_context, TEST_TOKEN_SECRET};

async fn body_json(response: axum::response::Response) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}

/// Sign up and sign in through the router, returning the access token.
async fn obtain_access_token(app: &Router) -> String {
    let sign_up = Request::builder()
        .method("POST")
        .uri("/auth/sign-up")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "name": "Alice Example",
                "email": "alice@example.com",
                "password": "correct-horse-battery"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(sign_up).await.unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);

    let sign_in = Request::builder()
        .method("POST")
        .uri("/auth/sign-in")
        .header(header::CONTENT_TYPE, "application/json")
        .body(Body::from(
            json!({
                "email": "alice@example.com",
                "password": "correct-horse-battery"
            })
            .to_string(),
        ))
        .unwrap();
    let response = app.clone().oneshot(sign_in).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);

    body_json(response).await["access_token"]
        .as_str()
        .unwrap()
        .to_string()
}

fn authed_json(method: &str, uri: &str, token: &str, body: serde_json::Value) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::CONTENT_TYPE, "application/json")
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::from(body.to_string()))
        .unwrap()
}

fn authed(method: &str, uri: &str, token: &str) -> Request<Body> {
    Request::builder()
        .method(method)
        .uri(uri)
        .header(header::AUTHORIZATION, format!("Bearer {}", token))
        .body(Body::empty())
        .unwrap()
}

#[tokio::test]
async fn employees_require_authorization() {
    let ctx = build_context();
    let app = staff_system::routes::create_router(ctx.state);

    let response = app
        .oneshot(
            Request::builder()
                .method("GET")
                .uri("/employees")
                .body(Body::empty())
                .unwrap(),
        )
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn garbage_bearer_token_is_rejected() {
    let ctx = build_context();
    let app = staff_system::routes::create_router(ctx.state);

    let response = app
        .oneshot(authed("GET", "/employees", "not-a-real-token"))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn expired_access_token_is_rejected() {
    let ctx = build_context();
    let app = staff_system::routes::create_router(ctx.state);

    // Same secret as the router's signer, minted past the 15 minute window
    let signer = TokenSigner::new(TEST_TOKEN_SECRET.as_bytes(), 900);
    let stale = signer.mint(1, Utc::now() - Duration::minutes(16)).unwrap();

    let response = app.oneshot(authed("GET", "/employees", &stale)).await.unwrap();

    assert_eq!(response.status(), StatusCode::UNAUTHORIZED);
}

#[tokio::test]
async fn employee_crud_round_trip() {
    let ctx = build_context();
    let app = staff_system::routes::create_router(ctx.state);
    let token = obtain_access_token(&app).await;

    // Create
    let response = app
        .clone()
        .oneshot(authed_json(
            "POST",
            "/employees",
            &token,
            json!({
                "name": "Bob",
                "surname": "Builder",
                "utility": 7
            }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::CREATED);
    let created = body_json(response).await;
    let id = created["id"].as_i64().unwrap();
    assert_eq!(created["name"], "Bob");
    assert_eq!(created["utility"], 7);

    // Read
    let response = app
        .clone()
        .oneshot(authed("GET", &format!("/employees/{}", id), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await["surname"], "Builder");

    // List
    let response = app
        .clone()
        .oneshot(authed("GET", "/employees", &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    assert_eq!(body_json(response).await.as_array().unwrap().len(), 1);

    // Partial update: surname changes, name stays
    let response = app
        .clone()
        .oneshot(authed_json(
            "PUT",
            &format!("/employees/{}", id),
            &token,
            json!({ "surname": "Bricklayer" }),
        ))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::OK);
    let updated = body_json(response).await;
    assert_eq!(updated["name"], "Bob");
    assert_eq!(updated["surname"], "Bricklayer");

    // Delete
    let response = app
        .clone()
        .oneshot(authed("DELETE", &format!("/employees/{}", id), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NO_CONTENT);

    // Gone
    let response = app
        .oneshot(authed("GET", &format!("/employees/{}", id), &token))
        .await
        .unwrap();
    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn missing_employee_returns_not_found() {
    let ctx = build_context();
    let app = staff_system::routes::create_router(ctx.state);
    let token = obtain_access_token(&app).await;

    let response = app
        .oneshot(authed("GET", "/employees/9999", &token))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn create_employee_rejects_empty_name() {
    let ctx = build_context();
    let app = staff_system::routes::create_router(ctx.state);
    let token = obtain_access_token(&app).await;

    let response = app
        .oneshot(authed_json(
            "POST",
            "/employees",
            &token,
            json!({
                "name": "",
                "surname": "Builder"
            }),
        ))
        .await
        .unwrap();

    assert_eq!(response.status(), StatusCode::BAD_REQUEST);
}
