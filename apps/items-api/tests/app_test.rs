//! End-to-end tests through the full application router

use axum::Router;
use axum::body::Body;
use axum::http::{Request, StatusCode};
use axum_helpers::OPENAPI_PATH;
use core_config::{Environment, app_info, server::ServerConfig};
use http_body_util::BodyExt;
use items_api::{config::Config, state::AppState};
use serde_json::{Value, json};
use tower::ServiceExt;

fn test_state() -> AppState {
    AppState::new(Config {
        app: app_info!(),
        server: ServerConfig::new("127.0.0.1", 0),
        environment: Environment::Development,
    })
}

async fn send(app: &Router, request: Request<Body>) -> (StatusCode, Value) {
    let response = app.clone().oneshot(request).await.unwrap();
    let status = response.status();
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    let body = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, body)
}

#[tokio::test]
async fn test_post_then_get_under_items_prefix() {
    let state = test_state();
    let app = items_api::app(&state);

    let (status, created) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/items")
            .header("content-type", "application/json")
            .body(Body::from(r#"{"name":"widget","value":3.5}"#))
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(created["name"], "widget");
    assert_eq!(created["value"], 3.5);

    let id = created["id"].as_str().unwrap();
    let (status, fetched) = send(
        &app,
        Request::builder()
            .uri(format!("/items/{id}"))
            .body(Body::empty())
            .unwrap(),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(fetched, created);
    assert_eq!(state.items.len().await, 1);
}

#[tokio::test]
async fn test_invalid_body_does_not_touch_store() {
    let state = test_state();
    let app = items_api::app(&state);

    let (status, body) = send(
        &app,
        Request::builder()
            .method("POST")
            .uri("/items")
            .body(Body::from("{not json"))
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body, json!({ "error": "invalid request" }));
    assert!(state.items.is_empty().await);
}

#[tokio::test]
async fn test_unknown_item_returns_404() {
    let app = items_api::app(&test_state());

    let (status, body) = send(
        &app,
        Request::builder()
            .uri("/items/00000000-0000-4000-8000-000000000000")
            .body(Body::empty())
            .unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "item not found" }));
}

#[tokio::test]
async fn test_health_endpoint() {
    let app = items_api::app(&test_state());

    let (status, body) = send(
        &app,
        Request::builder().uri("/health").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["status"], "healthy");
    assert_eq!(body["name"], "items_api");
}

#[tokio::test]
async fn test_openapi_lists_item_paths() {
    let app = items_api::app(&test_state());

    let (status, doc) = send(
        &app,
        Request::builder().uri(OPENAPI_PATH).body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert!(doc["paths"]["/items"]["post"].is_object());
    assert!(doc["paths"]["/items/{id}"]["get"].is_object());
}

#[tokio::test]
async fn test_unrouted_path_returns_envelope() {
    let app = items_api::app(&test_state());

    let (status, body) = send(
        &app,
        Request::builder().uri("/widgets").body(Body::empty()).unwrap(),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "not found" }));
}
