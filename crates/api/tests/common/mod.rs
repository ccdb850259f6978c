#![allow(dead_code)]

use std::sync::Arc;

use asterix_api::config::ServerConfig;
use asterix_api::router::build_app_router;
use asterix_api::state::AppState;
use asterix_core::character::Character;
use asterix_core::id::UuidGenerator;
use asterix_core::service::CharacterService;
use asterix_core::store::CharacterStore;
use asterix_db::MemoryCharacterStore;
use axum::body::Body;
use axum::http::{Method, Request, Response};
use axum::Router;
use http_body_util::BodyExt;
use tower::ServiceExt;

/// Build a test `ServerConfig` with safe defaults.
pub fn test_config() -> ServerConfig {
    ServerConfig {
        host: "127.0.0.1".to_string(),
        port: 0,
        ..ServerConfig::default()
    }
}

/// Build the full application router over the given store, with the same
/// middleware stack production uses.
pub fn build_test_app(store: Arc<dyn CharacterStore>) -> Router {
    let config = test_config();
    let state = AppState {
        config: Arc::new(config.clone()),
        characters: Arc::new(CharacterService::new(store, Arc::new(UuidGenerator))),
    };
    build_app_router(state, &config).unwrap()
}

/// A memory store pre-filled with the two fixture characters.
pub async fn seeded_store() -> Arc<MemoryCharacterStore> {
    let store = Arc::new(MemoryCharacterStore::new());
    for seed in [
        character("1", "Max", 10, "Warrior"),
        character("2", "Obelix", 35, "Builder"),
    ] {
        store.save(seed).await.unwrap();
    }
    store
}

pub fn character(id: &str, name: &str, age: i32, profession: &str) -> Character {
    Character {
        id: id.to_string(),
        name: name.to_string(),
        age,
        profession: profession.to_string(),
    }
}

pub async fn send(
    app: Router,
    method: Method,
    uri: &str,
    body: Option<serde_json::Value>,
) -> Response<Body> {
    let builder = Request::builder().method(method).uri(uri);
    let request = match body {
        Some(json) => builder
            .header("content-type", "application/json")
            .body(Body::from(json.to_string()))
            .unwrap(),
        None => builder.body(Body::empty()).unwrap(),
    };
    app.oneshot(request).await.unwrap()
}

pub async fn get(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::GET, uri, None).await
}

pub async fn delete(app: Router, uri: &str) -> Response<Body> {
    send(app, Method::DELETE, uri, None).await
}

pub async fn post_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::POST, uri, Some(body)).await
}

pub async fn put_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PUT, uri, Some(body)).await
}

pub async fn patch_json(app: Router, uri: &str, body: serde_json::Value) -> Response<Body> {
    send(app, Method::PATCH, uri, Some(body)).await
}

/// Collect a response body and parse it as JSON.
pub async fn body_json(response: Response<Body>) -> serde_json::Value {
    let bytes = response.into_body().collect().await.unwrap().to_bytes();
    serde_json::from_slice(&bytes).unwrap()
}
