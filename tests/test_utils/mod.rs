//! Test utilities for integration tests
#![allow(dead_code)]
use std::sync::{Arc, RwLock};

use axum::{Router, body::Body};

use chat_view::api::AppState;
use chat_view::api::app;
use chat_view::core::{AppConfig, ChatStore};

/// Config pointing the history client at `history_api_url` with a
/// logged in user.
pub fn test_config(history_api_url: &str) -> AppConfig {
    AppConfig {
        history_api_url: history_api_url.to_string(),
        assistant_avatar: String::from("https://example.com/assistant.png"),
        request_timeout_secs: 5,
        token: Some(String::from("test-token")),
        user_id: Some(42),
        user_avatar: Some(String::from("https://example.com/user.png")),
    }
}

/// Creates a test application router whose history backend is
/// `history_api_url`, usually a `mockito` server.
pub fn test_app(history_api_url: &str) -> Router {
    test_app_with_config(test_config(history_api_url))
}

pub fn test_app_with_config(config: AppConfig) -> Router {
    let store = Arc::new(ChatStore::from_config(&config));
    let app_state = AppState::new(store);
    app(Arc::new(RwLock::new(app_state)))
}

pub async fn body_to_string(body: Body) -> String {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .expect("Failed to read body");
    String::from_utf8(bytes.to_vec()).expect("Body is not UTF-8")
}

pub async fn body_to_json(body: Body) -> serde_json::Value {
    let body = body_to_string(body).await;
    serde_json::from_str(&body).expect("Body is not JSON")
}
