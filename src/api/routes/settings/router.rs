//! Router for UI settings

use std::sync::{Arc, PoisonError, RwLock};

use axum::{Json, Router, extract::State, routing::get};

use super::public::DeepThinking;
use crate::api::state::AppState;

type SharedState = Arc<RwLock<AppState>>;

async fn deep_thinking_get(State(state): State<SharedState>) -> Json<DeepThinking> {
    let enabled = state
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .store
        .is_deep_thinking();
    Json(DeepThinking { enabled })
}

async fn deep_thinking_set(
    State(state): State<SharedState>,
    Json(data): Json<DeepThinking>,
) -> Json<DeepThinking> {
    state
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .store
        .set_deep_thinking(data.enabled);
    tracing::debug!("Deep thinking set to {}", data.enabled);
    Json(data)
}

/// Create the settings router
pub fn router() -> Router<SharedState> {
    Router::new().route(
        "/deep-thinking",
        get(deep_thinking_get).post(deep_thinking_set),
    )
}
