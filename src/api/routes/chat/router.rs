//! Router for the chat history API

use std::sync::{Arc, RwLock};

use axum::{
    Json, Router,
    extract::{Path, State},
    http::StatusCode,
    routing::{get, post},
};

use super::public;
use crate::api::public::ApiError;
use crate::api::state::AppState;
use crate::core::ChatStore;

type SharedState = Arc<RwLock<AppState>>;

fn chat_store(state: &SharedState) -> Arc<ChatStore> {
    state
        .read()
        .unwrap_or_else(std::sync::PoisonError::into_inner)
        .store
        .clone()
}

/// Get the cached messages for a session. Sessions that haven't been
/// loaded return an empty list.
async fn chat_messages(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Json<public::ChatMessagesResponse> {
    let messages = chat_store(&state).messages(&session_id);
    Json(public::ChatMessagesResponse {
        session_id,
        messages,
    })
}

/// Reload a session's history from the backend and return what ended
/// up in the cache.
async fn chat_history(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> Result<Json<public::ChatHistoryResponse>, ApiError> {
    let store = chat_store(&state);
    let outcome = store.history().request_history(&session_id).await?;
    let messages = store.messages(&session_id);

    Ok(Json(public::ChatHistoryResponse {
        session_id,
        outcome,
        messages,
    }))
}

/// Drop a session from the cache
async fn chat_remove(
    State(state): State<SharedState>,
    Path(session_id): Path<String>,
) -> StatusCode {
    if chat_store(&state).cache().remove(&session_id) {
        StatusCode::NO_CONTENT
    } else {
        StatusCode::NOT_FOUND
    }
}

/// List the sessions currently cached
async fn chat_sessions(State(state): State<SharedState>) -> Json<public::ChatSessionsResponse> {
    let sessions = chat_store(&state).cache().session_ids();
    Json(public::ChatSessionsResponse { sessions })
}

/// Create the chat router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/sessions", get(chat_sessions))
        .route("/{session_id}", get(chat_messages).delete(chat_remove))
        .route("/{session_id}/history", post(chat_history))
}
