//! API routes module

pub mod auth;
pub mod chat;
pub mod settings;

use std::sync::{Arc, RwLock};

use crate::api::state::AppState;
use axum::Router;

type SharedState = Arc<RwLock<AppState>>;

/// Create the combined API router
pub fn router() -> Router<SharedState> {
    Router::new()
        // Chat history routes
        .nest("/chat", chat::router())
        // Login state routes
        .nest("/auth", auth::router())
        // UI settings routes
        .nest("/settings", settings::router())
}
