//! Router for the current user's login state

use std::sync::{Arc, PoisonError, RwLock};

use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
};

use super::public::{AuthStatus, LoginRequest};
use crate::api::state::AppState;
use crate::auth::{AuthProvider, UserSession};

type SharedState = Arc<RwLock<AppState>>;

fn user_session(state: &SharedState) -> Arc<UserSession> {
    state
        .read()
        .unwrap_or_else(PoisonError::into_inner)
        .store
        .session
        .clone()
}

fn status(session: &UserSession) -> AuthStatus {
    AuthStatus {
        authenticated: session.is_authenticated(),
        user_id: session.current_user_id(),
        avatar: session.avatar_url(),
    }
}

async fn auth_status(State(state): State<SharedState>) -> Json<AuthStatus> {
    Json(status(&user_session(&state)))
}

async fn login(
    State(state): State<SharedState>,
    Json(data): Json<LoginRequest>,
) -> impl IntoResponse {
    if data.token.is_empty() {
        return (StatusCode::BAD_REQUEST, "Missing token").into_response();
    }
    let session = user_session(&state);
    session.login(&data.token, data.user_info);
    tracing::info!("Logged in as user {:?}", session.current_user_id());

    Json(status(&session)).into_response()
}

async fn logout(State(state): State<SharedState>) -> Json<AuthStatus> {
    let session = user_session(&state);
    session.logout();
    Json(status(&session))
}

/// Create the auth router
pub fn router() -> Router<SharedState> {
    Router::new()
        .route("/", get(auth_status))
        .route("/login", post(login))
        .route("/logout", post(logout))
}
