//! Login state for the current user. The history sync only ever reads
//! from it through the `AuthProvider` trait.
use std::sync::{PoisonError, RwLock};

use serde::{Deserialize, Serialize};

use crate::chat::DEFAULT_USER_AVATAR;

pub type UserId = u64;

#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct UserInfo {
    pub user_id: UserId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
}

pub trait AuthProvider: Send + Sync {
    fn token(&self) -> Option<String>;

    fn user_info(&self) -> Option<UserInfo>;

    fn is_authenticated(&self) -> bool {
        self.token().is_some_and(|t| !t.is_empty())
    }

    fn current_user_id(&self) -> Option<UserId> {
        self.user_info().map(|u| u.user_id)
    }

    /// The user's avatar, falling back to a default image when the
    /// user hasn't set one.
    fn avatar_url(&self) -> String {
        self.user_info()
            .and_then(|u| u.avatar)
            .filter(|a| !a.is_empty())
            .unwrap_or_else(|| DEFAULT_USER_AVATAR.to_string())
    }
}

#[derive(Debug, Default)]
struct SessionState {
    token: Option<String>,
    user_info: Option<UserInfo>,
}

/// In-memory login state shared by the server and CLI.
#[derive(Debug, Default)]
pub struct UserSession {
    state: RwLock<SessionState>,
}

impl UserSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn logged_in(token: &str, user_info: UserInfo) -> Self {
        let session = Self::new();
        session.login(token, user_info);
        session
    }

    pub fn login(&self, token: &str, user_info: UserInfo) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token = Some(token.to_string());
        state.user_info = Some(user_info);
    }

    pub fn logout(&self) {
        let mut state = self.state.write().unwrap_or_else(PoisonError::into_inner);
        state.token = None;
        state.user_info = None;
    }
}

impl AuthProvider for UserSession {
    fn token(&self) -> Option<String> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .token
            .clone()
    }

    fn user_info(&self) -> Option<UserInfo> {
        self.state
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .user_info
            .clone()
    }
}
