//! Public types for the auth API
use serde::{Deserialize, Serialize};

use crate::auth::UserInfo;

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginRequest {
    pub token: String,
    pub user_info: UserInfo,
}

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AuthStatus {
    pub authenticated: bool,
    pub user_id: Option<u64>,
    pub avatar: String,
}
