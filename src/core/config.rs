use std::env;

use crate::chat::DEFAULT_ASSISTANT_AVATAR;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub history_api_url: String,
    pub assistant_avatar: String,
    pub request_timeout_secs: u64,
    // Optional login used when the server starts so history can be
    // synced without calling the login route first
    pub token: Option<String>,
    pub user_id: Option<u64>,
    pub user_avatar: Option<String>,
}

impl Default for AppConfig {
    fn default() -> Self {
        let history_api_url = env::var("CHAT_VIEW_HISTORY_API_URL")
            .unwrap_or_else(|_| "http://127.0.0.1:8080".to_string());
        let assistant_avatar = env::var("CHAT_VIEW_ASSISTANT_AVATAR")
            .unwrap_or_else(|_| DEFAULT_ASSISTANT_AVATAR.to_string());
        let request_timeout_secs = env::var("CHAT_VIEW_REQUEST_TIMEOUT_SECS")
            .ok()
            .and_then(|s| s.parse().ok())
            .unwrap_or(30);
        let token = env::var("CHAT_VIEW_TOKEN").ok().filter(|s| !s.is_empty());
        let user_id = env::var("CHAT_VIEW_USER_ID")
            .ok()
            .and_then(|s| s.parse().ok());
        let user_avatar = env::var("CHAT_VIEW_USER_AVATAR").ok();

        Self {
            history_api_url,
            assistant_avatar,
            request_timeout_secs,
            token,
            user_id,
            user_avatar,
        }
    }
}
