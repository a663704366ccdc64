use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use crate::auth::{UserInfo, UserSession};
use crate::chat::{SessionMessageCache, ViewMessage, ViewOptions};
use crate::history::{BoxedHistoryFetcher, HistorySync, HttpHistoryClient, SyncOutcome};

use super::AppConfig;

/// Process-wide chat state read by the UI: cached messages per session
/// plus the deep thinking toggle.
pub struct ChatStore {
    pub session: Arc<UserSession>,
    history: HistorySync,
    deep_thinking: AtomicBool,
}

impl ChatStore {
    pub fn new(
        session: Arc<UserSession>,
        fetcher: BoxedHistoryFetcher,
        opts: ViewOptions,
    ) -> Self {
        let cache = Arc::new(SessionMessageCache::with_options(opts));
        let history = HistorySync::new(fetcher, session.clone(), cache);
        Self {
            session,
            history,
            deep_thinking: AtomicBool::new(false),
        }
    }

    /// Wires up the HTTP history client and the login from `config`.
    pub fn from_config(config: &AppConfig) -> Self {
        let session = Arc::new(UserSession::new());
        match (&config.token, config.user_id) {
            (Some(token), Some(user_id)) => {
                session.login(
                    token,
                    UserInfo {
                        user_id,
                        avatar: config.user_avatar.clone(),
                    },
                );
            }
            (Some(_), None) => {
                tracing::warn!("Ignoring configured token because no user ID is set");
            }
            _ => {}
        }

        let fetcher = Arc::new(HttpHistoryClient::new(
            &config.history_api_url,
            Duration::from_secs(config.request_timeout_secs),
            session.clone(),
        ));
        let opts = ViewOptions {
            assistant_avatar: config.assistant_avatar.clone(),
        };

        Self::new(session, fetcher, opts)
    }

    pub fn history(&self) -> &HistorySync {
        &self.history
    }

    pub fn cache(&self) -> &Arc<SessionMessageCache> {
        self.history.cache()
    }

    pub fn messages(&self, session_id: &str) -> Vec<ViewMessage> {
        self.cache().get(session_id)
    }

    /// Syncs a session and waits for it to finish. Use
    /// `HistorySync::request_history` to run it in the background.
    pub async fn sync_history(&self, session_id: &str) -> SyncOutcome {
        self.history.sync(session_id).await
    }

    pub fn is_deep_thinking(&self) -> bool {
        self.deep_thinking.load(Ordering::Relaxed)
    }

    pub fn set_deep_thinking(&self, value: bool) {
        self.deep_thinking.store(value, Ordering::Relaxed);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auth::AuthProvider;

    fn config() -> AppConfig {
        AppConfig {
            history_api_url: "http://127.0.0.1:1".to_string(),
            assistant_avatar: "https://example.com/bot.png".to_string(),
            request_timeout_secs: 1,
            token: Some("tok".to_string()),
            user_id: Some(5),
            user_avatar: None,
        }
    }

    #[test]
    fn test_from_config_logs_in() {
        let store = ChatStore::from_config(&config());
        assert!(store.session.is_authenticated());
        assert_eq!(store.session.current_user_id(), Some(5));
    }

    #[test]
    fn test_from_config_requires_user_id() {
        let store = ChatStore::from_config(&AppConfig {
            user_id: None,
            ..config()
        });
        assert!(!store.session.is_authenticated());
    }

    #[test]
    fn test_deep_thinking_toggle() {
        let store = ChatStore::from_config(&config());
        assert!(!store.is_deep_thinking());
        store.set_deep_thinking(true);
        assert!(store.is_deep_thinking());
        store.set_deep_thinking(false);
        assert!(!store.is_deep_thinking());
    }

    #[tokio::test]
    async fn test_unreachable_backend_leaves_cache_empty() {
        let store = ChatStore::from_config(&config());
        assert_eq!(store.sync_history("s1").await, SyncOutcome::Failed);
        assert!(store.messages("s1").is_empty());
    }
}
