use std::sync::Arc;

use serde::Serialize;
use tokio::task::JoinHandle;

use super::client::{BoxedHistoryFetcher, HistoryRequest};
use crate::auth::AuthProvider;
use crate::chat::SessionMessageCache;

/// What a single sync did. Returned for logging and tests only, a
/// failed sync is never surfaced as an error.
#[derive(Clone, Copy, Serialize, Debug, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "status", content = "count")]
pub enum SyncOutcome {
    /// Nobody is logged in so nothing was fetched
    Unauthenticated,
    /// The backend returned no rows, the cache was left alone
    Empty,
    /// The session was replaced with this many messages
    Updated(usize),
    /// The fetch failed, the cache was left alone
    Failed,
}

/// Loads a session's history from the backend into the message cache.
///
/// Each call is independent: there's no retry and no de-duplication of
/// concurrent calls for the same session. Whichever finishes last wins.
#[derive(Clone)]
pub struct HistorySync {
    fetcher: BoxedHistoryFetcher,
    auth: Arc<dyn AuthProvider>,
    cache: Arc<SessionMessageCache>,
}

impl HistorySync {
    pub fn new(
        fetcher: BoxedHistoryFetcher,
        auth: Arc<dyn AuthProvider>,
        cache: Arc<SessionMessageCache>,
    ) -> Self {
        Self {
            fetcher,
            auth,
            cache,
        }
    }

    pub fn cache(&self) -> &Arc<SessionMessageCache> {
        &self.cache
    }

    pub async fn sync(&self, session_id: &str) -> SyncOutcome {
        if !self.auth.is_authenticated() {
            tracing::debug!("Skipping history sync for {}: not logged in", session_id);
            return SyncOutcome::Unauthenticated;
        }

        let req = HistoryRequest {
            session_id: session_id.to_string(),
            user_id: self.auth.current_user_id(),
        };

        match self.fetcher.fetch_history(&req).await {
            Ok(resp) if resp.rows.is_empty() => SyncOutcome::Empty,
            Ok(resp) => {
                // Read the avatar after the fetch so a login change
                // while waiting is picked up
                let avatar = self.auth.avatar_url();
                self.cache.set(session_id, &resp.rows, &avatar);
                SyncOutcome::Updated(resp.rows.len())
            }
            Err(e) => {
                tracing::error!("Failed to fetch history for session {}: {}", session_id, e);
                SyncOutcome::Failed
            }
        }
    }

    /// Fire-and-forget entry point for the UI. The sync runs on its own
    /// task and can't be cancelled once started.
    pub fn request_history(&self, session_id: &str) -> JoinHandle<SyncOutcome> {
        let this = self.clone();
        let session_id = session_id.to_string();
        tokio::spawn(async move { this.sync(&session_id).await })
    }
}
