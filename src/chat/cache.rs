use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};

use super::builder::{ViewOptions, build_all};
use super::models::{RawMessage, ViewMessage};

/// View-ready messages for each chat session, keyed by session ID.
///
/// Writes replace a session's entire list, they never merge. When two
/// writers race for the same session the last one wins.
#[derive(Debug, Default)]
pub struct SessionMessageCache {
    sessions: RwLock<HashMap<String, Vec<ViewMessage>>>,
    opts: ViewOptions,
}

impl SessionMessageCache {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_options(opts: ViewOptions) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            opts,
        }
    }

    /// Builds a view message for every row and stores the list for
    /// `session_id`, replacing whatever was there before.
    pub fn set(&self, session_id: &str, rows: &[RawMessage], avatar: &str) {
        // Build outside of the lock
        let messages = build_all(rows, avatar, &self.opts);
        tracing::debug!(
            "Caching {} messages for session {}",
            messages.len(),
            session_id
        );
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(session_id.to_string(), messages);
    }

    /// Returns the cached messages for `session_id` or an empty list if
    /// the session hasn't been loaded.
    pub fn get(&self, session_id: &str) -> Vec<ViewMessage> {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(session_id)
            .cloned()
            .unwrap_or_default()
    }

    /// Drops a session from the cache. Returns true if it was cached.
    pub fn remove(&self, session_id: &str) -> bool {
        self.sessions
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .remove(session_id)
            .is_some()
    }

    pub fn session_ids(&self) -> Vec<String> {
        let mut ids: Vec<String> = self
            .sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .keys()
            .cloned()
            .collect();
        ids.sort();
        ids
    }

    pub fn len(&self) -> usize {
        self.sessions
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
