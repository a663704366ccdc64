//! Public types for the chat API
use serde::Serialize;

use crate::chat::ViewMessage;
use crate::history::SyncOutcome;

#[derive(Serialize)]
pub struct ChatMessagesResponse {
    pub session_id: String,
    pub messages: Vec<ViewMessage>,
}

#[derive(Serialize)]
pub struct ChatHistoryResponse {
    pub session_id: String,
    pub outcome: SyncOutcome,
    pub messages: Vec<ViewMessage>,
}

#[derive(Serialize)]
pub struct ChatSessionsResponse {
    pub sessions: Vec<String>,
}
