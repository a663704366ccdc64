use anyhow::{Result, bail};

use crate::core::{AppConfig, ChatStore};
use crate::history::SyncOutcome;

/// Syncs a single session and prints its view messages as JSON.
pub async fn run(session_id: String) -> Result<()> {
    let config = AppConfig::default();
    let store = ChatStore::from_config(&config);

    let outcome = store.sync_history(&session_id).await;
    tracing::info!("History sync for {} finished: {:?}", session_id, outcome);

    if outcome == SyncOutcome::Unauthenticated {
        bail!("Not logged in. Set CHAT_VIEW_TOKEN and CHAT_VIEW_USER_ID");
    }

    let messages = store.messages(&session_id);
    println!("{}", serde_json::to_string_pretty(&messages)?);

    Ok(())
}
