//! Fetching a session's message history and loading it into the cache.
pub mod client;
pub mod sync;

pub use client::{BoxedHistoryFetcher, HistoryFetcher, HistoryRequest, HistoryResponse, HttpHistoryClient};
pub use sync::{HistorySync, SyncOutcome};
