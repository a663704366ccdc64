use std::sync::Arc;

use crate::core::ChatStore;

pub struct AppState {
    pub store: Arc<ChatStore>,
}

impl AppState {
    pub fn new(store: Arc<ChatStore>) -> Self {
        Self { store }
    }
}
