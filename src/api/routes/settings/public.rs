//! Public types for the settings API
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize)]
pub struct DeepThinking {
    pub enabled: bool,
}
