//! Turns raw history rows into messages the chat UI can render.
pub mod builder;
pub mod cache;
pub mod models;
pub mod normalize;
pub mod reasoning;

pub use builder::{ViewOptions, build, build_all, build_with};
pub use cache::SessionMessageCache;
pub use models::*;
pub use normalize::normalize;
pub use reasoning::{extract_final, extract_reasoning};
