mod config;
mod store;
pub use config::AppConfig;
pub use store::ChatStore;
