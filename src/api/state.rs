// src/api/state.rs
use crate::config::BotConfig;
use reqwest::Client;
use std::sync::Arc;

/// Shared read-only state: configuration resolved once at startup and one
/// reusable HTTP client. Nothing here is mutated across requests.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BotConfig>,
    pub client: Client,
}

impl AppState {
    pub fn new(config: BotConfig) -> Self {
        Self {
            config: Arc::new(config),
            client: Client::new(),
        }
    }
}
