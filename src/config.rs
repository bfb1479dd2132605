// src/config.rs

const DEFAULT_API_BASE: &str = "https://generativelanguage.googleapis.com/v1beta";
const DEFAULT_MODEL: &str = "gemini-1.5-flash";

/// Read-only service configuration, resolved once at startup and passed
/// into the handlers. An unset or blank `api_key` puts the service into
/// local-fallback mode; it never disables the endpoint.
#[derive(Debug, Clone)]
pub struct BotConfig {
    pub api_base: String,
    pub api_key: String,
    pub model: String,
}

impl BotConfig {
    /// Load configuration from environment variables. The caller is expected
    /// to have loaded `.env` first (see `main`); this function only reads the
    /// process environment.
    pub fn from_env() -> Self {
        let api_key = std::env::var("GEMINI_API_KEY").unwrap_or_default();
        let api_base = std::env::var("GEMINI_API_BASE")
            .unwrap_or_else(|_| DEFAULT_API_BASE.to_string());
        let model =
            std::env::var("GEMINI_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());

        BotConfig { api_base, api_key, model }
    }

    /// True when no usable credential is configured and the deterministic
    /// local scorer must answer instead of the remote API.
    pub fn key_missing(&self) -> bool {
        self.api_key.trim().is_empty()
    }

    /// Full `generateContent` endpoint for the configured model, with any
    /// trailing slash on the base stripped.
    pub fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent",
            self.api_base.trim_end_matches('/'),
            self.model
        )
    }
}
