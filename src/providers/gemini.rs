// src/providers/gemini.rs

use reqwest::Client;
use serde_json::json;

use crate::config::BotConfig;
use crate::errors::{BotError, Result};
use crate::providers::LlmProvider;

/// A provider for interacting with Google's Gemini models.
pub struct GeminiProvider {
    client: Client,
    config: BotConfig,
}

impl GeminiProvider {
    /// Creates a new `GeminiProvider`. The client is shared service-wide;
    /// cloning it is cheap (it is an `Arc` internally).
    pub fn new(client: Client, config: BotConfig) -> Self {
        Self { client, config }
    }
}

impl LlmProvider for GeminiProvider {
    /// Calls the Gemini `generateContent` endpoint and returns the decoded
    /// response body. The API key travels in the `x-goog-api-key` header,
    /// never in the URL, so it cannot leak into access logs or caches.
    async fn generate(&self, prompt: &str) -> Result<serde_json::Value> {
        let url = self.config.generate_url();

        log::info!("Calling Gemini at {} with model {}", url, self.config.model);

        let body = json!({
            "contents": [{"parts": [{"text": prompt}]}]
        });

        let resp = self
            .client
            .post(&url)
            .header("x-goog-api-key", &self.config.api_key)
            .header("Accept", "application/json")
            .json(&body)
            .send()
            .await?;

        let status = resp.status();
        log::info!("Gemini response status: {}", status);

        if !status.is_success() {
            let error_body = resp
                .text()
                .await
                .unwrap_or_else(|_| "Could not read error body".to_string());
            return Err(BotError::ApiError {
                status: status.as_u16(),
                body: error_body,
            });
        }

        let text = resp.text().await?;
        if text.trim().is_empty() {
            return Err(BotError::EmptyResponse);
        }

        Ok(serde_json::from_str(&text)?)
    }
}
