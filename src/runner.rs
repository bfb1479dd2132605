// src/runner.rs
//
// Feedback orchestration: decide between the remote and local paths, drive
// the provider, and normalize whatever comes back. Validation and the
// mapping of errors onto HTTP statuses live in the chat handler.

use reqwest::Client;

use crate::config::BotConfig;
use crate::errors::{BotError, Result};
use crate::extract::extract_text;
use crate::feedback::{build_prompt, local_feedback};
use crate::models::Feedback;
use crate::providers::{GeminiProvider, LlmProvider};

/// Produce feedback for one candidate answer.
///
/// With no API key configured this never touches the network: the
/// deterministic local scorer answers and the result is tagged
/// `local_fallback`. Otherwise a single synchronous call is made to Gemini;
/// no retries, the first failure is surfaced.
pub async fn generate_feedback(
    config: &BotConfig,
    client: &Client,
    question: &str,
    answer: &str,
) -> Result<Feedback> {
    if config.key_missing() {
        log::warn!("Gemini API key not configured; returning fallback feedback.");
        return Ok(Feedback::local(local_feedback(answer)));
    }

    let provider = GeminiProvider::new(client.clone(), config.clone());
    let prompt = build_prompt(question, answer);
    let text = remote_feedback(&provider, &prompt).await?;
    Ok(Feedback::remote(text))
}

/// Run one prompt through a provider and extract the reply text.
///
/// A blank normalized text falls back to the stringified whole body rather
/// than being dropped; a JSON null body is treated as an empty response.
pub async fn remote_feedback(provider: &impl LlmProvider, prompt: &str) -> Result<String> {
    let body = provider.generate(prompt).await?;

    match extract_text(&body) {
        Some(text) if !text.trim().is_empty() => Ok(text),
        Some(_) => Ok(body.to_string()),
        None => Err(BotError::EmptyResponse),
    }
}
