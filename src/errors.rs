// src/errors.rs
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BotError {
    #[error("Candidate answer (prompt) is missing or empty")]
    EmptyPrompt,

    #[error("Gemini API error")]
    ApiError { status: u16, body: String },

    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("Failed to parse JSON response: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Empty response from Gemini")]
    EmptyResponse,
}

pub type Result<T> = std::result::Result<T, BotError>;
