// src/api/handlers/chat.rs
use actix_web::{web, HttpResponse, Result};
use serde::Deserialize;
use serde_json::json;

use crate::api::AppState;
use crate::errors::BotError;
use crate::redact::mask_secrets;
use crate::runner;

#[derive(Clone, Deserialize)]
pub struct ChatRequest {
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub question: Option<String>,
}

/// `POST /bot/chat` — evaluate a candidate's interview answer.
pub async fn chat(
    state: web::Data<AppState>,
    req: web::Json<ChatRequest>,
) -> Result<HttpResponse> {
    let req = req.into_inner();

    let answer = req.prompt.as_deref().unwrap_or("").trim().to_string();
    if answer.is_empty() {
        return Ok(error_response(&BotError::EmptyPrompt));
    }

    // A missing question still gets feedback; the prompt says so explicitly.
    let question = match &req.question {
        Some(q) => q.trim().to_string(),
        None => "(unknown question)".to_string(),
    };

    match runner::generate_feedback(&state.config, &state.client, &question, &answer).await {
        Ok(feedback) => Ok(HttpResponse::Ok().json(feedback)),
        Err(e) => Ok(error_response(&e)),
    }
}

/// Map an orchestration failure onto the HTTP surface. Upstream bodies are
/// masked before they are logged or echoed; internal failures surface their
/// message only, never a backtrace.
fn error_response(err: &BotError) -> HttpResponse {
    match err {
        BotError::EmptyPrompt => {
            HttpResponse::BadRequest().json(json!({ "error": err.to_string() }))
        }
        BotError::ApiError { status, body } => {
            let masked = mask_secrets(body);
            log::error!("Gemini returned non-2xx: {} body: {}", status, masked);
            HttpResponse::BadGateway().json(json!({
                "error": "Gemini API error",
                "status": status.to_string(),
                "body": masked,
            }))
        }
        BotError::Request(e) => {
            let status = e
                .status()
                .map(|s| s.as_u16().to_string())
                .unwrap_or_else(|| "unknown".to_string());
            let masked = mask_secrets(&e.to_string());
            log::error!("Gemini HTTP error: {} body: {}", status, masked);
            HttpResponse::BadGateway().json(json!({
                "error": "Gemini HTTP error",
                "status": status,
                "body": masked,
            }))
        }
        BotError::EmptyResponse => {
            log::error!("{err}");
            HttpResponse::InternalServerError().json(json!({ "error": err.to_string() }))
        }
        other => {
            log::error!("Unhandled error in /bot/chat: {other}");
            HttpResponse::InternalServerError().json(json!({
                "error": "Internal server error",
                "message": other.to_string(),
            }))
        }
    }
}
