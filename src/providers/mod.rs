// src/providers/mod.rs

use crate::errors::Result;

pub mod gemini;

pub use gemini::GeminiProvider;

/// Seam between the feedback orchestration and the remote model backend.
///
/// The implementation returns the raw decoded response body rather than an
/// extracted string, because the upstream response shape varies by endpoint
/// version and normalization is the caller's concern (see `extract`).
///
/// Note: We're not using async_trait here, so implementers must handle async directly.
pub trait LlmProvider: Send + Sync {
    /// Send one prompt to the backend and return the decoded JSON body of a
    /// successful response.
    fn generate(
        &self,
        prompt: &str,
    ) -> impl std::future::Future<Output = Result<serde_json::Value>> + Send;
}
