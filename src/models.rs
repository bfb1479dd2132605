// src/models.rs
use serde::Serialize;

/// Body of a successful `/bot/chat` response. `note` is only present on the
/// local-fallback path so remote and local feedback stay distinguishable to
/// the caller.
#[derive(Serialize, Clone, Debug, PartialEq)]
pub struct Feedback {
    pub answer: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
}

impl Feedback {
    pub fn remote(answer: String) -> Self {
        Feedback { answer, note: None }
    }

    pub fn local(answer: String) -> Self {
        Feedback {
            answer,
            note: Some("local_fallback".to_string()),
        }
    }
}
