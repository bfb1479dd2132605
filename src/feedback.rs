// src/feedback.rs
//
// Prompt construction and the deterministic local scorer. The local path is
// what keeps `/bot/chat` usable when no Gemini credential is configured: no
// network, no randomness, same input always gives the same output.

const LOCAL_TIP: &str = "Tip: Expand explanations and include examples.";

/// Build the concise evaluation prompt sent to Gemini. The question and
/// answer are embedded verbatim; the instructions cap the model's reply at
/// 150 words with a fixed four-part structure.
pub fn build_prompt(question: &str, answer: &str) -> String {
    format!(
        "You are an interviewer bot. Evaluate the candidate's answer concisely — total response must not exceed 150 words.\n\
         Structure your response as:\n\
         - Summary (2–3 sentences)\n\
         - Subject Matter Expertise: score 0–10\n\
         - Communication Skills: score 0–10\n\
         - Key Improvement Tip: one short actionable suggestion.\n\
         Do not restate the question; be factual and short.\n\
         \n\
         Question: {question}\n\
         Candidate's Answer: {answer}\n"
    )
}

/// Score an answer without calling the remote API.
///
/// Keyword bonuses are applied first (additive, independent), then a length
/// penalty, then both scores are clamped to 0..=10. Word counting collapses
/// consecutive whitespace and ignores leading/trailing whitespace.
pub fn local_feedback(prompt: &str) -> String {
    if prompt.trim().is_empty() {
        return "No input provided.".to_string();
    }

    let lower = prompt.to_lowercase();
    let word_count = lower.split_whitespace().count();

    let mut expertise: i32 = 5;
    let mut communication: i32 = 5;

    if lower.contains("mongo") {
        expertise += 2;
    }
    if lower.contains("express") {
        expertise += 1;
    }
    if lower.contains("react") {
        expertise += 1;
    }
    if lower.contains("node") {
        expertise += 1;
    }

    if word_count < 5 {
        expertise = (expertise - 3).max(1);
        communication = (communication - 3).max(1);
    } else if word_count < 20 {
        expertise = (expertise - 1).max(1);
    }

    expertise = expertise.clamp(0, 10);
    communication = communication.clamp(0, 10);

    format!(
        "Local feedback (short)\nSubject Matter Expertise: {expertise}/10\nCommunication: {communication}/10\n{LOCAL_TIP}"
    )
}
