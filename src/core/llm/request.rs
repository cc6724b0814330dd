//! Request body construction and reply extraction for chat completions.

use serde_json::{Value, json};

/// Single-turn body: the system instruction plus one user message. No history is sent.
pub(crate) fn build_body(model: &str, system: &str, prompt: &str) -> Value {
    json!({
        "model": model,
        "messages": [
            { "role": "system", "content": system },
            { "role": "user", "content": prompt },
        ],
    })
}

/// Text content of the first choice's message.
/// Handles both string content and array-of-blocks format.
pub(crate) fn extract_reply(response: &Value) -> Option<String> {
    let content = response
        .get("choices")?
        .as_array()?
        .first()?
        .get("message")?
        .get("content")?;
    if let Some(s) = content.as_str() {
        return Some(s.to_string());
    }
    let text: String = content
        .as_array()?
        .iter()
        .filter_map(|block| block.get("text").and_then(|t| t.as_str()))
        .collect();
    if text.is_empty() { None } else { Some(text) }
}

/// Error message embedded in a 200 response (OpenRouter reports some upstream failures this way).
pub(crate) fn embedded_error(response: &Value) -> Option<String> {
    let err = response.get("error")?;
    Some(
        err.get("message")
            .and_then(|m| m.as_str())
            .unwrap_or("Unknown error")
            .to_string(),
    )
}
