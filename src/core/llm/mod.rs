//! Single-turn chat completion: one system instruction, one user message, one reply.

mod error;
mod request;

use async_openai::Client;
use serde_json::Value;
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::prompts::prompts;

pub use error::{ChatError, map_api_error};

/// What a request is for. Decides the prompt sent and where the reply lands.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RequestKind {
    /// A chat message, forwarded as typed.
    Chat(String),
    /// Quiz generation for a subject.
    Quiz(String),
    /// To-do list generation for a subject.
    Todo(String),
}

impl RequestKind {
    /// User message sent to the model.
    pub fn prompt(&self) -> String {
        match self {
            RequestKind::Chat(message) => message.clone(),
            RequestKind::Quiz(subject) => prompts().quiz_request(subject),
            RequestKind::Todo(subject) => prompts().todo_request(subject),
        }
    }
}

/// Send one chat-completion request and return the raw reply text.
///
/// Races the request against `cancel_token`; a cancelled request returns
/// `ChatError::Cancelled` and its response (if any) is discarded.
pub async fn complete(
    config: &Config,
    model: &str,
    kind: &RequestKind,
    cancel_token: Option<&CancellationToken>,
) -> Result<String, ChatError> {
    if cancel_token.is_some_and(|t| t.is_cancelled()) {
        return Err(ChatError::Cancelled);
    }

    let client = Client::with_config(config.openai_config.clone());
    let prompt = kind.prompt();
    log::debug!("Sending request ({:?}) to {}: {}", kind, model, prompt);

    let body = request::build_body(model, &prompts().system, &prompt);
    let chat_api = client.chat();
    let response_future = chat_api.create_byot::<_, Value>(body);

    let response = if let Some(token) = cancel_token {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                return Err(ChatError::Cancelled);
            }
            result = response_future => result,
        }
    } else {
        response_future.await
    };

    let response = response.map_err(|e| {
        log::warn!("Chat completion failed: {}", e);
        map_api_error(e)
    })?;
    log::debug!("Raw response: {}", response);

    if let Some(msg) = request::embedded_error(&response) {
        log::warn!("API returned an error body: {}", msg);
        return Err(ChatError::ApiMessage(msg));
    }

    request::extract_reply(&response)
        .filter(|text| !text.trim().is_empty())
        .ok_or(ChatError::EmptyResponse)
}
