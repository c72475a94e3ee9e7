//! Chat completion client: one request per user turn against the Azure OpenAI deployment.

mod error;

use async_openai::Client;
use async_openai::config::AzureConfig;
use serde_json::{Value, json};
use tokio_util::sync::CancellationToken;

use crate::core::config::Config;
use crate::core::message::{self, Message};
use crate::core::prompts::SYSTEM_PROMPT;

pub use error::{ChatError, map_api_error};

/// Completion length limit per reply.
pub const MAX_TOKENS: u32 = 800;

pub const TEMPERATURE: f32 = 0.7;

/// Parameters for a single chat turn.
pub struct ChatRequest<'a> {
    pub config: &'a Config,
    pub prompt: &'a str,
    /// Previous user/assistant turns, oldest first (without the system prompt).
    pub history: &'a [Message],
    pub cancel_token: Option<CancellationToken>,
}

/// Build the JSON body: system prompt, prior turns, then the new user message.
pub fn build_request_body(history: &[Message], prompt: &str) -> Value {
    let mut messages = Vec::with_capacity(history.len() + 2);
    messages.push(Message::system(SYSTEM_PROMPT));
    messages.extend(history.iter().cloned());
    messages.push(Message::user(prompt));
    json!({
        "messages": messages,
        "max_tokens": MAX_TOKENS,
        "temperature": TEMPERATURE,
    })
}

/// Pull the assistant text out of a completion response.
pub fn extract_reply(response: &Value) -> Result<String, ChatError> {
    response
        .pointer("/choices/0/message")
        .and_then(message::extract_content)
        .filter(|content| !content.trim().is_empty())
        .ok_or(ChatError::EmptyResponse)
}

async fn send(client: &Client<AzureConfig>, body: Value) -> Result<Value, ChatError> {
    let response: Value = client
        .chat()
        .create_byot(body)
        .await
        .map_err(map_api_error)?;
    Ok(response)
}

/// Send one user turn and return the assistant reply text.
pub async fn chat(request: ChatRequest<'_>) -> Result<String, ChatError> {
    let client = Client::with_config(request.config.azure_config.clone());
    let body = build_request_body(request.history, request.prompt);
    log::info!(
        "Sending chat request to {} (deployment {}, api-version {}, {} previous messages)",
        request.config.endpoint,
        request.config.deployment,
        request.config.api_version,
        request.history.len()
    );
    log::debug!("Request body: {}", body);

    let response = match request.cancel_token {
        Some(token) => {
            tokio::select! {
                _ = token.cancelled() => {
                    log::info!("Chat request cancelled");
                    return Err(ChatError::Cancelled);
                }
                result = send(&client, body) => result?,
            }
        }
        None => send(&client, body).await?,
    };
    log::debug!("Response: {}", response);

    extract_reply(&response)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn request_body_orders_system_history_then_prompt() {
        let history = vec![Message::user("سؤال"), Message::assistant("جواب")];
        let body = build_request_body(&history, "سؤال جديد");
        let messages = body["messages"].as_array().unwrap();
        assert_eq!(messages.len(), 4);
        assert_eq!(messages[0]["role"], "system");
        assert_eq!(messages[0]["content"], SYSTEM_PROMPT);
        assert_eq!(messages[1]["content"], "سؤال");
        assert_eq!(messages[2]["role"], "assistant");
        assert_eq!(messages[3]["role"], "user");
        assert_eq!(messages[3]["content"], "سؤال جديد");
        assert_eq!(body["max_tokens"], 800);
        assert!((body["temperature"].as_f64().unwrap() - 0.7).abs() < 1e-6);
    }

    #[test]
    fn extract_reply_reads_first_choice() {
        let response = json!({
            "choices": [{"message": {"role": "assistant", "content": "رخصة السياقة"}}]
        });
        assert_eq!(extract_reply(&response).unwrap(), "رخصة السياقة");
    }

    #[test]
    fn extract_reply_without_choices_is_empty_response() {
        assert!(matches!(
            extract_reply(&json!({"choices": []})),
            Err(ChatError::EmptyResponse)
        ));
        assert!(matches!(
            extract_reply(&json!({"choices": [{"message": {"content": "  "}}]})),
            Err(ChatError::EmptyResponse)
        ));
    }
}
