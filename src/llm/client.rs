//! `CompletionService` trait and the `OpenAiChat` implementation.
//!
//! `OpenAiChat` calls any OpenAI-compatible `/v1/chat/completions` endpoint.
//! The endpoint, model and sampling parameters come from [`ClientConfig`];
//! nothing is hardcoded. No timeout is set here — a slow call surfaces to
//! the caller on whatever schedule the transport default allows.

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;

use crate::config::ClientConfig;

// ---------------------------------------------------------------------------
// Wire types
// ---------------------------------------------------------------------------

/// Message author, serialized lowercase per the OpenAI wire format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
    Assistant,
}

/// One role-tagged message in a chat exchange.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Message {
    pub role: Role,
    pub content: String,
}

impl Message {
    pub fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }
}

// ---------------------------------------------------------------------------
// LlmError
// ---------------------------------------------------------------------------

/// Errors that can occur talking to the completion service.
#[derive(Debug, Error)]
pub enum LlmError {
    /// HTTP transport or connection error.
    #[error("HTTP request failed: {0}")]
    Request(String),

    /// The transport gave up waiting for a response.
    #[error("completion request timed out")]
    Timeout,

    /// The HTTP response could not be parsed as expected JSON.
    #[error("failed to parse completion response: {0}")]
    Parse(String),

    /// The service returned a reply with no usable text content.
    #[error("completion service returned an empty reply")]
    EmptyReply,
}

impl From<reqwest::Error> for LlmError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            LlmError::Timeout
        } else {
            LlmError::Request(e.to_string())
        }
    }
}

// ---------------------------------------------------------------------------
// CompletionService trait
// ---------------------------------------------------------------------------

/// Async boundary to the chat-completion service.
///
/// Takes an ordered list of role-tagged messages, returns the single text
/// reply. Implementors must be `Send + Sync` so they can be shared as
/// `Arc<dyn CompletionService>`; tests script this trait instead of going
/// over the network.
#[async_trait]
pub trait CompletionService: Send + Sync {
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError>;
}

// ---------------------------------------------------------------------------
// OpenAiChat
// ---------------------------------------------------------------------------

/// Calls an OpenAI-compatible `/v1/chat/completions` endpoint.
///
/// Constructed through [`OpenAiChat::new`], which validates the config and
/// the API key shape first, so a handle with bad parameters never exists.
#[derive(Debug)]
pub struct OpenAiChat {
    client: reqwest::Client,
    api_key: String,
    config: ClientConfig,
}

impl OpenAiChat {
    /// Validate `config` plus `api_key` and build the service handle.
    ///
    /// Fails with [`ConfigError`](crate::config::ConfigError) before any
    /// network use; the HTTP client itself is only constructed on success.
    pub fn new(api_key: &str, config: &ClientConfig) -> Result<Self, crate::config::ConfigError> {
        config.validate(api_key)?;
        Ok(Self {
            client: reqwest::Client::new(),
            api_key: api_key.to_string(),
            config: config.clone(),
        })
    }

    fn request_body(&self, messages: &[Message]) -> serde_json::Value {
        serde_json::json!({
            "model":       self.config.model,
            "messages":    messages,
            "stream":      false,
            "temperature": self.config.temperature,
            "max_tokens":  self.config.max_tokens,
        })
    }
}

#[async_trait]
impl CompletionService for OpenAiChat {
    async fn complete(&self, messages: &[Message]) -> Result<String, LlmError> {
        let url = format!("{}/v1/chat/completions", self.config.base_url);
        log::debug!("POST {url} ({} messages)", messages.len());

        let response = self
            .client
            .post(&url)
            .bearer_auth(&self.api_key)
            .json(&self.request_body(messages))
            .send()
            .await?;

        let json: serde_json::Value = response
            .json()
            .await
            .map_err(|e| LlmError::Parse(e.to_string()))?;

        let reply = json["choices"][0]["message"]["content"]
            .as_str()
            .ok_or(LlmError::EmptyReply)?
            .trim()
            .to_string();

        if reply.is_empty() {
            return Err(LlmError::EmptyReply);
        }

        Ok(reply)
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ConfigError;

    fn well_formed_key() -> String {
        format!("sk-{}T3BlbkFJT3BlbkFJ{}", "A".repeat(20), "B".repeat(20))
    }

    #[test]
    fn new_rejects_bad_parameters_before_any_network_use() {
        let config = ClientConfig {
            max_tokens: 5,
            ..ClientConfig::default()
        };
        let err = OpenAiChat::new(&well_formed_key(), &config).unwrap_err();
        assert_eq!(err, ConfigError::InvalidMaxTokens(5));
    }

    #[test]
    fn new_rejects_malformed_key() {
        let err = OpenAiChat::new("sk-nope", &ClientConfig::default()).unwrap_err();
        assert_eq!(err, ConfigError::MalformedApiKey);
    }

    #[test]
    fn new_builds_with_valid_parameters() {
        let service = OpenAiChat::new(&well_formed_key(), &ClientConfig::default());
        assert!(service.is_ok());
    }

    /// Verify that `OpenAiChat` is object-safe (usable as `dyn CompletionService`).
    #[test]
    fn service_is_object_safe() {
        let service = OpenAiChat::new(&well_formed_key(), &ClientConfig::default()).unwrap();
        let service: Box<dyn CompletionService> = Box::new(service);
        drop(service);
    }

    #[test]
    fn roles_serialize_lowercase() {
        let msg = Message::new(Role::Assistant, "oui,anglais");
        let json = serde_json::to_value(&msg).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "oui,anglais");
    }

    #[test]
    fn request_body_carries_config_and_messages() {
        let config = ClientConfig {
            temperature: 0.5,
            max_tokens: 42,
            ..ClientConfig::default()
        };
        let service = OpenAiChat::new(&well_formed_key(), &config).unwrap();
        let body = service.request_body(&[
            Message::new(Role::System, "instruction"),
            Message::new(Role::User, "eng"),
        ]);

        assert_eq!(body["model"], "gpt-3.5-turbo");
        assert_eq!(body["temperature"], 0.5);
        assert_eq!(body["max_tokens"], 42);
        assert_eq!(body["stream"], false);
        assert_eq!(body["messages"][0]["role"], "system");
        assert_eq!(body["messages"][1]["content"], "eng");
    }
}
