//! Client settings, defaults, and parameter validation.
//!
//! [`ClientConfig`] carries everything the completion endpoint needs apart
//! from the API key, which is passed alongside and never stored here.
//! Validation runs before any network use, so a misconfigured client fails
//! fast instead of burning an API call.

use serde::{Deserialize, Serialize};
use thiserror::Error;

// ---------------------------------------------------------------------------
// Validation constants
// ---------------------------------------------------------------------------

/// Models the client is allowed to target.
pub const ALLOWED_MODELS: &[&str] = &["gpt-3.5-turbo"];

/// Inclusive bounds on `max_tokens`.
pub const MAX_TOKENS_RANGE: (u32, u32) = (10, 10_000);

/// OpenAI secret keys look like `sk-` + 20 alphanumerics + a fixed marker
/// + 20 alphanumerics.
const API_KEY_PREFIX: &str = "sk-";
const API_KEY_MARKER: &str = "T3BlbkFJT3BlbkFJ";
const API_KEY_SEGMENT_LEN: usize = 20;

// ---------------------------------------------------------------------------
// ConfigError
// ---------------------------------------------------------------------------

/// Everything the parameter validator can reject.
///
/// All variants are raised synchronously at construction time, before any
/// network use, and are recoverable by adjusting the inputs.
#[derive(Debug, Error, PartialEq)]
pub enum ConfigError {
    /// The model is not in [`ALLOWED_MODELS`].
    #[error("model {0:?} is not supported")]
    UnsupportedModel(String),

    /// Temperature outside `[0, 1]` or with more than one decimal digit.
    #[error("temperature must be in [0, 1] with at most one decimal digit, got {0}")]
    InvalidTemperature(f32),

    /// `max_tokens` outside `[10, 10000]`.
    #[error("max_tokens must be in [10, 10000], got {0}")]
    InvalidMaxTokens(u32),

    /// The API key does not look like an OpenAI secret key.
    #[error("the API key does not look like a valid OpenAI secret key")]
    MalformedApiKey,
}

// ---------------------------------------------------------------------------
// ClientConfig
// ---------------------------------------------------------------------------

/// Settings for the chat-completion endpoint.
///
/// Immutable once the client is constructed; [`ClientConfig::validate`]
/// checks every field (plus the API key) against the ranges above.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClientConfig {
    /// Model identifier sent to the API. Must be in [`ALLOWED_MODELS`].
    pub model: String,
    /// Sampling temperature (0.0 – 1.0, one decimal digit).
    pub temperature: f32,
    /// Maximum number of tokens the model may generate per reply.
    pub max_tokens: u32,
    /// Base URL of the API endpoint.
    ///
    /// - OpenAI: `https://api.openai.com`
    /// - Any OpenAI-compatible endpoint works (the wire format is identical).
    pub base_url: String,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            model: "gpt-3.5-turbo".into(),
            temperature: 0.3,
            max_tokens: 1000,
            base_url: "https://api.openai.com".into(),
        }
    }
}

impl ClientConfig {
    /// Validate every parameter plus the API key shape.
    ///
    /// No side effects and no network use; returns the first violation found.
    pub fn validate(&self, api_key: &str) -> Result<(), ConfigError> {
        if !ALLOWED_MODELS.contains(&self.model.as_str()) {
            return Err(ConfigError::UnsupportedModel(self.model.clone()));
        }
        if !temperature_is_valid(self.temperature) {
            return Err(ConfigError::InvalidTemperature(self.temperature));
        }
        let (min, max) = MAX_TOKENS_RANGE;
        if self.max_tokens < min || self.max_tokens > max {
            return Err(ConfigError::InvalidMaxTokens(self.max_tokens));
        }
        if !api_key_is_valid(api_key) {
            return Err(ConfigError::MalformedApiKey);
        }
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// Private helpers
// ---------------------------------------------------------------------------

/// In `[0, 1]` and exactly representable with one decimal digit.
fn temperature_is_valid(temperature: f32) -> bool {
    if !(0.0..=1.0).contains(&temperature) {
        return false;
    }
    (temperature * 10.0).round() / 10.0 == temperature
}

/// Shape check only — `sk-`, twenty alphanumerics, the fixed key marker,
/// twenty more alphanumerics. Says nothing about whether the key is live.
fn api_key_is_valid(api_key: &str) -> bool {
    let Some(rest) = api_key.strip_prefix(API_KEY_PREFIX) else {
        return false;
    };
    if !rest.is_ascii() || rest.len() != API_KEY_SEGMENT_LEN * 2 + API_KEY_MARKER.len() {
        return false;
    }
    let (head, tail) = rest.split_at(API_KEY_SEGMENT_LEN);
    let Some(tail) = tail.strip_prefix(API_KEY_MARKER) else {
        return false;
    };
    head.chars().all(|c| c.is_ascii_alphanumeric())
        && tail.chars().all(|c| c.is_ascii_alphanumeric())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
