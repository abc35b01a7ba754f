//! The `SpellCheck` client and reply post-processing.
//!
//! Construction validates the configuration, builds the completion-service
//! handle, and resolves the requested language in one round trip — all or
//! nothing, so a `SpellCheck` that exists is always usable. Each
//! [`SpellCheck::correct`] call is one further round trip followed by
//! best-effort stripping of the known reply lead-in phrases.

use std::sync::Arc;

use thiserror::Error;

use crate::config::{ClientConfig, ConfigError};
use crate::llm::client::{CompletionService, LlmError, OpenAiChat};
use crate::llm::{prompt, resolver};

// ---------------------------------------------------------------------------
// Lead-in phrases
// ---------------------------------------------------------------------------

/// Lead-ins the correction examples teach the model to emit. Stripped from
/// the front of the reply when present.
const LEAD_IN_PHRASES: &[&str] = &[
    "La phrase corrigée est : ",
    "Le mot corrigé est : ",
];

/// Lead-ins for already-correct input; these wrap the echoed text in
/// `"…"."`, so the trailing quote-period is stripped as well.
const NO_MISTAKE_PHRASES: &[&str] = &[
    "Il n'y a pas de faute dans le mot \"",
    "Il n'y a pas de faute dans la phrase \"",
];

// ---------------------------------------------------------------------------
// SpellCheckError
// ---------------------------------------------------------------------------

/// Errors surfaced by [`SpellCheck`] construction and invocation.
#[derive(Debug, Error)]
pub enum SpellCheckError {
    /// A parameter failed validation; raised at construction, before any
    /// network use.
    #[error("invalid configuration: {0}")]
    Config(#[from] ConfigError),

    /// The resolver determined the requested language is not a real, known
    /// language. Raised at construction; carries the caller's input.
    #[error("language {input:?} does not exist or is not supported")]
    UnsupportedLanguage { input: String },

    /// The probe reply did not match the `{oui|non},{name}` shape the
    /// few-shot examples pin down. Raised at construction.
    #[error("language resolver returned a malformed reply: {reply:?}")]
    MalformedResolverReply { reply: String },

    /// Transport-level failure from the completion service, passed through
    /// unwrapped and unretried.
    #[error(transparent)]
    Transport(#[from] LlmError),
}

// ---------------------------------------------------------------------------
// SpellCheck
// ---------------------------------------------------------------------------

/// LLM-backed spelling corrector for one language.
///
/// Holds the completion-service handle and the resolved display name of the
/// target language; both are fixed at construction and never mutated, so a
/// client can be shared and called repeatedly.
///
/// # Example
/// ```rust,no_run
/// use spellcheck::SpellCheck;
///
/// #[tokio::main]
/// async fn main() -> Result<(), spellcheck::SpellCheckError> {
///     let api_key = std::env::var("OPENAI_API_KEY").unwrap();
///     let checker = SpellCheck::new(&api_key, "fr").await?;
///     let corrected = checker.correct("coocou").await?;
///     println!("{corrected}");
///     Ok(())
/// }
/// ```
pub struct SpellCheck {
    service: Arc<dyn CompletionService>,
    language: String,
}

impl std::fmt::Debug for SpellCheck {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SpellCheck")
            .field("language", &self.language)
            .finish_non_exhaustive()
    }
}

impl SpellCheck {
    /// Build a client with the default [`ClientConfig`].
    pub async fn new(api_key: &str, language: &str) -> Result<Self, SpellCheckError> {
        Self::with_config(api_key, language, &ClientConfig::default()).await
    }

    /// Build a client with an explicit configuration.
    ///
    /// Validation runs first (no network use), then one probe round trip
    /// resolves `language`. Either failure means no client is produced.
    pub async fn with_config(
        api_key: &str,
        language: &str,
        config: &ClientConfig,
    ) -> Result<Self, SpellCheckError> {
        let service = OpenAiChat::new(api_key, config)?;
        Self::from_service(Arc::new(service), language).await
    }

    /// Build a client on top of an existing completion service.
    ///
    /// This is the seam for alternative transports and for tests, which
    /// script the service instead of calling a live endpoint.
    pub async fn from_service(
        service: Arc<dyn CompletionService>,
        language: &str,
    ) -> Result<Self, SpellCheckError> {
        let resolved = resolver::resolve_language(service.as_ref(), language).await?;
        log::info!("resolved language {language:?} as {resolved:?}");
        Ok(Self {
            service,
            language: resolved,
        })
    }

    /// The resolved display name of the target language.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Correct the spelling of `text`.
    ///
    /// One completion round trip; the reply has its known lead-in phrase
    /// stripped when one matches, and is returned as-is otherwise.
    pub async fn correct(&self, text: &str) -> Result<String, SpellCheckError> {
        let messages = prompt::correction(&self.language, text);
        let reply = self.service.complete(&messages).await?;
        Ok(strip_lead_in(&reply))
    }
}

// ---------------------------------------------------------------------------
// Reply post-processing
// ---------------------------------------------------------------------------

/// Strip the known lead-in phrase from a correction reply.
///
/// Best-effort normalization: a reply matching none of the known phrases is
/// returned unchanged, never treated as an error.
fn strip_lead_in(reply: &str) -> String {
    for phrase in LEAD_IN_PHRASES {
        if let Some(rest) = reply.strip_prefix(phrase) {
            return rest.to_string();
        }
    }
    for phrase in NO_MISTAKE_PHRASES {
        if let Some(rest) = reply.strip_prefix(phrase) {
            let rest = rest.strip_suffix("\".").unwrap_or(rest);
            return rest.to_string();
        }
    }
    reply.to_string()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
