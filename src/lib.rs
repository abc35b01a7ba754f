//! LLM-backed spelling correction.
//!
//! All of the correction intelligence is delegated to a remote chat-style
//! completion service; this crate owns the narrow engineering around that
//! call: parameter validation before any API spend, a one-shot round trip
//! that resolves a language identifier into its canonical display name, a
//! deterministic few-shot correction prompt, and best-effort stripping of
//! the model's known reply boilerplate.
//!
//! # Quick start
//!
//! ```rust,no_run
//! use spellcheck::SpellCheck;
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let api_key = std::env::var("OPENAI_API_KEY")?;
//!
//!     // Validates parameters, then resolves "fr" in one round trip.
//!     let checker = SpellCheck::new(&api_key, "fr").await?;
//!
//!     // One round trip per correction.
//!     println!("{}", checker.correct("coocou").await?);
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod llm;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use config::{ClientConfig, ConfigError};
pub use llm::{CompletionService, LlmError, Message, Role, SpellCheck, SpellCheckError};
