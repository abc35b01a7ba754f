//! LLM spell-correction module.
//!
//! This module provides:
//! * [`SpellCheck`] — the correction client (validate → resolve → correct).
//! * [`CompletionService`] — async trait over the chat-completion boundary.
//! * [`OpenAiChat`] — OpenAI-compatible REST implementation of the trait.
//! * [`Message`] / [`Role`] — role-tagged wire types.
//! * Prompt templates in [`prompt`], reply parsing in `resolver`.
//! * [`SpellCheckError`] / [`LlmError`] — client- and transport-level errors.

pub mod client;
pub mod corrector;
pub mod prompt;
pub(crate) mod resolver;

// ---------------------------------------------------------------------------
// Public re-exports
// ---------------------------------------------------------------------------

pub use client::{CompletionService, LlmError, Message, OpenAiChat, Role};
pub use corrector::{SpellCheck, SpellCheckError};
