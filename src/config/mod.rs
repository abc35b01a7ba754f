//! Configuration module for the spell-check client.
//!
//! Provides [`ClientConfig`] (model, sampling and token-limit settings),
//! the allow-list and range constants those settings are validated against,
//! and [`ConfigError`] for everything the validator can reject.

pub mod settings;

pub use settings::{ClientConfig, ConfigError, ALLOWED_MODELS};
