//! OpenAI-compatible text generation for Yijing.
//!
//! Provides [`OpenAiClient`], a blocking chat-completions client that plugs
//! into the engine as a [`yj_core::TextGenerator`].

pub mod client;
pub mod config;
pub mod error;

pub use client::OpenAiClient;
pub use config::LlmConfig;
pub use error::{LlmError, LlmResult};
