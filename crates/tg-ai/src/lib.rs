//! tg-ai - Ollama text-completion client
//!
//! The AI supplement is an opaque, optionally-invoked text producer:
//! the caller sends a prompt, gets raw text back, and never parses it.
//! Network failure and timeout are distinct, fail-fast errors; a
//! successful-but-empty response is not an error. No retries here -
//! retry policy belongs to the caller.

pub mod client;
pub mod error;

pub use client::{GenerateOverrides, OllamaClient, OllamaConfig};
pub use error::AiError;
