//! Error types for tg-ai

use thiserror::Error;

/// AI-supplement failures
#[derive(Error, Debug)]
pub enum AiError {
    /// The request did not complete within the configured timeout
    #[error("AI supplement timed out after {seconds}s")]
    Timeout { seconds: u64 },

    /// Transport-level failure (connection refused, DNS, TLS, ...)
    #[error("AI supplement request failed: {0}")]
    Transport(#[source] reqwest::Error),

    /// The endpoint answered with a non-success status
    #[error("AI supplement returned status {status}")]
    UpstreamStatus { status: u16 },

    /// The endpoint answered with a body that is not valid JSON
    #[error("AI supplement returned a malformed response: {0}")]
    MalformedResponse(#[source] reqwest::Error),
}
