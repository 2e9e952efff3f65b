//! Ollama generate-endpoint client

use serde::Serialize;
use std::env;
use std::time::Duration;

use crate::error::AiError;

const DEFAULT_MODEL: &str = "llama3";
const DEFAULT_ENDPOINT: &str = "http://localhost:11434/api/generate";
const DEFAULT_TIMEOUT_SECONDS: u64 = 60;

/// Client defaults, normally loaded from the environment.
#[derive(Debug, Clone)]
pub struct OllamaConfig {
    pub model: String,
    pub endpoint: String,
    pub timeout: Duration,
}

impl OllamaConfig {
    /// Read `OLLAMA_MODEL`, `OLLAMA_URL`, and `OLLAMA_TIMEOUT_SECONDS`,
    /// falling back to the built-in defaults for anything unset or
    /// unparseable.
    pub fn from_env() -> Self {
        let model = env::var("OLLAMA_MODEL").unwrap_or_else(|_| DEFAULT_MODEL.to_string());
        let endpoint = env::var("OLLAMA_URL").unwrap_or_else(|_| DEFAULT_ENDPOINT.to_string());
        let timeout_seconds = env::var("OLLAMA_TIMEOUT_SECONDS")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECONDS);
        Self {
            model,
            endpoint,
            timeout: Duration::from_secs(timeout_seconds),
        }
    }
}

impl Default for OllamaConfig {
    fn default() -> Self {
        Self {
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECONDS),
        }
    }
}

/// Per-call overrides; any unset field falls back to the client config.
#[derive(Debug, Clone, Default)]
pub struct GenerateOverrides {
    pub model: Option<String>,
    pub endpoint: Option<String>,
    pub timeout: Option<Duration>,
}

#[derive(Serialize)]
struct GeneratePayload<'a> {
    model: &'a str,
    prompt: &'a str,
    stream: bool,
}

/// Ollama text-completion client
pub struct OllamaClient {
    http: reqwest::Client,
    config: OllamaConfig,
}

impl OllamaClient {
    /// Create a client with the given defaults.
    pub fn new(config: OllamaConfig) -> Self {
        Self {
            http: reqwest::Client::new(),
            config,
        }
    }

    /// Create a client with environment-derived defaults.
    pub fn from_env() -> Self {
        Self::new(OllamaConfig::from_env())
    }

    /// Send a prompt and return the raw completion text.
    ///
    /// A missing `response` field in an otherwise valid body yields an
    /// empty string, which is a success, not an error.
    pub async fn generate(
        &self,
        prompt: &str,
        overrides: &GenerateOverrides,
    ) -> Result<String, AiError> {
        let model = overrides.model.as_deref().unwrap_or(&self.config.model);
        let endpoint = overrides
            .endpoint
            .as_deref()
            .unwrap_or(&self.config.endpoint);
        let timeout = overrides.timeout.unwrap_or(self.config.timeout);

        let payload = GeneratePayload {
            model,
            prompt,
            stream: false,
        };

        let response = self
            .http
            .post(endpoint)
            .json(&payload)
            .timeout(timeout)
            .send()
            .await
            .map_err(|e| classify_send_error(e, timeout))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AiError::UpstreamStatus {
                status: status.as_u16(),
            });
        }

        let body: serde_json::Value =
            response.json().await.map_err(AiError::MalformedResponse)?;
        Ok(body
            .get("response")
            .and_then(serde_json::Value::as_str)
            .unwrap_or_default()
            .to_string())
    }
}

fn classify_send_error(error: reqwest::Error, timeout: Duration) -> AiError {
    if error.is_timeout() {
        AiError::Timeout {
            seconds: timeout.as_secs(),
        }
    } else {
        AiError::Transport(error)
    }
}
