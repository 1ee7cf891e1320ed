//! Blocking chat-completions client.
//!
//! Sends the prompt as a single user message and returns the first choice's
//! content. Transport errors, 429 and 5xx responses are retried with
//! exponential backoff; any other 4xx fails immediately.

use std::thread;

use reqwest::StatusCode;
use reqwest::blocking::Client;
use serde::{Deserialize, Serialize};

use yj_core::{GenerationError, TextGenerator};

use crate::config::LlmConfig;
use crate::error::{LlmError, LlmResult};

const MAX_ERROR_BODY: usize = 500;

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    temperature: f32,
    messages: [ChatMessage<'a>; 1],
}

#[derive(Debug, Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Deserialize)]
struct Usage {
    prompt_tokens: u64,
    completion_tokens: u64,
}

/// A [`TextGenerator`] backed by an OpenAI-compatible endpoint.
#[derive(Debug)]
pub struct OpenAiClient {
    http: Client,
    api_key: String,
    config: LlmConfig,
}

impl OpenAiClient {
    /// Build a client. Fails if no API key is configured.
    pub fn new(config: LlmConfig) -> LlmResult<Self> {
        let api_key = config.api_key.clone().ok_or(LlmError::MissingApiKey)?;
        let http = Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            http,
            api_key,
            config,
        })
    }

    /// The configuration this client was built with.
    pub fn config(&self) -> &LlmConfig {
        &self.config
    }

    /// Send `prompt` and return the generated text.
    pub fn complete(&self, prompt: &str) -> LlmResult<String> {
        let endpoint = self.config.endpoint();
        let body = ChatRequest {
            model: &self.config.model,
            temperature: self.config.temperature,
            messages: [ChatMessage {
                role: "user",
                content: prompt,
            }],
        };

        let mut delay = self.config.retry_backoff;
        let mut last_error = None;

        for attempt in 0..=self.config.max_retries {
            if attempt > 0 {
                tracing::warn!(attempt, ?delay, "retrying chat completion");
                thread::sleep(delay);
                delay *= 2;
            }

            tracing::debug!(%endpoint, model = %self.config.model, "sending chat completion");
            let response = match self
                .http
                .post(&endpoint)
                .bearer_auth(&self.api_key)
                .json(&body)
                .send()
            {
                Ok(r) => r,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            let status = response.status();
            let text = match response.text() {
                Ok(t) => t,
                Err(e) => {
                    last_error = Some(LlmError::Http(e));
                    continue;
                }
            };

            if status == StatusCode::TOO_MANY_REQUESTS || status.is_server_error() {
                last_error = Some(status_error(status, &text));
                continue;
            }
            if !status.is_success() {
                return Err(status_error(status, &text));
            }

            return parse_response(&text);
        }

        Err(last_error.unwrap_or_else(|| {
            LlmError::MalformedResponse("no request was attempted".to_string())
        }))
    }
}

impl TextGenerator for OpenAiClient {
    fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        self.complete(prompt).map_err(GenerationError::from)
    }
}

fn status_error(status: StatusCode, body: &str) -> LlmError {
    LlmError::Status {
        status: status.as_u16(),
        body: body.chars().take(MAX_ERROR_BODY).collect(),
    }
}

fn parse_response(text: &str) -> LlmResult<String> {
    let parsed: ChatResponse =
        serde_json::from_str(text).map_err(|e| LlmError::MalformedResponse(e.to_string()))?;

    if let Some(usage) = &parsed.usage {
        tracing::debug!(
            prompt_tokens = usage.prompt_tokens,
            completion_tokens = usage.completion_tokens,
            "token usage"
        );
    }

    parsed
        .choices
        .into_iter()
        .next()
        .ok_or_else(|| LlmError::MalformedResponse("no choices in response".to_string()))?
        .message
        .content
        .ok_or_else(|| LlmError::MalformedResponse("choice has no content".to_string()))
}
