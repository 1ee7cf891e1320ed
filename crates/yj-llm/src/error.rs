//! Error types for the text generation client.

use yj_core::GenerationError;

/// Result type for client operations.
pub type LlmResult<T> = Result<T, LlmError>;

/// Errors raised while talking to a chat-completions endpoint.
#[derive(Debug, thiserror::Error)]
pub enum LlmError {
    /// No API key was configured.
    #[error("OpenAI API key not set; pass --api-key or set OPENAI_API_KEY")]
    MissingApiKey,

    /// The request could not be sent or the body could not be read.
    #[error("http error: {0}")]
    Http(#[from] reqwest::Error),

    /// The endpoint answered with a non-success status.
    #[error("API error ({status}): {body}")]
    Status {
        /// HTTP status code.
        status: u16,
        /// Response body, truncated.
        body: String,
    },

    /// The response was not the expected JSON shape.
    #[error("malformed response: {0}")]
    MalformedResponse(String),
}

impl From<LlmError> for GenerationError {
    fn from(e: LlmError) -> Self {
        GenerationError::new(e.to_string())
    }
}
