//! Error types for the divination engine.

use thiserror::Error;

/// Result type for divination operations.
pub type DivinationResult<T> = Result<T, DivinationError>;

/// Errors that can occur while casting or interpreting a hexagram.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DivinationError {
    /// The digit string is not exactly six ASCII digits.
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// A line key has no entry in the hexagram table.
    #[error("unknown hexagram key: {0}")]
    UnknownHexagram(String),

    /// The text generator failed or returned nothing usable.
    #[error("interpretation unavailable: {0}")]
    InterpretationUnavailable(String),
}

/// Failure reported by a [`TextGenerator`](crate::generator::TextGenerator).
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("text generation failed: {message}")]
pub struct GenerationError {
    message: String,
}

impl GenerationError {
    /// Create a generation error with a human-readable message.
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    /// The underlying message.
    pub fn message(&self) -> &str {
        &self.message
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_messages() {
        assert_eq!(
            DivinationError::InvalidInput("12a456".into()).to_string(),
            "invalid input: 12a456"
        );
        assert_eq!(
            DivinationError::UnknownHexagram("1111".into()).to_string(),
            "unknown hexagram key: 1111"
        );
        assert_eq!(
            GenerationError::new("timeout").to_string(),
            "text generation failed: timeout"
        );
    }
}
