//! Judge port
//!
//! Defines the interface for the automated scorers that rate an answer.

use async_trait::async_trait;
use thiserror::Error;

/// Errors that can occur during a judge call
#[derive(Error, Debug)]
pub enum JudgeError {
    #[error("Connection error: {0}")]
    ConnectionError(String),

    #[error("Judge returned HTTP {status}: {body}")]
    HttpStatus { status: u16, body: String },

    #[error("Timeout")]
    Timeout,

    #[error("Invalid response: {0}")]
    InvalidResponse(String),

    #[error("Missing API key (set {0})")]
    MissingApiKey(String),

    #[error("Other error: {0}")]
    Other(String),
}

impl JudgeError {
    pub fn is_timeout(&self) -> bool {
        matches!(self, JudgeError::Timeout)
    }
}

/// A judge turns a prompt into unstructured text.
///
/// Implementations make exactly one attempt per call. The caller bounds
/// the call with its own timeout and treats any error as "no result".
#[async_trait]
pub trait Judge: Send + Sync {
    /// Identifier used in logs and transcripts (typically the model id)
    fn name(&self) -> &str;

    /// Send the prompt and return the raw reply text
    async fn invoke(&self, prompt: &str) -> Result<String, JudgeError>;
}
