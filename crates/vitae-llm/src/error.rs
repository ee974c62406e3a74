//! Error types for the model layer.

use thiserror::Error;

/// Errors that can occur while talking to a generative model.
#[derive(Error, Debug)]
pub enum LlmError {
    /// Transport-level failure.
    #[cfg(feature = "openai")]
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The API answered with a non-success status.
    #[error("API error (status {status}): {message}")]
    Api { status: u16, message: String },

    /// The response body was not the expected JSON.
    #[error("JSON parse error: {0}")]
    Parse(#[from] serde_json::Error),

    /// The response contained no choices.
    #[error("model returned no choices")]
    EmptyChoices,

    /// No API key was supplied.
    #[error("missing API key: environment variable {0} is not set")]
    MissingApiKey(String),
}
