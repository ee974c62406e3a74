//! Error types for the vitae-core library.

use thiserror::Error;

use crate::schema::Violation;

/// Main error type for the vitae pipeline.
///
/// Every variant is fatal to the parse that produced it.
#[derive(Error, Debug)]
pub enum VitaeError {
    /// The document could not be turned into text.
    #[error("extraction error: {0}")]
    Extraction(#[from] ExtractionError),

    /// The generative refinement step failed.
    #[error("refinement error: {0}")]
    Refinement(#[from] RefinementError),

    /// The final record does not conform to the schema.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration error.
    #[error("configuration error: {0}")]
    Config(String),
}

impl VitaeError {
    /// Short, stable label of the failing stage, for operator logs.
    pub fn kind(&self) -> &'static str {
        match self {
            VitaeError::Extraction(_) => "extraction",
            VitaeError::Refinement(_) => "refinement",
            VitaeError::Validation(_) => "validation",
            VitaeError::Io(_) => "io",
            VitaeError::Config(_) => "config",
        }
    }
}

/// Errors related to converting document bytes into text.
#[derive(Error, Debug)]
pub enum ExtractionError {
    /// The bytes are not a parseable PDF.
    #[error("failed to parse PDF: {0}")]
    Parse(String),

    /// The PDF is encrypted and cannot be opened with an empty password.
    #[error("PDF is encrypted")]
    Encrypted,

    /// The PDF has no pages.
    #[error("PDF has no pages")]
    NoPages,

    /// The text extraction capability failed.
    #[error("failed to extract text: {0}")]
    TextExtraction(String),
}

/// Errors related to the generative refinement step.
#[derive(Error, Debug)]
pub enum RefinementError {
    /// The model call itself failed.
    #[error("model call failed: {0}")]
    Backend(#[from] vitae_llm::LlmError),

    /// The model answered without invoking the declared function.
    #[error("no function call in model response")]
    MissingFunctionCall,

    /// The model invoked a function other than the declared one.
    #[error("model called {actual} instead of {expected}")]
    UnexpectedFunction { expected: String, actual: String },

    /// The function arguments are not a valid record.
    #[error("function arguments are not a valid resume record: {0}")]
    Payload(#[from] serde_json::Error),
}

/// Schema conformance failure, carrying every violation found.
#[derive(Error, Debug)]
#[error("record does not match the schema {}", summarize(.violations))]
pub struct ValidationError {
    pub violations: Vec<Violation>,
}

fn summarize(violations: &[Violation]) -> String {
    let details = violations
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join("; ");
    format!("({} violation(s)): {}", violations.len(), details)
}

/// Result type for the vitae library.
pub type Result<T> = std::result::Result<T, VitaeError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_kinds() {
        assert_eq!(VitaeError::from(ExtractionError::NoPages).kind(), "extraction");
        assert_eq!(
            VitaeError::from(RefinementError::MissingFunctionCall).kind(),
            "refinement"
        );
        assert_eq!(VitaeError::Config("bad".to_string()).kind(), "config");
    }

    #[test]
    fn test_validation_error_lists_all_violations() {
        let err = ValidationError {
            violations: vec![
                Violation::new("/slug", "is required"),
                Violation::new("/contact/email", "expected string, found number"),
            ],
        };
        let message = err.to_string();
        assert!(message.contains("2 violation(s)"));
        assert!(message.contains("/slug: is required"));
        assert!(message.contains("/contact/email: expected string, found number"));
    }
}
