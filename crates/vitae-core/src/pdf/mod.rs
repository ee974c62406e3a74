//! Document-to-text conversion.

mod extractor;

pub use extractor::{PdfExtractor, PlainTextExtractor};

use crate::error::ExtractionError;

/// Result type for extraction operations.
pub type Result<T> = std::result::Result<T, ExtractionError>;

/// Trait for text extraction implementations.
///
/// Implementations convert raw document bytes into plain text. Failures are
/// reported once and never retried.
pub trait TextExtractor: Send + Sync {
    /// Extract all obtainable text from `data`.
    fn extract_text(&self, data: &[u8]) -> Result<String>;
}
