//! Contact detail extraction.

use super::patterns::EMAIL;
use super::FieldExtractor;

/// Email address extractor.
#[derive(Debug, Clone, Copy, Default)]
pub struct EmailExtractor;

impl FieldExtractor for EmailExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        EMAIL
            .find_iter(text)
            .map(|m| m.as_str().to_string())
            .collect()
    }
}

/// First email address anywhere in `text`.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL.find(text).map(|m| m.as_str().to_string())
}
