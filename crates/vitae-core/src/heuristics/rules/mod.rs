//! Rule-based field extractors for resume text.

pub mod contact;
pub mod location;
pub mod name;
pub mod patterns;
pub mod summary;

pub use contact::{extract_email, EmailExtractor};
pub use location::{extract_location, LocationExtractor};
pub use name::{slugify, CapitalizedNameDetector, NameDetector, UNKNOWN_SLUG};
pub use summary::{extract_summary, SummaryExtractor};

/// Trait for field extractors.
pub trait FieldExtractor {
    /// The type of value this extractor produces.
    type Output;

    /// Extract the first occurrence of the field.
    fn extract(&self, text: &str) -> Option<Self::Output> {
        self.extract_all(text).into_iter().next()
    }

    /// Extract all occurrences of the field, in document order.
    fn extract_all(&self, text: &str) -> Vec<Self::Output>;
}

/// Split text into trimmed, non-empty lines.
pub fn content_lines(text: &str) -> Vec<&str> {
    text.lines()
        .map(str::trim)
        .filter(|l| !l.is_empty())
        .collect()
}
