//! Location extraction from keyword-prefixed lines.

use super::patterns::LOCATION_LINE;
use super::{content_lines, FieldExtractor};

/// Extracts values from lines starting with `Location`, `Address` or `City`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LocationExtractor;

impl FieldExtractor for LocationExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        content_lines(text)
            .into_iter()
            .filter(|line| LOCATION_LINE.is_match(line))
            .map(value_after_colon)
            .collect()
    }
}

/// Text after the first `:` on the line, trimmed. Empty when there is no colon.
///
/// Later colons stay in the value (`Address: Office 2: Tower B` gives
/// `Office 2: Tower B`) instead of cutting at the second colon.
fn value_after_colon(line: &str) -> String {
    line.split_once(':')
        .map(|(_, value)| value.trim().to_string())
        .unwrap_or_default()
}

/// Location from the first keyword-prefixed line.
///
/// The first matching line decides, even when it carries no value.
pub fn extract_location(text: &str) -> Option<String> {
    LocationExtractor.extract(text)
}
