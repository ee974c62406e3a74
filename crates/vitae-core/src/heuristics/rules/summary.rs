//! Profile description extraction.

use super::patterns::SUMMARY_HEADER;
use super::FieldExtractor;

/// Extracts text following a `Summary`, `Profile` or `About Me` header.
#[derive(Debug, Clone, Copy, Default)]
pub struct SummaryExtractor;

impl FieldExtractor for SummaryExtractor {
    type Output = String;

    fn extract_all(&self, text: &str) -> Vec<String> {
        SUMMARY_HEADER
            .captures_iter(text)
            .map(|caps| caps[1].trim().to_string())
            .collect()
    }
}

/// Description from the first summary header in `text`.
pub fn extract_summary(text: &str) -> Option<String> {
    SummaryExtractor.extract(text)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_summary_same_line() {
        assert_eq!(
            extract_summary("Summary: Builds backend systems."),
            Some("Builds backend systems.".to_string())
        );
    }

    #[test]
    fn test_header_case_insensitive() {
        assert_eq!(
            extract_summary("ABOUT ME  - curious engineer"),
            Some("- curious engineer".to_string())
        );
        assert_eq!(
            extract_summary("profile:\tDistributed systems"),
            Some("Distributed systems".to_string())
        );
    }

    #[test]
    fn test_header_alone_on_line_yields_empty() {
        assert_eq!(
            extract_summary("Summary\nBuilds backend systems."),
            Some(String::new())
        );
    }

    #[test]
    fn test_no_header() {
        assert_eq!(extract_summary("Experience\nAcme Corp"), None);
    }
}
