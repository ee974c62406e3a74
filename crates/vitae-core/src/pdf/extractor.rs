//! PDF text extraction using lopdf and pdf-extract.

use lopdf::Document;
use tracing::{debug, trace};

use super::{Result, TextExtractor};
use crate::error::ExtractionError;
use crate::models::config::PdfConfig;

/// PDF text extractor.
///
/// `lopdf` validates the structure and handles empty-password encryption,
/// `pdf-extract` produces the text.
#[derive(Debug, Clone)]
pub struct PdfExtractor {
    decrypt_empty_password: bool,
}

impl PdfExtractor {
    /// Create a new PDF extractor.
    pub fn new() -> Self {
        Self {
            decrypt_empty_password: true,
        }
    }

    /// Create an extractor from configuration.
    pub fn from_config(config: &PdfConfig) -> Self {
        Self::new().with_empty_password_decryption(config.decrypt_empty_password)
    }

    /// Set whether encrypted PDFs are opened with an empty password.
    pub fn with_empty_password_decryption(mut self, decrypt: bool) -> Self {
        self.decrypt_empty_password = decrypt;
        self
    }

    /// Load the document and return bytes that `pdf-extract` can read.
    fn prepare(&self, data: &[u8]) -> Result<(Vec<u8>, usize)> {
        let mut doc = Document::load_mem(data).map_err(|e| ExtractionError::Parse(e.to_string()))?;

        let raw = if doc.is_encrypted() {
            if !self.decrypt_empty_password || doc.decrypt("").is_err() {
                return Err(ExtractionError::Encrypted);
            }
            debug!("Decrypted PDF with empty password");

            let mut decrypted = Vec::new();
            doc.save_to(&mut decrypted)
                .map_err(|e| ExtractionError::Parse(format!("failed to save decrypted PDF: {}", e)))?;
            decrypted
        } else {
            data.to_vec()
        };

        let page_count = doc.get_pages().len();
        if page_count == 0 {
            return Err(ExtractionError::NoPages);
        }

        Ok((raw, page_count))
    }
}

impl Default for PdfExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl TextExtractor for PdfExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        trace!("Loading PDF from {} bytes", data.len());
        let (raw, page_count) = self.prepare(data)?;

        let text = pdf_extract::extract_text_from_mem(&raw)
            .map_err(|e| ExtractionError::TextExtraction(e.to_string()))?;

        debug!("Extracted {} chars of text from {} page(s)", text.len(), page_count);
        Ok(text)
    }
}

/// Extractor for inputs that are already plain UTF-8 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainTextExtractor;

impl TextExtractor for PlainTextExtractor {
    fn extract_text(&self, data: &[u8]) -> Result<String> {
        String::from_utf8(data.to_vec())
            .map_err(|e| ExtractionError::TextExtraction(format!("input is not UTF-8: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rejects_non_pdf_bytes() {
        let err = PdfExtractor::new()
            .extract_text(b"definitely not a pdf")
            .unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }

    #[test]
    fn test_rejects_empty_input() {
        let err = PdfExtractor::new().extract_text(&[]).unwrap_err();
        assert!(matches!(err, ExtractionError::Parse(_)));
    }

    #[test]
    fn test_from_config() {
        let config = PdfConfig {
            decrypt_empty_password: false,
            ..PdfConfig::default()
        };
        assert!(!PdfExtractor::from_config(&config).decrypt_empty_password);
    }

    #[test]
    fn test_plain_text_passthrough() {
        let text = PlainTextExtractor.extract_text("Jane Doe\nEngineer".as_bytes()).unwrap();
        assert_eq!(text, "Jane Doe\nEngineer");
    }

    #[test]
    fn test_plain_text_rejects_invalid_utf8() {
        let err = PlainTextExtractor.extract_text(&[0xff, 0xfe, 0x00]).unwrap_err();
        assert!(matches!(err, ExtractionError::TextExtraction(_)));
    }
}
