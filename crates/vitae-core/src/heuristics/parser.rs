//! Heuristic resume parser producing the preliminary record.

use std::sync::Arc;
use std::time::Instant;

use tracing::{debug, info};

use crate::models::resume::{Contact, ResumeRecord};

use super::rules::{
    content_lines, extract_email, extract_location, extract_summary,
    name::{derive_name, slugify},
    CapitalizedNameDetector, NameDetector,
};

/// Offline extractor combining regex rules with a person-name detector.
///
/// Never fails: anything that does not match is left at its default. List
/// sections (skills, experience, projects, education) are always empty.
#[derive(Clone)]
pub struct HeuristicExtractor {
    name_detector: Arc<dyn NameDetector>,
}

impl HeuristicExtractor {
    /// Create an extractor using [`CapitalizedNameDetector`].
    pub fn new() -> Self {
        Self {
            name_detector: Arc::new(CapitalizedNameDetector),
        }
    }

    /// Replace the person-name detector.
    pub fn with_name_detector(mut self, detector: Arc<dyn NameDetector>) -> Self {
        self.name_detector = detector;
        self
    }

    /// Build the preliminary record from plain text.
    pub fn extract(&self, text: &str) -> ResumeRecord {
        let start = Instant::now();
        let lines = content_lines(text);
        let mut missing = Vec::new();

        let name = derive_name(self.name_detector.as_ref(), text, &lines);
        if name.is_empty() {
            missing.push("name");
        }

        let title = lines.get(1).map(|l| l.to_string()).unwrap_or_default();
        if title.is_empty() {
            missing.push("title");
        }

        let location = extract_location(text).unwrap_or_default();
        if location.is_empty() {
            missing.push("location");
        }

        let email = extract_email(text).unwrap_or_default();
        if email.is_empty() {
            missing.push("email");
        }

        let description = extract_summary(text).unwrap_or_default();
        if description.is_empty() {
            missing.push("description");
        }

        let record = ResumeRecord {
            slug: slugify(&name),
            name,
            title,
            location,
            description,
            contact: Contact {
                email,
                ..Contact::default()
            },
            ..ResumeRecord::default()
        };

        if !missing.is_empty() {
            debug!("Heuristics left fields empty: {}", missing.join(", "));
        }
        info!(
            "Heuristic extraction completed for slug '{}' ({} lines, {}ms)",
            record.slug,
            lines.len(),
            start.elapsed().as_millis()
        );

        record
    }
}

impl Default for HeuristicExtractor {
    fn default() -> Self {
        Self::new()
    }
}
