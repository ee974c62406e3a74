//! Person name detection and slug derivation.

use super::content_lines;
use super::patterns::{LETTERS_ONLY_LINE, PERSON_NAME_LINE, WHITESPACE_RUN};

/// Slug used when no name could be derived.
pub const UNKNOWN_SLUG: &str = "unknown";

/// Words that mark a line as a heading, job title or address rather than a person.
const NON_NAME_WORDS: &[&str] = &[
    "about", "academy", "address", "administrator", "analyst", "architect", "avenue",
    "backend", "certifications", "city", "college", "consultant", "contact", "curriculum",
    "data", "designer", "developer", "director", "education", "employment", "engineer",
    "engineering", "experience", "frontend", "full", "history", "institute", "intern",
    "junior", "languages", "lead", "location", "manager", "objective", "officer",
    "principal", "profile", "projects", "references", "resume", "school", "scientist",
    "senior", "skills", "software", "specialist", "stack", "street", "summary",
    "technologies", "university", "vitae", "work",
];

/// Capability that finds a person's name in free text.
pub trait NameDetector: Send + Sync {
    /// First person name found in `text`, if any.
    fn detect(&self, text: &str) -> Option<String>;
}

/// Detects lines made of 2-4 capitalised words that carry no heading or
/// job-title vocabulary.
#[derive(Debug, Clone, Copy, Default)]
pub struct CapitalizedNameDetector;

impl CapitalizedNameDetector {
    fn is_person_line(line: &str) -> bool {
        PERSON_NAME_LINE.is_match(line)
            && !line.split_whitespace().any(|word| {
                let word = word.trim_matches(|c: char| !c.is_alphabetic()).to_lowercase();
                NON_NAME_WORDS.contains(&word.as_str())
            })
    }
}

impl NameDetector for CapitalizedNameDetector {
    fn detect(&self, text: &str) -> Option<String> {
        content_lines(text)
            .into_iter()
            .find(|line| Self::is_person_line(line))
            .map(|line| WHITESPACE_RUN.replace_all(line, " ").into_owned())
    }
}

/// Derive the name: detector first, then the first letters-only line.
pub fn derive_name(detector: &dyn NameDetector, text: &str, lines: &[&str]) -> String {
    detector
        .detect(text)
        .filter(|name| !name.trim().is_empty())
        .or_else(|| {
            lines
                .iter()
                .find(|line| LETTERS_ONLY_LINE.is_match(line))
                .map(|line| line.to_string())
        })
        .unwrap_or_default()
}

/// Lower-case `name` and join its words with `-`; [`UNKNOWN_SLUG`] when empty.
pub fn slugify(name: &str) -> String {
    let name = name.trim();
    if name.is_empty() {
        return UNKNOWN_SLUG.to_string();
    }
    WHITESPACE_RUN.replace_all(&name.to_lowercase(), "-").into_owned()
}
