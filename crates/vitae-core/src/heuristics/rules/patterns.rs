//! Common regex patterns for resume field extraction.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    // Email pattern
    pub static ref EMAIL: Regex = Regex::new(
        r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}"
    ).unwrap();

    // Location line: keyword prefix, value after the first colon
    pub static ref LOCATION_LINE: Regex = Regex::new(
        r"^(?:Location|Address|City)"
    ).unwrap();

    // Summary section header with trailing text on the same line
    pub static ref SUMMARY_HEADER: Regex = Regex::new(
        r"(?i)(?:Summary|Profile|About Me)[:\t ]*([^\r\n]*)"
    ).unwrap();

    // Letters and whitespace only (fallback name line)
    pub static ref LETTERS_ONLY_LINE: Regex = Regex::new(
        r"^[A-Za-z\s]+$"
    ).unwrap();

    // 2-4 capitalised words, each optionally joined by hyphens or apostrophes
    pub static ref PERSON_NAME_LINE: Regex = Regex::new(
        r"^\p{Lu}[\p{L}'’-]*(?:\s+\p{Lu}[\p{L}'’.-]*){1,3}$"
    ).unwrap();

    // Runs of whitespace (slug separator)
    pub static ref WHITESPACE_RUN: Regex = Regex::new(
        r"\s+"
    ).unwrap();
}
