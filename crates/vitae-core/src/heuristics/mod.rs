//! Heuristic (offline) field extraction.

mod parser;
pub mod rules;

pub use parser::HeuristicExtractor;
pub use rules::name::{CapitalizedNameDetector, NameDetector};
