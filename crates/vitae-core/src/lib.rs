//! Core library for résumé parsing.
//!
//! This crate provides:
//! - PDF text extraction (lopdf + pdf-extract)
//! - Offline heuristic extraction of name, title, location, email and summary
//! - Model-based refinement through a forced function call
//! - Deterministic icon enrichment for skills and education
//! - Structural validation against the résumé record schema

pub mod enrich;
pub mod error;
pub mod heuristics;
pub mod models;
pub mod pdf;
pub mod pipeline;
pub mod refine;
pub mod schema;

pub use enrich::{assign_icons, IconTables};
pub use error::{ExtractionError, RefinementError, Result, ValidationError, VitaeError};
pub use heuristics::{CapitalizedNameDetector, HeuristicExtractor, NameDetector};
pub use models::config::{ParseOptions, PdfConfig, RefinementConfig, VitaeConfig};
pub use models::resume::{
    Contact, Education, Experience, Project, ResumeLink, ResumeRecord, Skill, SkillCategory,
};
pub use pdf::{PdfExtractor, PlainTextExtractor, TextExtractor};
pub use pipeline::ResumePipeline;
pub use refine::Refiner;
#[cfg(feature = "openai")]
pub use refine::openai_backend;
pub use schema::{resume_json_schema, validate, validate_json, Violation};

/// Re-export model backend types.
pub use vitae_llm::{Completion, FunctionCallRequest, GenerativeBackend, LlmError};

#[cfg(feature = "openai")]
pub use vitae_llm::OpenAiBackend;
