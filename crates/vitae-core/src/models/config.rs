//! Configuration structures for the parse pipeline.

use serde::{Deserialize, Serialize};

use crate::error::{Result, VitaeError};

/// Main configuration for vitae.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct VitaeConfig {
    /// Stage toggles.
    pub pipeline: ParseOptions,

    /// PDF processing configuration.
    pub pdf: PdfConfig,

    /// Generative refinement configuration.
    pub refinement: RefinementConfig,
}

/// Per-parse stage toggles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ParseOptions {
    /// Run the generative refinement stage.
    pub use_refinement: bool,

    /// Validate the final record against the schema.
    pub validate: bool,
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self {
            use_refinement: true,
            validate: true,
        }
    }
}

impl ParseOptions {
    /// Heuristics only, no schema validation.
    pub fn offline() -> Self {
        Self {
            use_refinement: false,
            validate: false,
        }
    }

    pub fn with_refinement(mut self, use_refinement: bool) -> Self {
        self.use_refinement = use_refinement;
        self
    }

    pub fn with_validation(mut self, validate: bool) -> Self {
        self.validate = validate;
        self
    }
}

/// PDF processing configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PdfConfig {
    /// Try to open encrypted PDFs with an empty password.
    pub decrypt_empty_password: bool,

    /// Extracted text shorter than this (after trimming) is logged as suspicious.
    pub min_text_length: usize,
}

impl Default for PdfConfig {
    fn default() -> Self {
        Self {
            decrypt_empty_password: true,
            min_text_length: 1,
        }
    }
}

/// Generative model configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RefinementConfig {
    /// Model identifier.
    pub model: String,

    /// Chat completions endpoint base.
    pub api_base: String,

    /// Environment variable holding the API key.
    pub api_key_env: String,

    /// Name of the function the model is forced to call.
    pub function_name: String,

    /// Optional cap on generated tokens.
    pub max_tokens: Option<u32>,
}

impl Default for RefinementConfig {
    fn default() -> Self {
        Self {
            model: "gpt-4-0613".to_string(),
            api_base: "https://api.openai.com/v1".to_string(),
            api_key_env: "OPENAI_API_KEY".to_string(),
            function_name: "updateResumeData".to_string(),
            max_tokens: None,
        }
    }
}

impl VitaeConfig {
    /// Load configuration from a JSON file.
    pub fn from_file(path: &std::path::Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_json::from_str(&content)
            .map_err(|e| VitaeError::Config(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &std::path::Path) -> Result<()> {
        let content =
            serde_json::to_string_pretty(self).map_err(|e| VitaeError::Config(e.to_string()))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Apply `VITAE_*` environment overrides.
    pub fn with_env_overrides(self) -> Result<Self> {
        self.with_overrides(|key| std::env::var(key).ok())
    }

    fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        if let Some(value) = lookup("VITAE_USE_REFINEMENT") {
            self.pipeline.use_refinement = parse_bool("VITAE_USE_REFINEMENT", &value)?;
        }
        if let Some(value) = lookup("VITAE_VALIDATE") {
            self.pipeline.validate = parse_bool("VITAE_VALIDATE", &value)?;
        }
        if let Some(value) = lookup("VITAE_MODEL") {
            self.refinement.model = value;
        }
        if let Some(value) = lookup("VITAE_API_BASE") {
            self.refinement.api_base = value;
        }
        Ok(self)
    }
}

fn parse_bool(key: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        other => Err(VitaeError::Config(format!(
            "{} must be a boolean, got '{}'",
            key, other
        ))),
    }
}
