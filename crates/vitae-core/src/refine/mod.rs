//! Generative refinement of the preliminary record.

mod prompts;

use std::sync::Arc;

use serde::Deserialize;
use serde_json::Value;
use tracing::{debug, info, warn};
use vitae_llm::{ChatMessage, FunctionCallRequest, FunctionSpec, GenerativeBackend};

use crate::error::{RefinementError, ValidationError, VitaeError};
use crate::models::config::RefinementConfig;
use crate::models::resume::ResumeRecord;
use crate::schema::{collect_violations, resume_json_schema, Violation, RESUME_SCHEMA};

pub use prompts::{refine_prompt, FUNCTION_DESCRIPTION, REFINE_PROMPT, REFINE_SYSTEM};

/// Default name of the function the model must call.
pub const DEFAULT_FUNCTION_NAME: &str = "updateResumeData";

/// Result type for refinement operations.
pub type Result<T> = std::result::Result<T, RefinementError>;

/// Sends the raw text and preliminary record to a generative model and parses
/// the forced function call back into a candidate record.
///
/// One attempt per call. Failures are returned, never papered over with the
/// preliminary record.
#[derive(Clone)]
pub struct Refiner {
    backend: Arc<dyn GenerativeBackend>,
    function_name: String,
}

impl Refiner {
    pub fn new(backend: Arc<dyn GenerativeBackend>) -> Self {
        Self {
            backend,
            function_name: DEFAULT_FUNCTION_NAME.to_string(),
        }
    }

    /// Create a refiner from configuration.
    pub fn from_config(backend: Arc<dyn GenerativeBackend>, config: &RefinementConfig) -> Self {
        Self::new(backend).with_function_name(config.function_name.clone())
    }

    pub fn with_function_name(mut self, name: impl Into<String>) -> Self {
        self.function_name = name.into();
        self
    }

    pub fn function_name(&self) -> &str {
        &self.function_name
    }

    /// Build the forced function-call request.
    pub fn build_request(&self, raw_text: &str, preliminary: &ResumeRecord) -> Result<FunctionCallRequest> {
        let preliminary_json = serde_json::to_string_pretty(preliminary)?;
        let prompt = refine_prompt(&preliminary_json, raw_text);

        Ok(FunctionCallRequest::new(FunctionSpec {
            name: self.function_name.clone(),
            description: FUNCTION_DESCRIPTION.to_string(),
            parameters: resume_json_schema(),
        })
        .with_message(ChatMessage::system(REFINE_SYSTEM))
        .with_message(ChatMessage::user(prompt)))
    }

    /// Refine `preliminary` into a candidate record.
    ///
    /// Call failures and arguments that are not JSON are [`RefinementError`]s.
    /// JSON that does not fit the record shape is a [`ValidationError`]
    /// listing every violation, whatever the validation toggle: a typed
    /// record cannot carry missing keys. Missing icons are not violations.
    pub async fn refine(
        &self,
        raw_text: &str,
        preliminary: &ResumeRecord,
    ) -> crate::error::Result<ResumeRecord> {
        let request = self.build_request(raw_text, preliminary)?;

        info!(
            "Sending refinement request to {} ({} chars of text)",
            self.backend.model(),
            raw_text.len()
        );

        let completion = self
            .backend
            .complete(&request)
            .await
            .map_err(RefinementError::from)?;

        let call = match completion.function_call {
            Some(call) => call,
            None => {
                if let Some(content) = completion.content.as_deref() {
                    warn!(
                        "Model answered with text instead of a function call: {:.120}",
                        content
                    );
                }
                return Err(RefinementError::MissingFunctionCall.into());
            }
        };

        if call.name != self.function_name {
            return Err(RefinementError::UnexpectedFunction {
                expected: self.function_name.clone(),
                actual: call.name,
            }
            .into());
        }

        let arguments: Value =
            serde_json::from_str(&call.arguments).map_err(RefinementError::Payload)?;
        let candidate = candidate_record(arguments).map_err(|e| {
            warn!("Model arguments do not fit the record: {} violation(s)", e.violations.len());
            VitaeError::from(e)
        })?;

        debug!(
            "Candidate record: {} skill categories, {} experience, {} projects, {} education",
            candidate.skills.len(),
            candidate.experience.len(),
            candidate.projects.len(),
            candidate.education.len()
        );
        info!("Refinement successful for slug '{}'", candidate.slug);

        Ok(candidate)
    }
}

/// Convert parsed function arguments into a record.
fn candidate_record(mut arguments: Value) -> std::result::Result<ResumeRecord, ValidationError> {
    fill_missing_icons(&mut arguments);
    match ResumeRecord::deserialize(&arguments) {
        Ok(record) => Ok(record),
        Err(e) => {
            let mut violations = collect_violations(&RESUME_SCHEMA, &arguments);
            if violations.is_empty() {
                violations.push(Violation::new("", e.to_string()));
            }
            Err(ValidationError { violations })
        }
    }
}

/// Give icon-less skill and education entries an empty icon for enrichment to fill.
fn fill_missing_icons(value: &mut Value) {
    if let Some(categories) = value.get_mut("skills").and_then(Value::as_array_mut) {
        for category in categories {
            if let Some(list) = category.get_mut("list").and_then(Value::as_array_mut) {
                list.iter_mut().for_each(default_icon);
            }
        }
    }
    if let Some(entries) = value.get_mut("education").and_then(Value::as_array_mut) {
        entries.iter_mut().for_each(default_icon);
    }
}

fn default_icon(entry: &mut Value) {
    if let Some(object) = entry.as_object_mut() {
        object
            .entry("icon")
            .or_insert_with(|| Value::String(String::new()));
    }
}

/// Build the OpenAI-compatible backend described by `config`.
///
/// The API key is read from the environment variable named in the config.
#[cfg(feature = "openai")]
pub fn openai_backend(config: &RefinementConfig) -> Result<Arc<dyn GenerativeBackend>> {
    let backend = vitae_llm::OpenAiBackend::from_env(&config.api_key_env, config.model.clone())?
        .with_api_base(config.api_base.clone())
        .with_max_tokens(config.max_tokens);
    Ok(Arc::new(backend))
}
