//! Structural validation of records against [`SchemaNode`] trees.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, info};

use super::{SchemaNode, RESUME_SCHEMA};
use crate::error::ValidationError;
use crate::models::resume::ResumeRecord;

/// A single schema violation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// JSON pointer to the offending value (empty for the root).
    pub path: String,
    pub message: String,
}

impl Violation {
    pub fn new(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            message: message.into(),
        }
    }
}

impl fmt::Display for Violation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let path = if self.path.is_empty() { "/" } else { &self.path };
        write!(f, "{}: {}", path, self.message)
    }
}

fn json_type(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

/// Escape a key for use as a JSON pointer segment.
fn pointer_segment(key: &str) -> String {
    key.replace('~', "~0").replace('/', "~1")
}

fn check(node: &SchemaNode, value: &Value, path: &str, violations: &mut Vec<Violation>) {
    match (node, value) {
        (SchemaNode::String { min_length }, Value::String(s)) => {
            if s.chars().count() < *min_length {
                violations.push(Violation::new(
                    path,
                    format!("must be at least {} character(s) long", min_length),
                ));
            }
        }
        (SchemaNode::Array(items), Value::Array(values)) => {
            for (index, item) in values.iter().enumerate() {
                check(items, item, &format!("{}/{}", path, index), violations);
            }
        }
        (SchemaNode::Object(properties), Value::Object(map)) => {
            for (name, child) in properties {
                let child_path = format!("{}/{}", path, pointer_segment(name));
                match map.get(*name) {
                    Some(child_value) => check(child, child_value, &child_path, violations),
                    None => violations.push(Violation::new(child_path, "is required")),
                }
            }
        }
        (expected, actual) => violations.push(Violation::new(
            path,
            format!(
                "expected {}, found {}",
                expected.type_name(),
                json_type(actual)
            ),
        )),
    }
}

/// Collect every violation of `schema` in `value`.
pub fn collect_violations(schema: &SchemaNode, value: &Value) -> Vec<Violation> {
    let mut violations = Vec::new();
    check(schema, value, "", &mut violations);
    violations
}

/// Validate arbitrary JSON against the resume schema.
pub fn validate_json(value: &Value) -> Result<(), ValidationError> {
    let violations = collect_violations(&RESUME_SCHEMA, value);
    if violations.is_empty() {
        debug!("Record conforms to the resume schema");
        return Ok(());
    }
    Err(ValidationError { violations })
}

/// Validate a typed record, as it will be serialized, against the resume schema.
pub fn validate(record: &ResumeRecord) -> Result<(), ValidationError> {
    let value = serde_json::to_value(record).map_err(|e| ValidationError {
        violations: vec![Violation::new("", format!("record is not serializable: {}", e))],
    })?;
    validate_json(&value)?;
    info!("Resume record '{}' validated successfully", record.slug);
    Ok(())
}
