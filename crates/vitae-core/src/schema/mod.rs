//! Resume record schema and validation.
//!
//! The schema is described once as a [`SchemaNode`] tree. The same tree
//! renders the JSON Schema handed to the generative model and drives the
//! validator, so the two cannot drift apart.

mod validator;

pub use validator::{collect_violations, validate, validate_json, Violation};

use lazy_static::lazy_static;
use serde_json::{json, Map, Value};

/// Shape of one value in the record.
#[derive(Debug, Clone, PartialEq)]
pub enum SchemaNode {
    /// A string with a minimum length in characters.
    String { min_length: usize },
    /// An array whose items all follow the inner node.
    Array(Box<SchemaNode>),
    /// An object; every listed property is required.
    Object(Vec<(&'static str, SchemaNode)>),
}

impl SchemaNode {
    fn string() -> Self {
        SchemaNode::String { min_length: 0 }
    }

    fn non_empty_string() -> Self {
        SchemaNode::String { min_length: 1 }
    }

    fn array(items: SchemaNode) -> Self {
        SchemaNode::Array(Box::new(items))
    }

    fn object(properties: Vec<(&'static str, SchemaNode)>) -> Self {
        SchemaNode::Object(properties)
    }

    fn strings(names: &[&'static str]) -> Self {
        SchemaNode::object(names.iter().map(|n| (*n, SchemaNode::string())).collect())
    }

    /// JSON type name used in messages and in the rendered schema.
    pub fn type_name(&self) -> &'static str {
        match self {
            SchemaNode::String { .. } => "string",
            SchemaNode::Array(_) => "array",
            SchemaNode::Object(_) => "object",
        }
    }

    /// Render as a JSON Schema fragment.
    pub fn to_json_schema(&self) -> Value {
        match self {
            SchemaNode::String { min_length } if *min_length > 0 => {
                json!({"type": "string", "minLength": min_length})
            }
            SchemaNode::String { .. } => json!({"type": "string"}),
            SchemaNode::Array(items) => json!({"type": "array", "items": items.to_json_schema()}),
            SchemaNode::Object(properties) => {
                let mut props = Map::new();
                for (name, node) in properties {
                    props.insert((*name).to_string(), node.to_json_schema());
                }
                let required: Vec<&str> = properties.iter().map(|(name, _)| *name).collect();
                json!({"type": "object", "properties": props, "required": required})
            }
        }
    }
}

fn build_resume_schema() -> SchemaNode {
    SchemaNode::object(vec![
        ("slug", SchemaNode::non_empty_string()),
        ("name", SchemaNode::string()),
        ("title", SchemaNode::string()),
        ("location", SchemaNode::string()),
        ("description", SchemaNode::string()),
        (
            "contact",
            SchemaNode::strings(&["email", "telegram", "linkedin", "github"]),
        ),
        (
            "skills",
            SchemaNode::array(SchemaNode::object(vec![
                ("title", SchemaNode::string()),
                ("list", SchemaNode::array(SchemaNode::strings(&["name", "icon"]))),
            ])),
        ),
        (
            "experience",
            SchemaNode::array(SchemaNode::object(vec![
                ("company", SchemaNode::string()),
                ("location", SchemaNode::string()),
                ("role", SchemaNode::string()),
                ("period", SchemaNode::string()),
                ("description", SchemaNode::string()),
                ("achievements", SchemaNode::array(SchemaNode::string())),
            ])),
        ),
        (
            "projects",
            SchemaNode::array(SchemaNode::object(vec![
                ("name", SchemaNode::string()),
                ("description", SchemaNode::string()),
                ("techStack", SchemaNode::array(SchemaNode::string())),
                ("url", SchemaNode::string()),
            ])),
        ),
        (
            "education",
            SchemaNode::array(SchemaNode::strings(&["icon", "name", "degree", "field", "years"])),
        ),
        ("resume", SchemaNode::strings(&["resumeUrl"])),
    ])
}

lazy_static! {
    /// Schema of the final resume record.
    pub static ref RESUME_SCHEMA: SchemaNode = build_resume_schema();
}

/// The record schema as a draft-07 JSON Schema document.
pub fn resume_json_schema() -> Value {
    let mut schema = RESUME_SCHEMA.to_json_schema();
    if let Value::Object(map) = &mut schema {
        map.insert(
            "$schema".to_string(),
            json!("http://json-schema.org/draft-07/schema#"),
        );
    }
    schema
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_top_level_required_keys() {
        let schema = resume_json_schema();
        assert_eq!(
            schema["required"],
            json!([
                "slug",
                "name",
                "title",
                "location",
                "description",
                "contact",
                "skills",
                "experience",
                "projects",
                "education",
                "resume"
            ])
        );
        assert_eq!(schema["$schema"], "http://json-schema.org/draft-07/schema#");
    }

    #[test]
    fn test_nested_shapes() {
        let schema = resume_json_schema();
        let skill_item = &schema["properties"]["skills"]["items"]["properties"]["list"]["items"];
        assert_eq!(skill_item["required"], json!(["name", "icon"]));
        assert_eq!(
            schema["properties"]["projects"]["items"]["properties"]["techStack"],
            json!({"type": "array", "items": {"type": "string"}})
        );
        assert_eq!(schema["properties"]["resume"]["required"], json!(["resumeUrl"]));
    }

    #[test]
    fn test_slug_requires_content() {
        let schema = resume_json_schema();
        assert_eq!(
            schema["properties"]["slug"],
            json!({"type": "string", "minLength": 1})
        );
        assert_eq!(schema["properties"]["name"], json!({"type": "string"}));
    }

    #[test]
    fn test_lists_have_no_minimum() {
        let schema = resume_json_schema();
        for section in ["skills", "experience", "projects", "education"] {
            assert!(schema["properties"][section].get("minItems").is_none());
        }
    }
}
