//! Request and response types for forced function calls.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Sampling temperature used for every request. Not configurable.
pub const TEMPERATURE: f32 = 0.0;

/// Author of a chat message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    System,
    User,
}

/// A single chat message.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
}

impl ChatMessage {
    pub fn system(content: impl Into<String>) -> Self {
        Self {
            role: Role::System,
            content: content.into(),
        }
    }

    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
        }
    }
}

/// Declaration of the function the model must call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionSpec {
    pub name: String,
    pub description: String,
    /// JSON Schema of the function arguments.
    pub parameters: Value,
}

/// A request that forces the model to answer through `function`.
#[derive(Debug, Clone)]
pub struct FunctionCallRequest {
    pub messages: Vec<ChatMessage>,
    pub function: FunctionSpec,
}

impl FunctionCallRequest {
    pub fn new(function: FunctionSpec) -> Self {
        Self {
            messages: Vec::new(),
            function,
        }
    }

    pub fn with_message(mut self, message: ChatMessage) -> Self {
        self.messages.push(message);
        self
    }

    /// Name of the function the model is forced to call.
    pub fn function_name(&self) -> &str {
        &self.function.name
    }
}

/// A function invocation emitted by the model.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FunctionCall {
    pub name: String,
    /// Raw JSON-encoded arguments, exactly as the model produced them.
    pub arguments: String,
}

/// Token accounting reported by the backend.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenUsage {
    pub prompt_tokens: u32,
    pub completion_tokens: u32,
}

/// What the model sent back.
///
/// `function_call` is `None` when the model ignored the forced call and
/// answered with prose instead.
#[derive(Debug, Clone, Default)]
pub struct Completion {
    pub function_call: Option<FunctionCall>,
    pub content: Option<String>,
    pub usage: TokenUsage,
}

impl Completion {
    /// Completion carrying only a function call.
    pub fn from_call(name: impl Into<String>, arguments: impl Into<String>) -> Self {
        Self {
            function_call: Some(FunctionCall {
                name: name.into(),
                arguments: arguments.into(),
            }),
            ..Self::default()
        }
    }

    /// Completion carrying only text content.
    pub fn from_text(content: impl Into<String>) -> Self {
        Self {
            content: Some(content.into()),
            ..Self::default()
        }
    }
}
