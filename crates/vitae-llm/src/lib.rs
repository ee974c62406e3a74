//! Generative model abstraction layer for vitae.
//!
//! This crate provides a single request/response contract for asking a chat
//! model to answer through one declared function (tool) call:
//! - [`FunctionCallRequest`] carries the messages and the function schema
//! - [`GenerativeBackend`] is implemented by concrete model clients
//! - `OpenAiBackend` talks to OpenAI-compatible chat completion endpoints

mod backend;
mod error;
mod request;

pub use backend::GenerativeBackend;
pub use error::LlmError;
pub use request::{
    ChatMessage, Completion, FunctionCall, FunctionCallRequest, FunctionSpec, Role, TokenUsage,
    TEMPERATURE,
};

#[cfg(feature = "openai")]
pub use backend::openai::OpenAiBackend;

/// Result type for model operations.
pub type Result<T> = std::result::Result<T, LlmError>;
