//! Generative model backend implementations.

#[cfg(feature = "openai")]
pub mod openai;

use async_trait::async_trait;

use crate::{Completion, FunctionCallRequest, Result};

/// Trait for generative model backends.
///
/// Implementations send the request once, at temperature
/// [`TEMPERATURE`](crate::TEMPERATURE), with the declared function forced.
/// They do not retry and do not interpret the function arguments.
#[async_trait]
pub trait GenerativeBackend: Send + Sync {
    /// Run a forced function-call completion.
    async fn complete(&self, request: &FunctionCallRequest) -> Result<Completion>;

    /// Identifier of the model used for completions.
    fn model(&self) -> &str;
}
