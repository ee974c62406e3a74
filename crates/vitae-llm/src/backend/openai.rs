//! OpenAI-compatible chat completions backend with forced tool calls.

use std::fmt;

use async_trait::async_trait;
use reqwest::Client;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::error::LlmError;
use crate::request::{ChatMessage, Completion, FunctionCall, FunctionCallRequest, TokenUsage};
use crate::{GenerativeBackend, Result, TEMPERATURE};

/// Default endpoint base.
pub const DEFAULT_API_BASE: &str = "https://api.openai.com/v1";

/// Backend using the `/chat/completions` endpoint.
#[derive(Clone)]
pub struct OpenAiBackend {
    client: Client,
    api_key: String,
    api_base: String,
    model: String,
    max_tokens: Option<u32>,
}

impl fmt::Debug for OpenAiBackend {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("OpenAiBackend")
            .field("api_key", &"<redacted>")
            .field("api_base", &self.api_base)
            .field("model", &self.model)
            .field("max_tokens", &self.max_tokens)
            .finish()
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: &'a [ChatMessage],
    tools: Vec<ToolDeclaration<'a>>,
    tool_choice: ToolChoice<'a>,
    temperature: f32,
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

#[derive(Debug, Serialize)]
struct ToolDeclaration<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: ToolFunction<'a>,
}

#[derive(Debug, Serialize)]
struct ToolFunction<'a> {
    name: &'a str,
    description: &'a str,
    parameters: &'a Value,
}

#[derive(Debug, Serialize)]
struct ToolChoice<'a> {
    #[serde(rename = "type")]
    kind: &'static str,
    function: ToolChoiceName<'a>,
}

#[derive(Debug, Serialize)]
struct ToolChoiceName<'a> {
    name: &'a str,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
    #[serde(default)]
    usage: Option<Usage>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    #[serde(default)]
    content: Option<String>,
    /// Compatible servers send `null` here alongside a legacy call.
    #[serde(default)]
    tool_calls: Option<Vec<ToolCall>>,
    /// Legacy single function call field.
    #[serde(default)]
    function_call: Option<FunctionCall>,
}

#[derive(Debug, Deserialize)]
struct ToolCall {
    function: FunctionCall,
}

#[derive(Debug, Deserialize)]
struct Usage {
    #[serde(default)]
    prompt_tokens: u32,
    #[serde(default)]
    completion_tokens: u32,
}

#[derive(Debug, Deserialize)]
struct ApiError {
    error: ApiErrorBody,
}

#[derive(Debug, Deserialize)]
struct ApiErrorBody {
    message: String,
}

impl OpenAiBackend {
    /// Create a backend for `model` using `api_key`.
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Result<Self> {
        Ok(Self {
            client: Client::builder().build()?,
            api_key: api_key.into(),
            api_base: DEFAULT_API_BASE.to_string(),
            model: model.into(),
            max_tokens: None,
        })
    }

    /// Create a backend reading the API key from the environment variable `key_var`.
    pub fn from_env(key_var: &str, model: impl Into<String>) -> Result<Self> {
        let api_key = std::env::var(key_var)
            .ok()
            .filter(|k| !k.trim().is_empty())
            .ok_or_else(|| LlmError::MissingApiKey(key_var.to_string()))?;
        Self::new(api_key, model)
    }

    /// Override the endpoint base (for proxies and compatible servers).
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into().trim_end_matches('/').to_string();
        self
    }

    /// Cap the number of generated tokens.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.api_base)
    }

    fn build_body<'a>(&'a self, request: &'a FunctionCallRequest) -> ChatRequest<'a> {
        ChatRequest {
            model: &self.model,
            messages: &request.messages,
            tools: vec![ToolDeclaration {
                kind: "function",
                function: ToolFunction {
                    name: &request.function.name,
                    description: &request.function.description,
                    parameters: &request.function.parameters,
                },
            }],
            tool_choice: ToolChoice {
                kind: "function",
                function: ToolChoiceName {
                    name: &request.function.name,
                },
            },
            temperature: TEMPERATURE,
            max_tokens: self.max_tokens,
        }
    }
}

/// Convert a raw response body into a [`Completion`].
fn parse_completion(body: &str) -> Result<Completion> {
    let response: ChatResponse = serde_json::from_str(body)?;
    let message = response
        .choices
        .into_iter()
        .next()
        .ok_or(LlmError::EmptyChoices)?
        .message;

    let function_call = message
        .tool_calls
        .unwrap_or_default()
        .into_iter()
        .next()
        .map(|call| call.function)
        .or(message.function_call);

    let usage = response
        .usage
        .map(|u| TokenUsage {
            prompt_tokens: u.prompt_tokens,
            completion_tokens: u.completion_tokens,
        })
        .unwrap_or_default();

    Ok(Completion {
        function_call,
        content: message.content,
        usage,
    })
}

#[async_trait]
impl GenerativeBackend for OpenAiBackend {
    async fn complete(&self, request: &FunctionCallRequest) -> Result<Completion> {
        let body = self.build_body(request);

        debug!(
            "Sending chat completion: model={}, messages={}, function={}",
            self.model,
            request.messages.len(),
            request.function_name()
        );

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(&self.api_key)
            .json(&body)
            .send()
            .await?;

        let status = response.status();
        let text = response.text().await?;

        if !status.is_success() {
            let message = serde_json::from_str::<ApiError>(&text)
                .map(|e| e.error.message)
                .unwrap_or(text);
            return Err(LlmError::Api {
                status: status.as_u16(),
                message,
            });
        }

        let completion = parse_completion(&text)?;

        debug!(
            "Chat completion succeeded: prompt_tokens={}, completion_tokens={}, function_call={}",
            completion.usage.prompt_tokens,
            completion.usage.completion_tokens,
            completion.function_call.is_some()
        );

        Ok(completion)
    }

    fn model(&self) -> &str {
        &self.model
    }
}
