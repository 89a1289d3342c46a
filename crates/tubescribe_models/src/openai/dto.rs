//! OpenAI completions API data transfer objects.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tubescribe_core::TokenUsage;

/// Body of `POST /completions`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct CompletionRequest {
    /// Model identifier
    model: String,
    /// Prompt text
    prompt: String,
    /// Sampling temperature
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    temperature: Option<f32>,
    /// Maximum tokens to generate
    #[builder(default)]
    #[serde(skip_serializing_if = "Option::is_none")]
    max_tokens: Option<u32>,
}

impl CompletionRequest {
    /// Creates a new builder for `CompletionRequest`.
    pub fn builder() -> CompletionRequestBuilder {
        CompletionRequestBuilder::default()
    }
}

/// One generated alternative.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct CompletionChoice {
    /// Generated text
    text: String,
    /// Position in the choices list
    #[serde(default)]
    index: u32,
    /// Why generation stopped
    #[serde(default)]
    finish_reason: Option<String>,
}

/// Body of a successful completions response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Getters)]
pub struct CompletionResponse {
    /// Response identifier
    #[serde(default)]
    id: Option<String>,
    /// Model that served the request
    #[serde(default)]
    model: Option<String>,
    /// Generated alternatives
    #[serde(default)]
    choices: Vec<CompletionChoice>,
    /// Token accounting
    #[serde(default)]
    usage: Option<TokenUsage>,
}

/// Error payload returned with non-success statuses.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ApiErrorBody {
    /// Error details
    error: ApiErrorDetail,
}

/// Details inside an [`ApiErrorBody`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Getters)]
pub struct ApiErrorDetail {
    /// Human-readable message
    message: String,
    /// Error category, e.g. `insufficient_quota`
    #[serde(rename = "type", default)]
    error_type: Option<String>,
    /// Machine-readable code, when given
    #[serde(default)]
    code: Option<String>,
}
