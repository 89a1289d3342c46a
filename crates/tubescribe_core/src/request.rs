//! Request and response types for text generation.

use derive_builder::Builder;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// A single-prompt text generation request.
///
/// # Examples
///
/// ```
/// use tubescribe_core::GenerateRequest;
///
/// let request = GenerateRequest::builder()
///     .prompt("write me a youtube video title about rust")
///     .temperature(Some(0.9))
///     .build()
///     .unwrap();
///
/// assert_eq!(*request.temperature(), Some(0.9));
/// assert_eq!(*request.max_tokens(), None);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateRequest {
    /// Fully rendered prompt text
    prompt: String,
    /// Sampling temperature
    #[builder(default)]
    temperature: Option<f32>,
    /// Maximum number of tokens to generate
    #[builder(default)]
    max_tokens: Option<u32>,
    /// Model identifier override
    #[builder(default)]
    model: Option<String>,
}

impl GenerateRequest {
    /// Creates a new builder for `GenerateRequest`.
    pub fn builder() -> GenerateRequestBuilder {
        GenerateRequestBuilder::default()
    }
}

/// Token accounting reported by the provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, Getters)]
pub struct TokenUsage {
    /// Tokens consumed by the prompt
    #[serde(default)]
    prompt_tokens: u32,
    /// Tokens produced by the completion
    #[serde(default)]
    completion_tokens: u32,
    /// Sum of both
    #[serde(default)]
    total_tokens: u32,
}

impl TokenUsage {
    /// Create a usage record.
    pub fn new(prompt_tokens: u32, completion_tokens: u32) -> Self {
        Self {
            prompt_tokens,
            completion_tokens,
            total_tokens: prompt_tokens + completion_tokens,
        }
    }
}

/// Generated text returned by a driver.
///
/// # Examples
///
/// ```
/// use tubescribe_core::GenerateResponse;
///
/// let response = GenerateResponse::builder()
///     .text("10 Rust Tricks You Didn't Know")
///     .build()
///     .unwrap();
///
/// assert_eq!(response.text(), "10 Rust Tricks You Didn't Know");
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Builder, Getters)]
#[builder(setter(into))]
pub struct GenerateResponse {
    /// Generated text
    text: String,
    /// Model that produced the text, if reported
    #[builder(default)]
    model: Option<String>,
    /// Provider finish reason, if reported
    #[builder(default)]
    finish_reason: Option<String>,
    /// Token accounting, if reported
    #[builder(default)]
    usage: Option<TokenUsage>,
}

impl GenerateResponse {
    /// Creates a new builder for `GenerateResponse`.
    pub fn builder() -> GenerateResponseBuilder {
        GenerateResponseBuilder::default()
    }

    /// Consume the response and keep only the text.
    pub fn into_text(self) -> String {
        self.text
    }
}
