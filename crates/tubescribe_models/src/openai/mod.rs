//! OpenAI completions API client.

mod client;
mod conversion;
mod dto;

pub use client::OpenAIClient;
pub use conversion::{error_from_status, from_completion_response, to_completion_request};
pub use dto::{
    ApiErrorBody, ApiErrorDetail, CompletionChoice, CompletionRequest, CompletionRequestBuilder,
    CompletionResponse,
};
