//! Conversions between Tubescribe types and the OpenAI wire format.

use super::dto::{ApiErrorBody, CompletionRequest, CompletionResponse};
use tubescribe_core::{GenerateRequest, GenerateResponse};
use tubescribe_error::{ModelsError, ModelsErrorKind, ModelsResult};

/// Build a wire request, filling model and token limit from client defaults
/// when the request does not override them.
pub fn to_completion_request(
    req: &GenerateRequest,
    default_model: &str,
    default_max_tokens: Option<u32>,
) -> ModelsResult<CompletionRequest> {
    CompletionRequest::builder()
        .model(
            req.model()
                .clone()
                .unwrap_or_else(|| default_model.to_string()),
        )
        .prompt(req.prompt().clone())
        .temperature(*req.temperature())
        .max_tokens((*req.max_tokens()).or(default_max_tokens))
        .build()
        .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
}

/// Take the first choice of a completions response.
///
/// Completions often start with blank lines; the text is trimmed.
pub fn from_completion_response(resp: CompletionResponse) -> ModelsResult<GenerateResponse> {
    let choice = resp
        .choices()
        .first()
        .ok_or_else(|| ModelsError::new(ModelsErrorKind::EmptyResponse))?;

    GenerateResponse::builder()
        .text(choice.text().trim())
        .model(resp.model().clone())
        .finish_reason(choice.finish_reason().clone())
        .usage(*resp.usage())
        .build()
        .map_err(|e| ModelsError::new(ModelsErrorKind::Builder(e.to_string())))
}

/// Classify a non-success HTTP response.
///
/// The provider's own message is preferred over the raw body when the body
/// parses as an OpenAI error payload.
pub fn error_from_status(status: u16, body: &str) -> ModelsErrorKind {
    let message = serde_json::from_str::<ApiErrorBody>(body)
        .map(|parsed| parsed.error().message().clone())
        .unwrap_or_else(|_| body.to_string());

    match status {
        401 | 403 => ModelsErrorKind::Unauthorized { status },
        429 => ModelsErrorKind::QuotaExceeded(message),
        _ => ModelsErrorKind::Api { status, message },
    }
}
