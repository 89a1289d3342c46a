//! OpenAI completions client.

use super::conversion::{error_from_status, from_completion_response, to_completion_request};
use super::dto::CompletionResponse;
use async_trait::async_trait;
use reqwest::Client;
use std::time::Duration;
use tubescribe_core::{Credential, GenerateRequest, GenerateResponse};
use tubescribe_error::{ModelsError, ModelsErrorKind, ModelsResult, TubescribeResult};
use tubescribe_interface::TubescribeDriver;
use tracing::{debug, instrument, warn};

/// OpenAI completions API client.
///
/// The client holds no credential; each call is authorized with the one the
/// caller passes in.
#[derive(Debug, Clone)]
pub struct OpenAIClient {
    client: Client,
    base_url: String,
    model: String,
    max_tokens: Option<u32>,
}

impl OpenAIClient {
    /// Creates a new OpenAI client.
    ///
    /// `base_url` is the API root (e.g. `https://api.openai.com/v1`); the
    /// completions path is appended to it.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client cannot be initialized.
    #[instrument(skip_all)]
    pub fn new(
        model: impl Into<String>,
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> ModelsResult<Self> {
        let model = model.into();
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(model = %model, url = %base_url, "Creating OpenAI client");

        let client = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(e.to_string())))?;

        Ok(Self {
            client,
            base_url,
            model,
            max_tokens: None,
        })
    }

    /// Default token limit applied when a request does not set one.
    pub fn with_max_tokens(mut self, max_tokens: Option<u32>) -> Self {
        self.max_tokens = max_tokens;
        self
    }

    /// Full URL of the completions endpoint.
    pub fn completions_url(&self) -> String {
        format!("{}/completions", self.base_url)
    }

    async fn complete(
        &self,
        credential: &Credential,
        req: &GenerateRequest,
    ) -> ModelsResult<GenerateResponse> {
        let body = to_completion_request(req, &self.model, self.max_tokens)?;
        let url = self.completions_url();
        debug!(url = %url, prompt_length = req.prompt().len(), "Sending OpenAI completions request");

        let response = self
            .client
            .post(&url)
            .bearer_auth(credential.expose())
            .json(&body)
            .send()
            .await
            .map_err(|e| ModelsError::new(ModelsErrorKind::Http(format!("Request failed: {}", e))))?;

        let status = response.status();
        if !status.is_success() {
            let error_text = response.text().await.unwrap_or_default();
            let kind = error_from_status(status.as_u16(), &error_text);
            warn!(status = status.as_u16(), error_type = kind.label(), "OpenAI request rejected");
            return Err(ModelsError::new(kind));
        }

        let parsed: CompletionResponse = response.json().await.map_err(|e| {
            ModelsError::new(ModelsErrorKind::ResponseParsing(e.to_string()))
        })?;

        let generated = from_completion_response(parsed)?;
        debug!(
            response_length = generated.text().len(),
            finish_reason = ?generated.finish_reason(),
            "Received OpenAI completion"
        );
        Ok(generated)
    }
}

#[async_trait]
impl TubescribeDriver for OpenAIClient {
    #[instrument(skip(self, credential, req), fields(provider = "openai", model = %self.model))]
    async fn generate(
        &self,
        credential: &Credential,
        req: &GenerateRequest,
    ) -> TubescribeResult<GenerateResponse> {
        self.complete(credential, req).await.map_err(Into::into)
    }

    fn provider_name(&self) -> &'static str {
        "openai"
    }

    fn model_name(&self) -> &str {
        &self.model
    }
}
