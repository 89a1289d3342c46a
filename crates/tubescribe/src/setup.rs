//! Wiring configuration into live clients.

use tracing::{debug, instrument};
use tubescribe_error::TubescribeResult;
use tubescribe_models::OpenAIClient;
use tubescribe_pipeline::{PipelineSession, TubescribeConfig};
use tubescribe_research::WikipediaClient;

/// A session backed by OpenAI and Wikipedia.
pub type LiveSession = PipelineSession<OpenAIClient, WikipediaClient>;

/// Builds the clients described by `config` and a fresh session around them.
///
/// No network traffic happens here; the credential is supplied per run.
///
/// # Errors
///
/// Returns an error if either HTTP client cannot be initialized.
#[instrument(skip_all)]
pub fn build_session(config: &TubescribeConfig) -> TubescribeResult<LiveSession> {
    let model = &config.model;
    let driver = OpenAIClient::new(model.model.as_str(), model.base_url.as_str(), model.timeout())?
        .with_max_tokens(model.max_tokens);

    let research = &config.research;
    let source = WikipediaClient::new(
        research.endpoint(),
        research.top_k_results,
        &research.user_agent,
        research.timeout(),
    )?;

    debug!(model = %model.model, endpoint = %research.endpoint(), "Session ready");
    Ok(PipelineSession::with_templates(
        driver,
        source,
        config.templates.title_template(),
        config.templates.script_template(),
    ))
}
