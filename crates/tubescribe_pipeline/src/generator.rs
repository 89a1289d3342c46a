//! A prompt template bound to a language model, with its own history.

use crate::{ConversationHistory, PromptTemplate};
use std::collections::HashMap;
use tracing::{debug, instrument};
use tubescribe_core::{Credential, GenerateRequest};
use tubescribe_error::{PipelineError, PipelineErrorKind, Stage};
use tubescribe_interface::TubescribeDriver;

/// Sampling temperature for every generation call.
pub const GENERATION_TEMPERATURE: f32 = 0.9;

/// Placeholder holding the topic in the title template.
pub const TOPIC_KEY: &str = "topic";
/// Placeholder holding the title in the script template.
pub const TITLE_KEY: &str = "title";
/// Placeholder holding the lookup text in the script template.
pub const RESEARCH_KEY: &str = "wikipedia_research";

/// Fills a template, calls the model, and records successful exchanges.
#[derive(Debug, Clone)]
pub struct Generator {
    stage: Stage,
    template: PromptTemplate,
    primary_key: &'static str,
    history: ConversationHistory,
}

impl Generator {
    /// A generator for `stage` whose history records the value bound to
    /// `primary_key`.
    pub fn new(stage: Stage, template: PromptTemplate, primary_key: &'static str) -> Self {
        Self {
            stage,
            template,
            primary_key,
            history: ConversationHistory::new(),
        }
    }

    /// Title generator keyed on `topic`.
    pub fn title(template: PromptTemplate) -> Self {
        Self::new(Stage::Title, template, TOPIC_KEY)
    }

    /// Script generator keyed on `title`.
    pub fn script(template: PromptTemplate) -> Self {
        Self::new(Stage::Script, template, TITLE_KEY)
    }

    /// Stage this generator serves.
    pub fn stage(&self) -> Stage {
        self.stage
    }

    /// The template being filled.
    pub fn template(&self) -> &PromptTemplate {
        &self.template
    }

    /// Exchanges recorded so far.
    pub fn history(&self) -> &ConversationHistory {
        &self.history
    }

    /// Renders the template, sends it to `driver`, and returns the output.
    ///
    /// The history grows by one entry only when the call succeeds.
    ///
    /// # Errors
    ///
    /// - [`PipelineErrorKind::TemplateBinding`] when an input is missing
    ///   (no remote call is made)
    /// - [`PipelineErrorKind::GenerationFailure`] when the model call fails
    #[instrument(
        skip(self, driver, credential, inputs),
        fields(stage = %self.stage, provider = driver.provider_name())
    )]
    pub async fn generate<D>(
        &mut self,
        driver: &D,
        credential: &Credential,
        inputs: &HashMap<&str, &str>,
    ) -> Result<String, PipelineError>
    where
        D: TubescribeDriver + ?Sized,
    {
        let prompt = self.template.render(inputs)?;
        debug!(prompt_len = prompt.len(), "Rendered prompt");

        let request = GenerateRequest::builder()
            .prompt(prompt)
            .temperature(Some(GENERATION_TEMPERATURE))
            .build()
            .map_err(|e| self.failure(e.to_string()))?;

        let response = driver
            .generate(credential, &request)
            .await
            .map_err(|e| self.failure(e.to_string()))?;
        let output = response.into_text();

        let primary = inputs.get(self.primary_key).copied().unwrap_or_default();
        self.history.record(primary, output.as_str());
        debug!(output_len = output.len(), entries = self.history.len(), "Recorded exchange");

        Ok(output)
    }

    #[track_caller]
    fn failure(&self, message: String) -> PipelineError {
        PipelineError::new(PipelineErrorKind::GenerationFailure {
            stage: self.stage,
            message,
        })
    }
}
