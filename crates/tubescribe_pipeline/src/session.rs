//! Per-session orchestration of the title, research and script stages.

use crate::{
    DEFAULT_SCRIPT_TEMPLATE, DEFAULT_TITLE_TEMPLATE, Generator, PipelineOutcome, PipelineResult,
    PromptTemplate, RESEARCH_KEY, TITLE_KEY, TOPIC_KEY,
};
use std::collections::HashMap;
use tracing::{info, instrument, warn};
use tubescribe_core::ApiAccess;
use tubescribe_error::{PipelineError, PipelineErrorKind, Stage};
use tubescribe_interface::{ReferenceSource, TubescribeDriver};

/// Runs topics through the pipeline.
///
/// A session owns both generators, so their histories accumulate across
/// every [`run`](Self::run) on the same session and disappear with it.
///
/// For each run the title call and the lookup are awaited together; the
/// script call waits for both. The lookup always receives the raw topic.
///
/// # Examples
///
/// ```rust,ignore
/// use tubescribe_core::ApiAccess;
/// use tubescribe_pipeline::PipelineSession;
///
/// let mut session = PipelineSession::new(driver, wikipedia);
/// let access = ApiAccess::from_token(std::env::var("OPENAI_API_KEY").ok().as_deref());
/// let outcome = session.run("tide pools", &access).await;
/// ```
pub struct PipelineSession<D, R> {
    driver: D,
    source: R,
    title: Generator,
    script: Generator,
}

impl<D, R> PipelineSession<D, R>
where
    D: TubescribeDriver,
    R: ReferenceSource,
{
    /// A session using the default prompt templates.
    pub fn new(driver: D, source: R) -> Self {
        Self::with_templates(
            driver,
            source,
            PromptTemplate::new("title", DEFAULT_TITLE_TEMPLATE),
            PromptTemplate::new("script", DEFAULT_SCRIPT_TEMPLATE),
        )
    }

    /// A session using custom prompt templates.
    pub fn with_templates(
        driver: D,
        source: R,
        title_template: PromptTemplate,
        script_template: PromptTemplate,
    ) -> Self {
        Self {
            driver,
            source,
            title: Generator::title(title_template),
            script: Generator::script(script_template),
        }
    }

    /// The language-model driver.
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// The reference source.
    pub fn source(&self) -> &R {
        &self.source
    }

    /// Title generator and its history.
    pub fn title_generator(&self) -> &Generator {
        &self.title
    }

    /// Script generator and its history.
    pub fn script_generator(&self) -> &Generator {
        &self.script
    }

    /// Runs one topic.
    ///
    /// Returns [`PipelineOutcome::Disabled`] without any remote call when
    /// `access` carries no credential. Otherwise every stage failure is
    /// captured in the returned [`PipelineResult`]; this never errors.
    #[instrument(skip(self, access), fields(
        provider = self.driver.provider_name(),
        model = self.driver.model_name(),
        source = self.source.source_name(),
    ))]
    pub async fn run(&mut self, topic: &str, access: &ApiAccess) -> PipelineOutcome {
        let Some(credential) = access.credential() else {
            warn!("{}", PipelineErrorKind::MissingCredential);
            return PipelineOutcome::Disabled;
        };

        let Self {
            driver,
            source,
            title,
            script,
        } = self;
        let mut result = PipelineResult::new(topic);

        let title_inputs = HashMap::from([(TOPIC_KEY, topic)]);
        let (title_outcome, lookup_outcome) = tokio::join!(
            title.generate(&*driver, credential, &title_inputs),
            source.lookup(topic),
        );

        match title_outcome {
            Ok(text) => result.set_title(text),
            Err(e) => {
                warn!(stage = %Stage::Title, error = %e.kind, "Title generation failed");
                result.push_failure(Stage::Title, e);
            }
        }

        match lookup_outcome {
            Ok(text) => result.set_research_text(text),
            Err(e) => {
                warn!(stage = %Stage::Research, error = %e, "Lookup failed; continuing without research");
                result.push_failure(
                    Stage::Research,
                    PipelineError::new(PipelineErrorKind::LookupFailure(e.to_string())),
                );
            }
        }

        if result.title().trim().is_empty() {
            if result.failure_for(Stage::Title).is_none() {
                warn!("Model returned an empty title; skipping script");
            }
        } else {
            let script_outcome = {
                let script_inputs = HashMap::from([
                    (TITLE_KEY, result.title().as_str()),
                    (RESEARCH_KEY, result.research_text().as_str()),
                ]);
                script.generate(&*driver, credential, &script_inputs).await
            };
            match script_outcome {
                Ok(text) => result.set_script(text),
                Err(e) => {
                    warn!(stage = %Stage::Script, error = %e.kind, "Script generation failed");
                    result.push_failure(Stage::Script, e);
                }
            }
        }

        result.set_histories(title.history().clone(), script.history().clone());
        info!(
            failures = result.failures().len(),
            title_history = result.title_history().len(),
            script_history = result.script_history().len(),
            "Pipeline run finished"
        );

        PipelineOutcome::Completed(result)
    }
}
