//! Results of a pipeline run.

use crate::ConversationHistory;
use derive_getters::Getters;
use serde::{Serialize, Serializer};
use tubescribe_error::{PipelineError, Stage};

/// A stage that did not produce output, and why.
#[derive(Debug, Clone, Getters)]
pub struct StageFailure {
    stage: Stage,
    error: PipelineError,
}

impl StageFailure {
    /// Pairs an error with the stage it stopped.
    pub fn new(stage: Stage, error: PipelineError) -> Self {
        Self { stage, error }
    }

    /// Error description without source location.
    pub fn message(&self) -> String {
        self.error.kind.to_string()
    }
}

impl Serialize for StageFailure {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("StageFailure", 2)?;
        state.serialize_field("stage", &self.stage)?;
        state.serialize_field("message", &self.message())?;
        state.end()
    }
}

/// Everything one run produced.
///
/// Text fields are empty when their stage failed or was skipped. The
/// histories are snapshots taken when the run finished.
#[derive(Debug, Clone, Default, Serialize, Getters)]
pub struct PipelineResult {
    topic: String,
    title: String,
    research_text: String,
    script: String,
    title_history: ConversationHistory,
    script_history: ConversationHistory,
    failures: Vec<StageFailure>,
}

impl PipelineResult {
    pub(crate) fn new(topic: impl Into<String>) -> Self {
        Self {
            topic: topic.into(),
            ..Self::default()
        }
    }

    pub(crate) fn set_title(&mut self, title: String) {
        self.title = title;
    }

    pub(crate) fn set_research_text(&mut self, research_text: String) {
        self.research_text = research_text;
    }

    pub(crate) fn set_script(&mut self, script: String) {
        self.script = script;
    }

    pub(crate) fn set_histories(&mut self, title: ConversationHistory, script: ConversationHistory) {
        self.title_history = title;
        self.script_history = script;
    }

    pub(crate) fn push_failure(&mut self, stage: Stage, error: PipelineError) {
        self.failures.push(StageFailure::new(stage, error));
    }

    /// Failure recorded for `stage`, if any.
    pub fn failure_for(&self, stage: Stage) -> Option<&StageFailure> {
        self.failures.iter().find(|f| f.stage == stage)
    }

    /// True when every stage produced output.
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty() && !self.title.is_empty() && !self.script.is_empty()
    }
}

/// Result of [`PipelineSession::run`](crate::PipelineSession::run).
#[derive(Debug, Clone, Serialize)]
#[serde(tag = "status", content = "result", rename_all = "lowercase")]
pub enum PipelineOutcome {
    /// No credential was supplied; nothing ran
    Disabled,
    /// The pipeline ran; individual stages may still have failed
    Completed(PipelineResult),
}

impl PipelineOutcome {
    /// The run's result, unless the pipeline was disabled.
    pub fn result(&self) -> Option<&PipelineResult> {
        match self {
            PipelineOutcome::Disabled => None,
            PipelineOutcome::Completed(result) => Some(result),
        }
    }

    /// True for [`PipelineOutcome::Disabled`].
    pub fn is_disabled(&self) -> bool {
        matches!(self, PipelineOutcome::Disabled)
    }
}
