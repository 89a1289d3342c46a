//! Pipeline error types.

use serde::{Deserialize, Serialize};

/// A step of the title → research → script pipeline.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
#[serde(rename_all = "lowercase")]
pub enum Stage {
    /// Video title generation
    #[display("title")]
    Title,
    /// Encyclopedia lookup
    #[display("research")]
    Research,
    /// Video script generation
    #[display("script")]
    Script,
}

/// Specific error conditions for pipeline operations.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum PipelineErrorKind {
    /// No access token was supplied for the language model
    #[display("No API key supplied; pipeline is disabled")]
    MissingCredential,
    /// A template placeholder was not bound at call time
    #[display("Template '{}' requires placeholder '{{{}}}' but it was not supplied", template, placeholder)]
    TemplateBinding {
        /// Template name
        template: String,
        /// Missing placeholder name
        placeholder: String,
    },
    /// The language-model call for a stage failed
    #[display("Generation failed at {} stage: {}", stage, message)]
    GenerationFailure {
        /// Stage whose call failed
        stage: Stage,
        /// Underlying failure
        message: String,
    },
    /// The encyclopedia lookup failed
    #[display("Lookup failed: {}", _0)]
    LookupFailure(String),
}

impl PipelineErrorKind {
    /// The stage this error belongs to, when it is tied to one.
    pub fn stage(&self) -> Option<Stage> {
        match self {
            PipelineErrorKind::GenerationFailure { stage, .. } => Some(*stage),
            PipelineErrorKind::LookupFailure(_) => Some(Stage::Research),
            PipelineErrorKind::MissingCredential | PipelineErrorKind::TemplateBinding { .. } => {
                None
            }
        }
    }
}

/// Error type for pipeline operations.
///
/// # Examples
///
/// ```
/// use tubescribe_error::{PipelineError, PipelineErrorKind, Stage};
///
/// let err = PipelineError::new(PipelineErrorKind::GenerationFailure {
///     stage: Stage::Title,
///     message: "quota exceeded".to_string(),
/// });
/// assert!(err.to_string().contains("title stage"));
/// assert_eq!(err.kind.stage(), Some(Stage::Title));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Pipeline Error: {} at line {} in {}", kind, line, file)]
pub struct PipelineError {
    /// The specific error condition
    pub kind: PipelineErrorKind,
    /// Line number where the error occurred
    pub line: u32,
    /// Source file where the error occurred
    pub file: &'static str,
}

impl PipelineError {
    /// Create a new PipelineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: PipelineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
