//! Encyclopedia lookup errors.

/// Encyclopedia service error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ResearchErrorKind {
    /// Transport failure reaching the service
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Service answered with a non-success status
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body
        message: String,
    },

    /// Response body did not have the expected shape
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),
}

/// Encyclopedia error with location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Research Error: {} at {}:{}", kind, file, line)]
pub struct ResearchError {
    /// The specific error kind
    pub kind: ResearchErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ResearchError {
    /// Create a new research error.
    #[track_caller]
    pub fn new(kind: ResearchErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for encyclopedia lookups.
pub type ResearchResult<T> = Result<T, ResearchError>;
