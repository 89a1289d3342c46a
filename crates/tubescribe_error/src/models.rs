//! Language-model provider errors.

/// Language-model provider error conditions.
#[derive(Debug, Clone, PartialEq, Eq, Hash, derive_more::Display)]
pub enum ModelsErrorKind {
    /// No API key was supplied to the client
    #[display("API key not provided")]
    MissingApiKey,

    /// Request never reached the provider or the connection dropped
    #[display("HTTP error: {}", _0)]
    Http(String),

    /// Provider rejected the credential (401/403)
    #[display("Unauthorized ({}): check the API key", status)]
    Unauthorized {
        /// HTTP status code
        status: u16,
    },

    /// Provider reported rate limiting or an exhausted quota (429)
    #[display("Quota exceeded: {}", _0)]
    QuotaExceeded(String),

    /// Any other non-success response
    #[display("API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Response body or provider message
        message: String,
    },

    /// Response body did not have the expected shape
    #[display("Failed to parse response: {}", _0)]
    ResponseParsing(String),

    /// Provider answered without any completion choices
    #[display("Response contained no completion choices")]
    EmptyResponse,

    /// Request/response builder failure
    #[display("Builder error: {}", _0)]
    Builder(String),
}

impl ModelsErrorKind {
    /// Short label used when logging failures.
    pub fn label(&self) -> &'static str {
        match self {
            ModelsErrorKind::MissingApiKey | ModelsErrorKind::Unauthorized { .. } => "auth",
            ModelsErrorKind::QuotaExceeded(_) => "quota",
            ModelsErrorKind::Http(_) => "network",
            ModelsErrorKind::Api { .. } => "api",
            ModelsErrorKind::ResponseParsing(_) | ModelsErrorKind::EmptyResponse => {
                "malformed_response"
            }
            ModelsErrorKind::Builder(_) => "invalid_request",
        }
    }
}

/// Model provider error with location tracking.
///
/// # Examples
///
/// ```
/// use tubescribe_error::{ModelsError, ModelsErrorKind};
///
/// let err = ModelsError::new(ModelsErrorKind::Unauthorized { status: 401 });
/// assert!(err.to_string().contains("Unauthorized"));
/// assert_eq!(err.kind.label(), "auth");
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Models Error: {} at {}:{}", kind, file, line)]
pub struct ModelsError {
    /// The specific error kind
    pub kind: ModelsErrorKind,
    /// Line number where error occurred
    pub line: u32,
    /// Source file where error occurred
    pub file: &'static str,
}

impl ModelsError {
    /// Create a new models error.
    #[track_caller]
    pub fn new(kind: ModelsErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}

/// Result type for model operations.
pub type ModelsResult<T> = Result<T, ModelsError>;
