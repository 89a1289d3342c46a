//! Top-level error wrapper types.

use crate::{
    ConfigError, HttpError, IoError, JsonError, ModelsError, PipelineError, ResearchError,
};

/// Every error condition a Tubescribe crate can surface.
///
/// # Examples
///
/// ```
/// use tubescribe_error::{HttpError, TubescribeError};
///
/// let http_err = HttpError::new("Connection failed");
/// let err: TubescribeError = http_err.into();
/// assert!(format!("{}", err).contains("HTTP Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum TubescribeErrorKind {
    /// HTTP error
    #[from(HttpError)]
    Http(HttpError),
    /// JSON serialization/deserialization error
    #[from(JsonError)]
    Json(JsonError),
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Terminal or file I/O error
    #[from(IoError)]
    Io(IoError),
    /// Language-model provider error
    #[from(ModelsError)]
    Models(ModelsError),
    /// Encyclopedia lookup error
    #[from(ResearchError)]
    Research(ResearchError),
    /// Pipeline error
    #[from(PipelineError)]
    Pipeline(PipelineError),
}

/// Tubescribe error with kind discrimination.
///
/// # Examples
///
/// ```
/// use tubescribe_error::{ConfigError, TubescribeErrorKind, TubescribeResult};
///
/// fn might_fail() -> TubescribeResult<()> {
///     Err(ConfigError::new("Missing field"))?
/// }
///
/// let err = might_fail().unwrap_err();
/// assert!(matches!(err.kind(), TubescribeErrorKind::Config(_)));
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Tubescribe Error: {}", _0)]
pub struct TubescribeError(Box<TubescribeErrorKind>);

impl TubescribeError {
    /// Create a new error from a kind.
    pub fn new(kind: TubescribeErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &TubescribeErrorKind {
        &self.0
    }
}

impl<T> From<T> for TubescribeError
where
    T: Into<TubescribeErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Tubescribe operations.
pub type TubescribeResult<T> = std::result::Result<T, TubescribeError>;
