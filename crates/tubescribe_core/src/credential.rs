//! Credential handling for the language-model service.
//!
//! The access token is a secret: its `Debug` and `Display` output is a fixed
//! marker so it cannot leak through logs or error messages. Callers reach the
//! raw value only through [`Credential::expose`].

use std::fmt;

const REDACTED: &str = "[REDACTED]";

/// A non-empty access token for the language-model service.
#[derive(Clone, PartialEq, Eq)]
pub struct Credential(String);

impl Credential {
    /// Wrap a token. Returns `None` for empty or whitespace-only input.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubescribe_core::Credential;
    ///
    /// assert!(Credential::new("   ").is_none());
    ///
    /// let key = Credential::new(" sk-test ").unwrap();
    /// assert_eq!(key.expose(), "sk-test");
    /// assert_eq!(format!("{:?}", key), "Credential([REDACTED])");
    /// ```
    pub fn new(token: impl Into<String>) -> Option<Self> {
        let token = token.into();
        let trimmed = token.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(Self(trimmed.to_string()))
        }
    }

    /// The raw token, for building an authorization header.
    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Credential").field(&format_args!("{}", REDACTED)).finish()
    }
}

impl fmt::Display for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(REDACTED)
    }
}

/// Whether the pipeline may reach the language-model service.
///
/// Checked once at pipeline entry; `Disabled` means no remote call of any
/// kind is made.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ApiAccess {
    /// No usable credential was supplied
    Disabled,
    /// A credential is available
    Enabled(Credential),
}

impl ApiAccess {
    /// Build from an optional, possibly blank, token.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubescribe_core::ApiAccess;
    ///
    /// assert_eq!(ApiAccess::from_token(None), ApiAccess::Disabled);
    /// assert_eq!(ApiAccess::from_token(Some("")), ApiAccess::Disabled);
    /// assert!(ApiAccess::from_token(Some("sk-abc")).is_enabled());
    /// ```
    pub fn from_token(token: Option<&str>) -> Self {
        token
            .and_then(Credential::new)
            .map_or(ApiAccess::Disabled, ApiAccess::Enabled)
    }

    /// True when a credential is present.
    pub fn is_enabled(&self) -> bool {
        matches!(self, ApiAccess::Enabled(_))
    }

    /// The credential, if present.
    pub fn credential(&self) -> Option<&Credential> {
        match self {
            ApiAccess::Enabled(credential) => Some(credential),
            ApiAccess::Disabled => None,
        }
    }
}

impl From<Credential> for ApiAccess {
    fn from(credential: Credential) -> Self {
        ApiAccess::Enabled(credential)
    }
}
