//! Message-only error types (HTTP transport, JSON, configuration).
//!
//! These carry a free-form message plus the location that raised them.

macro_rules! message_error {
    ($(#[$meta:meta])* $name:ident, $label:literal) => {
        $(#[$meta])*
        #[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
        #[display("{}: {} at line {} in {}", $label, message, line, file)]
        pub struct $name {
            /// Error message
            pub message: String,
            /// Line number where the error occurred
            pub line: u32,
            /// File where the error occurred
            pub file: &'static str,
        }

        impl $name {
            /// Create the error at the caller's location.
            #[track_caller]
            pub fn new(message: impl Into<String>) -> Self {
                let location = std::panic::Location::caller();
                Self {
                    message: message.into(),
                    line: location.line(),
                    file: location.file(),
                }
            }
        }
    };
}

message_error!(
    /// Transport-level failure talking to a remote service.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubescribe_error::HttpError;
    ///
    /// let err = HttpError::new("Connection refused");
    /// assert!(err.message.contains("Connection refused"));
    /// assert!(err.to_string().starts_with("HTTP Error"));
    /// ```
    HttpError,
    "HTTP Error"
);

message_error!(
    /// JSON serialization or deserialization failure.
    JsonError,
    "JSON Error"
);

message_error!(
    /// Invalid or unreadable configuration.
    ///
    /// # Examples
    ///
    /// ```
    /// use tubescribe_error::ConfigError;
    ///
    /// let err = ConfigError::new("title template must reference {topic}");
    /// assert!(err.to_string().contains("Configuration Error"));
    /// ```
    ConfigError,
    "Configuration Error"
);

message_error!(
    /// Terminal or file I/O failure.
    IoError,
    "I/O Error"
);
