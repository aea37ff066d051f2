//! Reasoning engine error types.

/// Kinds of reasoning engine failures.
///
/// Any engine failure aborts the entire in-flight request: the session's
/// remaining steps are abandoned and no partial artifact is persisted.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum EngineErrorKind {
    /// The completion request could not be sent
    #[display("Engine request failed: {}", _0)]
    Request(String),
    /// The engine did not answer within the configured timeout
    #[display("Engine call timed out after {}s", _0)]
    Timeout(u64),
    /// The engine endpoint returned a non-success status
    #[display("Engine API error {}: {}", status, message)]
    Api {
        /// HTTP status code
        status: u16,
        /// Error body returned by the endpoint
        message: String,
    },
    /// The completion payload could not be decoded
    #[display("Malformed engine response: {}", _0)]
    MalformedResponse(String),
    /// The engine returned a completion with no text content
    #[display("Engine returned an empty completion")]
    EmptyCompletion,
    /// API key missing from the environment
    #[display("Engine API key not set: {}", _0)]
    MissingApiKey(String),
}

/// Engine error with source location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{EngineError, EngineErrorKind};
///
/// let err = EngineError::new(EngineErrorKind::Timeout(120));
/// assert!(format!("{}", err).contains("timed out"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Engine Error: {} at line {} in {}", kind, line, file)]
pub struct EngineError {
    /// The kind of error that occurred
    pub kind: EngineErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl EngineError {
    /// Create a new EngineError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: EngineErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
