//! Transcript extraction error types.

/// Kinds of extraction errors.
///
/// Extraction is lenient: a transcript fragment that fails to parse is
/// omitted from the result mapping rather than raising. These kinds
/// cover the failures that cannot be absorbed, such as not being able to
/// read the transcript at all.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum ExtractErrorKind {
    /// The transcript file could not be read
    #[display("Failed to read transcript {}: {}", path, message)]
    TranscriptRead {
        /// Path of the transcript file
        path: String,
        /// Underlying I/O error text
        message: String,
    },
    /// The blank-matching pattern failed to compile
    #[display("Invalid extraction pattern: {}", _0)]
    InvalidPattern(String),
}

/// Extraction error with source location tracking.
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Extract Error: {} at line {} in {}", kind, line, file)]
pub struct ExtractError {
    /// The kind of error that occurred
    pub kind: ExtractErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl ExtractError {
    /// Create a new ExtractError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: ExtractErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
