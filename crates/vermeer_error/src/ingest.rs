//! Log and template ingestion error types.

/// Kinds of ingestion errors.
///
/// Ingestion errors are non-fatal at the file level: the offending file is
/// skipped and processing continues with the remaining files. Callers surface
/// an all-files-failed outcome separately.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, derive_more::Display)]
pub enum IngestErrorKind {
    /// A log source could not be read
    #[display("Failed to read log source {}: {}", path, message)]
    SourceRead {
        /// Path of the source file
        path: String,
        /// Underlying I/O error text
        message: String,
    },
    /// A template file could not be read
    #[display("Failed to read template {}: {}", path, message)]
    TemplateRead {
        /// Path of the template file
        path: String,
        /// Underlying I/O error text
        message: String,
    },
    /// A path is neither a file nor a directory
    #[display("Path is neither a file nor a directory: {}", _0)]
    InvalidPath(String),
}

/// Ingestion error with source location tracking.
///
/// # Examples
///
/// ```
/// use vermeer_error::{IngestError, IngestErrorKind};
///
/// let err = IngestError::new(IngestErrorKind::InvalidPath("/no/such".to_string()));
/// assert!(format!("{}", err).contains("/no/such"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Ingest Error: {} at line {} in {}", kind, line, file)]
pub struct IngestError {
    /// The kind of error that occurred
    pub kind: IngestErrorKind,
    /// Line number where error was created
    pub line: u32,
    /// File where error was created
    pub file: &'static str,
}

impl IngestError {
    /// Create a new IngestError with automatic location tracking.
    #[track_caller]
    pub fn new(kind: IngestErrorKind) -> Self {
        let location = std::panic::Location::caller();
        Self {
            kind,
            line: location.line(),
            file: location.file(),
        }
    }
}
