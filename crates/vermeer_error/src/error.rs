//! Top-level error wrapper types.

use crate::{ConfigError, EngineError, ExtractError, IngestError, StorageError};

/// Foundation error enum for the Vermeer workspace.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerError, ConfigError};
///
/// let cfg_err = ConfigError::new("missing log_block_size");
/// let err: VermeerError = cfg_err.into();
/// assert!(format!("{}", err).contains("Configuration Error"));
/// ```
#[derive(Debug, derive_more::From, derive_more::Display, derive_more::Error)]
pub enum VermeerErrorKind {
    /// Configuration error
    #[from(ConfigError)]
    Config(ConfigError),
    /// Log or template ingestion error
    #[from(IngestError)]
    Ingest(IngestError),
    /// Reasoning engine error
    #[from(EngineError)]
    Engine(EngineError),
    /// Transcript extraction error
    #[from(ExtractError)]
    Extract(ExtractError),
    /// Artifact storage error
    #[from(StorageError)]
    Storage(StorageError),
}

/// Vermeer error with kind discrimination.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, ConfigError};
///
/// fn might_fail() -> VermeerResult<()> {
///     Err(ConfigError::new("missing field"))?
/// }
///
/// match might_fail() {
///     Ok(_) => println!("Success"),
///     Err(e) => println!("Error: {}", e),
/// }
/// ```
#[derive(Debug, derive_more::Display, derive_more::Error)]
#[display("Vermeer Error: {}", _0)]
pub struct VermeerError(Box<VermeerErrorKind>);

impl VermeerError {
    /// Create a new error from a kind.
    pub fn new(kind: VermeerErrorKind) -> Self {
        Self(Box::new(kind))
    }

    /// Get the error kind.
    pub fn kind(&self) -> &VermeerErrorKind {
        &self.0
    }
}

// Generic From implementation for any type that converts to VermeerErrorKind
impl<T> From<T> for VermeerError
where
    T: Into<VermeerErrorKind>,
{
    fn from(err: T) -> Self {
        Self::new(err.into())
    }
}

/// Result type for Vermeer operations.
///
/// # Examples
///
/// ```
/// use vermeer_error::{VermeerResult, StorageError, StorageErrorKind};
///
/// fn persist() -> VermeerResult<String> {
///     Err(StorageError::new(StorageErrorKind::FileWrite("read-only".to_string())))?
/// }
/// ```
pub type VermeerResult<T> = std::result::Result<T, VermeerError>;
