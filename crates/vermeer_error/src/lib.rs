//! Error types for the Vermeer log diagnosis library.
//!
//! This crate provides the foundation error types used throughout the Vermeer
//! workspace.
//!
//! # Error Hierarchy
//!
//! All errors follow the `ErrorKind` + wrapper struct pattern for clean error
//! handling:
//! - `*ErrorKind` enum defines specific error conditions
//! - `*Error` struct wraps the kind with source location tracking
//! - All errors use `#[track_caller]` for automatic location capture
//!
//! The taxonomy mirrors how failures propagate: configuration and engine
//! errors are fatal for a request; ingest and extract errors are absorbed at
//! the file or record level and only affect result completeness.
//!
//! # Examples
//!
//! ```
//! use vermeer_error::{VermeerResult, EngineError, EngineErrorKind};
//!
//! fn request_completion() -> VermeerResult<String> {
//!     Err(EngineError::new(EngineErrorKind::Request("connection refused".to_string())))?
//! }
//!
//! match request_completion() {
//!     Ok(text) => println!("Got: {}", text),
//!     Err(e) => eprintln!("Error: {}", e),
//! }
//! ```

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod config;
mod engine;
mod error;
mod extract;
mod ingest;
mod storage;

pub use config::ConfigError;
pub use engine::{EngineError, EngineErrorKind};
pub use error::{VermeerError, VermeerErrorKind, VermeerResult};
pub use extract::{ExtractError, ExtractErrorKind};
pub use ingest::{IngestError, IngestErrorKind};
pub use storage::{StorageError, StorageErrorKind};
