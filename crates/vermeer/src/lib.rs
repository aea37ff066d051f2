//! Vermeer - Cross-Component Log Diagnosis
//!
//! Vermeer analyzes multi-file, multi-framework log corpora to discover
//! cross-component interactions and to fill diagnostic templates explaining
//! root causes, by driving a context-limited reasoning engine through a
//! multi-turn protocol.
//!
//! # Quick Start
//!
//! ```rust,ignore
//! use vermeer::{DiagnosisService, DiagnoseRequest, OpenAiCompatClient, VermeerConfig};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = VermeerConfig::load()?;
//!     let driver = OpenAiCompatClient::from_env(config.engine())?;
//!     let service = DiagnosisService::new(driver, config)?;
//!
//!     let response = service
//!         .diagnose(DiagnoseRequest {
//!             log_files: Some(vec!["bug_logs/HIVE-3335".into()]),
//!             templates_path: Some("./template/".into()),
//!             session_id: None,
//!         })
//!         .await?;
//!     println!("{}", serde_json::to_string_pretty(&response)?);
//!     Ok(())
//! }
//! ```
//!
//! # Architecture
//!
//! Vermeer is organized as a workspace with focused crates:
//!
//! - `vermeer_core` - Core data types (sessions, blocks, config)
//! - `vermeer_interface` - CompletionDriver trait and interaction patterns
//! - `vermeer_error` - Error types
//! - `vermeer_ingest` - Log resolution, block partitioning, template loading
//! - `vermeer_analysis` - The multi-turn conversation protocol
//! - `vermeer_extract` - Structured record extraction from transcripts
//! - `vermeer_storage` - Timestamped artifact persistence
//! - `vermeer_models` - OpenAI-compatible engine driver
//!
//! This crate (`vermeer`) re-exports everything and adds the two
//! request/response operations above the core.

pub use vermeer_analysis::*;
pub use vermeer_core::*;
pub use vermeer_error::*;
pub use vermeer_extract::*;
pub use vermeer_ingest::*;
pub use vermeer_interface::*;
pub use vermeer_models::*;
pub use vermeer_storage::*;

mod service;

pub use service::{
    AnalyzeRequest, AnalyzeResponse, DiagnoseRequest, DiagnoseResponse, DiagnosisService,
};
