//! Artifact persistence for analysis and diagnosis results.
//!
//! Artifacts are append-only and uniquely timestamped, so concurrent
//! sessions need no locking. Three shapes are written:
//!
//! - `<timestamp>_analysis.json` with the interaction graph and dispatch
//!   completions
//! - `<timestamp>_diagnosis.json` with the per-template completion lists
//! - a flattened transcript log (`<timestamp>.log`) with
//!   `=== <template_id> Results ===` sections, plus the derived
//!   `<timestamp>_extracted.json` produced by the result extractor

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod store;

pub use store::{AnalysisArtifact, DiagnosisArtifact, ResultStore, TranscriptArtifacts};
