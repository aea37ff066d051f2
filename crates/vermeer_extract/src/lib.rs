//! Structured record extraction from diagnosis transcripts.
//!
//! The reasoning engine answers template-fill prompts in semi-structured
//! natural language. This crate treats that output as a small wire protocol
//! and parses it back into structured records:
//!
//! - transcript sections are delimited by `=== <template-id> Results ===`
//! - each section carries a `Completed Template` heading
//! - filled blanks are spans delimited by two or more underscores, optionally
//!   of the form `__name(value)__`
//!
//! Parsing is lenient per record: a fragment that lacks a recognizable
//! header or the completed-template heading contributes no record; it never
//! fails the whole extraction. The same leniency applies to the interaction
//! edges recovered from pattern-dispatch completions.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod extractor;
mod interactions;
mod record;

pub use extractor::ResultExtractor;
pub use interactions::{extract_json, parse_interaction_edges};
pub use record::FilledTemplate;
