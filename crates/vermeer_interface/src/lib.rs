//! Trait definitions and interaction-pattern types for the Vermeer workspace.
//!
//! The reasoning engine is an external collaborator: the core only depends on
//! the [`CompletionDriver`] capability, so every orchestration component can
//! be tested deterministically against a scripted fake completion source.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod traits;
mod types;

pub use traits::CompletionDriver;
pub use types::{BugCategory, InteractionEdge, InteractionEdgeBuilder, PatternCategory};
