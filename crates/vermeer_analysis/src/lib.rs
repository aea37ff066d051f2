//! The multi-turn conversation protocol.
//!
//! This crate drives a context-limited reasoning engine through the exact
//! turn-taking rules the pipeline depends on: block delivery with
//! position-dependent wording, the interaction-graph construction step, the
//! pattern-dispatch step, and the per-template diagnosis step. Every step is
//! a blocking request/response pair against the full accumulated session;
//! no step is issued before the previous completion has been appended.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod executor;
mod prompts;

pub use executor::SessionExecutor;
pub use prompts::{
    analysis_system_prompt, block_prompt, diagnosis_system_prompt, interaction_graph_prompt,
    pattern_dispatch_prompt, template_fill_prompt, NextTask,
};
