//! Reasoning engine drivers.
//!
//! The protocol layer only depends on the [`vermeer_interface::CompletionDriver`]
//! capability; this crate provides the concrete driver for OpenAI-compatible
//! chat-completion endpoints. A failed call is fatal for its request: there
//! is no retry or rate-limit machinery here.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod openai;

pub use openai::OpenAiCompatClient;
