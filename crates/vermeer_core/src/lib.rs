//! Core data types for the Vermeer log diagnosis library.
//!
//! This crate provides the foundation data types shared across the Vermeer
//! workspace: conversation roles and messages, the append-only session, the
//! partitioned log block, the completion request sent to the reasoning
//! engine, and the validated configuration surface.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod block;
mod config;
mod message;
mod request;
mod role;
mod session;

pub use block::LogBlock;
pub use config::{EngineConfig, VermeerConfig};
pub use message::ConversationMessage;
pub use request::{Completion, CompletionRequest};
pub use role::Role;
pub use session::ConversationSession;
