//! Trait definition for reasoning engine backends.

use async_trait::async_trait;
use vermeer_core::{Completion, CompletionRequest};
use vermeer_error::VermeerResult;

/// Core trait every reasoning engine backend must implement.
///
/// The engine is stateless per call: each request carries the entire
/// relevant history, and the returned completion is appended to the session
/// by the caller. The protocol layer never issues a new call before the
/// previous completion has been received, so implementations may assume
/// strictly sequential use within one session.
#[async_trait]
pub trait CompletionDriver: Send + Sync {
    /// Request one completion for the given transcript.
    async fn complete(&self, request: &CompletionRequest) -> VermeerResult<Completion>;

    /// Provider name (e.g., "openai", "mock").
    fn provider_name(&self) -> &'static str;

    /// Model identifier (e.g., "gpt-4o").
    fn model_name(&self) -> &str;
}
