//! Request and response types for engine completions.

use crate::ConversationMessage;
use serde::{Deserialize, Serialize};

/// A completion request carrying the full conversation history.
///
/// The engine is stateless per call: the entire relevant history is resent
/// every time.
///
/// # Examples
///
/// ```
/// use vermeer_core::{CompletionRequest, ConversationMessage, Role};
///
/// let request = CompletionRequest {
///     messages: vec![ConversationMessage {
///         role: Role::User,
///         content: "Summarize the log.".to_string(),
///         sequence: 0,
///     }],
///     max_tokens: Some(1024),
///     temperature: Some(0.0),
///     model: Some("gpt-4o".to_string()),
/// };
///
/// assert_eq!(request.messages.len(), 1);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
pub struct CompletionRequest {
    /// The conversation messages to send, in session order
    pub messages: Vec<ConversationMessage>,
    /// Maximum number of tokens to generate
    pub max_tokens: Option<u32>,
    /// Sampling temperature (0.0 to 1.0)
    pub temperature: Option<f32>,
    /// Model identifier to use
    pub model: Option<String>,
}

/// The text returned by the reasoning engine for one submitted transcript.
///
/// # Examples
///
/// ```
/// use vermeer_core::Completion;
///
/// let completion = Completion {
///     text: "The components share an HDFS volume.".to_string(),
/// };
/// assert!(completion.text.contains("HDFS"));
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Completion {
    /// The generated completion text
    pub text: String,
}
