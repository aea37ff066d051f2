//! Message types for conversation history.

use crate::Role;
use serde::{Deserialize, Serialize};

/// A single message in a conversation with the reasoning engine.
///
/// Messages are created once per turn and never modified or removed. The
/// sequence number is assigned by the owning [`crate::ConversationSession`]
/// and is strictly increasing within a session.
///
/// # Examples
///
/// ```
/// use vermeer_core::{ConversationMessage, Role};
///
/// let message = ConversationMessage {
///     role: Role::User,
///     content: "2024-01-01 ERROR disk full".to_string(),
///     sequence: 1,
/// };
///
/// assert_eq!(message.role, Role::User);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationMessage {
    /// The role of the message sender
    pub role: Role,
    /// The text content of the message
    pub content: String,
    /// Position of this message within its session, strictly increasing
    pub sequence: u64,
}
