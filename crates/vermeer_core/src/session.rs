//! Append-only conversation session.

use crate::{ConversationMessage, Role};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// An append-only, ordered transcript of role-tagged messages scoped to one
/// analysis or diagnosis request.
///
/// Each request constructs its own session and discards it on completion; no
/// process-wide conversational state persists across requests. The full
/// history is resent to the engine on every turn, which is how later steps
/// stay consistent with earlier ones.
///
/// # Examples
///
/// ```
/// use vermeer_core::{ConversationSession, Role};
///
/// let mut session = ConversationSession::new();
/// session.add(Role::System, "You are a log analysis expert.");
/// session.add(Role::User, "Here is the first log block.");
///
/// assert_eq!(session.history().len(), 2);
/// assert!(session.history()[0].sequence < session.history()[1].sequence);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ConversationSession {
    id: String,
    messages: Vec<ConversationMessage>,
    next_sequence: u64,
}

impl ConversationSession {
    /// Create a new session with a random UUID v4 identifier.
    pub fn new() -> Self {
        Self::with_id(Uuid::new_v4().to_string())
    }

    /// Create a new session with a caller-supplied identifier.
    pub fn with_id(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            messages: Vec::new(),
            next_sequence: 0,
        }
    }

    /// The session identifier.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Append a message, assigning the next sequence number.
    ///
    /// Returns the sequence number assigned to the appended message.
    pub fn add(&mut self, role: Role, content: impl Into<String>) -> u64 {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.messages.push(ConversationMessage {
            role,
            content: content.into(),
            sequence,
        });
        sequence
    }

    /// The full ordered message history.
    pub fn history(&self) -> &[ConversationMessage] {
        &self.messages
    }

    /// The number of messages in the session.
    pub fn len(&self) -> usize {
        self.messages.len()
    }

    /// Whether the session holds no messages yet.
    pub fn is_empty(&self) -> bool {
        self.messages.is_empty()
    }

    /// The most recent message, if any.
    pub fn last(&self) -> Option<&ConversationMessage> {
        self.messages.last()
    }
}

impl Default for ConversationSession {
    fn default() -> Self {
        Self::new()
    }
}
