//! Role types for conversation participants.

use serde::{Deserialize, Serialize};

/// Role of a message in the conversation with the reasoning engine.
///
/// # Examples
///
/// ```
/// use vermeer_core::Role;
///
/// let user_role = Role::User;
/// let assistant_role = Role::Assistant;
/// assert_ne!(user_role, assistant_role);
///
/// // Display implementation
/// assert_eq!(format!("{}", Role::System), "System");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    derive_more::Display,
)]
pub enum Role {
    /// System messages seed the session with the engine's task framing
    System,
    /// User messages carry log blocks, prompts, and templates
    User,
    /// Assistant messages are the engine's completions
    Assistant,
}
