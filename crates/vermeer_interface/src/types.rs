//! Interaction-pattern domain types.

use serde::{Deserialize, Serialize};

/// The three cross-component interaction patterns the dispatch step
/// classifies pairs into.
///
/// # Examples
///
/// ```
/// use vermeer_interface::PatternCategory;
/// use std::str::FromStr;
///
/// let category = PatternCategory::from_str("resource_invocation").unwrap();
/// assert_eq!(category, PatternCategory::ResourceInvocation);
/// assert_eq!(category.to_string(), "resource_invocation");
/// ```
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
    strum::EnumIter,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum PatternCategory {
    /// Component A invokes component B, which utilizes a resource
    ResourceInvocation,
    /// Both components exhibit abnormal usage on a shared resource
    AbnormalUsage,
    /// Both components use the same resource (shared file, memory, object)
    SharedObject,
}

/// Bug categories the interaction patterns nominally correspond to.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    strum::Display,
    strum::EnumString,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum BugCategory {
    /// A resource is acquired and never released
    ResourceLeak,
    /// Components contend for the same scarce resource
    ResourceContention,
    /// Components disagree about the state of a shared object
    SemanticInconsistency,
}

impl PatternCategory {
    /// The bug category conventionally associated with this pattern.
    ///
    /// This mapping documents the correspondence; the dispatch and extraction
    /// flows classify into [`PatternCategory`] values only and do not relabel
    /// through it.
    pub fn bug_category(self) -> BugCategory {
        match self {
            PatternCategory::ResourceInvocation => BugCategory::ResourceLeak,
            PatternCategory::AbnormalUsage => BugCategory::ResourceContention,
            PatternCategory::SharedObject => BugCategory::SemanticInconsistency,
        }
    }
}

/// A classified relationship between two components sharing or contending
/// for a resource.
///
/// # Examples
///
/// ```
/// use vermeer_interface::{InteractionEdge, PatternCategory};
///
/// let edge = InteractionEdge::builder()
///     .component_a("Hive")
///     .component_b("Hadoop")
///     .resource("hdfs://tmp/scratch")
///     .category(PatternCategory::SharedObject)
///     .evidence_regexes(vec![r"FileNotFoundException.*scratch".to_string()])
///     .reasoning("Both components reference the scratch directory.")
///     .assumptions("Timestamps are comparable across hosts.")
///     .build()
///     .unwrap();
///
/// assert_eq!(*edge.category(), PatternCategory::SharedObject);
/// ```
#[derive(
    Debug,
    Clone,
    PartialEq,
    Serialize,
    Deserialize,
    derive_getters::Getters,
    derive_builder::Builder,
)]
#[builder(setter(into))]
pub struct InteractionEdge {
    /// The invoking or first-observed component
    component_a: String,
    /// The invoked or second-observed component
    component_b: String,
    /// The system or abstract resource binding the two components
    resource: String,
    /// Which of the three interaction patterns this edge exhibits
    category: PatternCategory,
    /// Regular expressions that relocate the evidencing log lines
    #[builder(default)]
    #[serde(default)]
    evidence_regexes: Vec<String>,
    /// The engine's reasoning for the classification
    #[builder(default)]
    #[serde(default)]
    reasoning: String,
    /// Assumptions the engine made while classifying
    #[builder(default)]
    #[serde(default)]
    assumptions: String,
}

impl InteractionEdge {
    /// Start building an edge.
    pub fn builder() -> InteractionEdgeBuilder {
        InteractionEdgeBuilder::default()
    }
}
