//! Extracted record types.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// One template's recovered filling, parsed from a diagnosis transcript.
///
/// `filled_blanks` maps blank names (or positional `blank_<n>` keys) to the
/// values the engine supplied; unresolved blanks carry the literal value
/// `unknown`. `raw_filled_values` preserves the ordered blank matches before
/// name/value splitting, and `template_lines` retains the skeleton lines for
/// structural replay.
///
/// # Examples
///
/// ```
/// use vermeer_extract::FilledTemplate;
///
/// let record = FilledTemplate::default();
/// assert!(record.filled_blanks.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FilledTemplate {
    /// Skeleton lines (dash-prefixed lines still carrying a blank span)
    pub template_lines: Vec<String>,
    /// Blank name → filled value, in first-match order
    pub filled_blanks: IndexMap<String, String>,
    /// Ordered raw blank matches before name/value splitting
    pub raw_filled_values: Vec<String>,
}
