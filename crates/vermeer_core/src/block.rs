//! Partitioned log blocks.

use serde::{Deserialize, Serialize};

/// A contiguous, size-bounded chunk of merged log lines delivered to the
/// reasoning engine in one turn.
///
/// Every block but possibly the last holds exactly the configured number of
/// lines; exactly one block in a partition carries `is_last == true`.
///
/// # Examples
///
/// ```
/// use vermeer_core::LogBlock;
///
/// let block = LogBlock::new(vec!["line 1".to_string(), "line 2".to_string()], 0, true);
/// assert_eq!(block.position(), 0);
/// assert!(block.is_last());
/// assert_eq!(block.text(), "line 1\nline 2");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LogBlock {
    lines: Vec<String>,
    position: usize,
    is_last: bool,
}

impl LogBlock {
    /// Create a block from its lines, 0-based position, and last-block flag.
    pub fn new(lines: Vec<String>, position: usize, is_last: bool) -> Self {
        Self {
            lines,
            position,
            is_last,
        }
    }

    /// The ordered lines of this block.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// 0-based position of this block within its partition.
    pub fn position(&self) -> usize {
        self.position
    }

    /// Whether this is the final block of the partition.
    pub fn is_last(&self) -> bool {
        self.is_last
    }

    /// Whether this is the first block of the partition.
    pub fn is_first(&self) -> bool {
        self.position == 0
    }

    /// Number of lines in this block.
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    /// Whether the block holds no lines.
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// The block content as newline-joined text, as sent to the engine.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }
}
