//! Fixed-size partitioning of merged log sources.

use std::path::{Path, PathBuf};
use vermeer_core::LogBlock;
use vermeer_error::{ConfigError, IngestError, IngestErrorKind, VermeerResult};

/// What happened when one log source was read.
#[derive(Debug, Clone)]
pub enum SourceStatus {
    /// The source was read; `lines` counts its content lines (marker excluded)
    Loaded {
        /// Number of content lines contributed by the source
        lines: usize,
    },
    /// The source does not exist and was skipped
    Missing,
    /// The source exists but could not be read
    Failed(IngestError),
}

/// Per-source read outcome, returned alongside the aggregate block sequence
/// so callers can distinguish "nothing found" from "everything failed".
#[derive(Debug, Clone)]
pub struct SourceOutcome {
    path: PathBuf,
    status: SourceStatus,
}

impl SourceOutcome {
    /// The source path this outcome describes.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// The read status of the source.
    pub fn status(&self) -> &SourceStatus {
        &self.status
    }

    /// Whether the source contributed content.
    pub fn is_loaded(&self) -> bool {
        matches!(self.status, SourceStatus::Loaded { .. })
    }
}

/// The result of partitioning a set of log sources.
#[derive(Debug, Clone)]
pub struct PartitionOutcome {
    blocks: Vec<LogBlock>,
    sources: Vec<SourceOutcome>,
}

impl PartitionOutcome {
    /// The ordered block sequence.
    pub fn blocks(&self) -> &[LogBlock] {
        &self.blocks
    }

    /// Consume the outcome, yielding the block sequence.
    pub fn into_blocks(self) -> Vec<LogBlock> {
        self.blocks
    }

    /// Per-source read outcomes, in source-list order.
    pub fn sources(&self) -> &[SourceOutcome] {
        &self.sources
    }

    /// Whether any source contributed content.
    pub fn has_content(&self) -> bool {
        !self.blocks.is_empty()
    }
}

/// Merges log file contents with provenance markers and splits them into
/// fixed-size line blocks.
///
/// Each successfully read source contributes one marker line identifying its
/// path, followed by all of its lines. The marker is emitted once per source
/// even when the source's lines end up spanning multiple blocks.
///
/// # Examples
///
/// ```
/// use vermeer_ingest::BlockPartitioner;
///
/// let partitioner = BlockPartitioner::new(300).unwrap();
/// let outcome = partitioner.partition(&[]);
/// assert!(!outcome.has_content());
/// ```
#[derive(Debug, Clone)]
pub struct BlockPartitioner {
    block_size: usize,
}

impl BlockPartitioner {
    /// Create a partitioner with the given block size.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `block_size` is zero.
    pub fn new(block_size: usize) -> VermeerResult<Self> {
        if block_size == 0 {
            return Err(ConfigError::new("log_block_size must be a positive integer").into());
        }
        Ok(Self { block_size })
    }

    /// The configured lines-per-block.
    pub fn block_size(&self) -> usize {
        self.block_size
    }

    /// Merge the sources in order and split the flat line sequence into
    /// blocks of `block_size` lines; the final block may be shorter.
    ///
    /// Unreadable sources are skipped without aborting; their status is
    /// recorded in the returned outcome.
    #[tracing::instrument(skip(self, sources), fields(source_count = sources.len(), block_size = self.block_size))]
    pub fn partition(&self, sources: &[PathBuf]) -> PartitionOutcome {
        let mut all_lines: Vec<String> = Vec::new();
        let mut outcomes = Vec::with_capacity(sources.len());

        for path in sources {
            match std::fs::read_to_string(path) {
                Ok(content) => {
                    all_lines.push(format!("# Content from: {}", path.display()));
                    let before = all_lines.len();
                    all_lines.extend(content.lines().map(str::to_string));
                    outcomes.push(SourceOutcome {
                        path: path.clone(),
                        status: SourceStatus::Loaded {
                            lines: all_lines.len() - before,
                        },
                    });
                }
                Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                    tracing::warn!(path = %path.display(), "Log source missing, skipping");
                    outcomes.push(SourceOutcome {
                        path: path.clone(),
                        status: SourceStatus::Missing,
                    });
                }
                Err(e) => {
                    let err = IngestError::new(IngestErrorKind::SourceRead {
                        path: path.display().to_string(),
                        message: e.to_string(),
                    });
                    tracing::warn!(%err, "Log source unreadable, skipping");
                    outcomes.push(SourceOutcome {
                        path: path.clone(),
                        status: SourceStatus::Failed(err),
                    });
                }
            }
        }

        let block_count = all_lines.len().div_ceil(self.block_size);
        let blocks = all_lines
            .chunks(self.block_size)
            .enumerate()
            .map(|(position, chunk)| {
                LogBlock::new(chunk.to_vec(), position, position + 1 == block_count)
            })
            .collect::<Vec<_>>();

        tracing::info!(
            total_lines = all_lines.len(),
            blocks = blocks.len(),
            "Partitioned log sources"
        );

        PartitionOutcome {
            blocks,
            sources: outcomes,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn write_log(dir: &tempfile::TempDir, name: &str, lines: &[&str]) -> PathBuf {
        let path = dir.path().join(name);
        std::fs::write(&path, lines.join("\n")).unwrap();
        path
    }

    #[test]
    fn zero_block_size_is_a_configuration_error() {
        assert!(BlockPartitioner::new(0).is_err());
    }

    #[test]
    fn block_count_is_ceil_of_lines_over_size() {
        let dir = tempfile::tempdir().unwrap();
        // 1 marker + 7 content lines = 8 total; size 3 => 3 blocks
        let log = write_log(&dir, "app.log", &["a", "b", "c", "d", "e", "f", "g"]);

        let outcome = BlockPartitioner::new(3).unwrap().partition(&[log]);
        let blocks = outcome.blocks();
        assert_eq!(blocks.len(), 3);
        assert_eq!(blocks[0].len(), 3);
        assert_eq!(blocks[1].len(), 3);
        assert_eq!(blocks[2].len(), 2);
    }

    #[test]
    fn concatenated_blocks_reproduce_the_merged_sequence() {
        let dir = tempfile::tempdir().unwrap();
        let first = write_log(&dir, "first.log", &["1a", "1b", "1c"]);
        let second = write_log(&dir, "second.log", &["2a", "2b"]);

        let outcome = BlockPartitioner::new(4)
            .unwrap()
            .partition(&[first.clone(), second.clone()]);

        let mut replayed: Vec<String> = Vec::new();
        for block in outcome.blocks() {
            replayed.extend(block.lines().iter().cloned());
        }
        assert_eq!(
            replayed,
            vec![
                format!("# Content from: {}", first.display()),
                "1a".to_string(),
                "1b".to_string(),
                "1c".to_string(),
                format!("# Content from: {}", second.display()),
                "2a".to_string(),
                "2b".to_string(),
            ]
        );
    }

    #[test]
    fn marker_is_emitted_once_even_when_a_source_spans_blocks() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(&dir, "big.log", &["a", "b", "c", "d", "e"]);

        let outcome = BlockPartitioner::new(2).unwrap().partition(&[log]);
        let markers = outcome
            .blocks()
            .iter()
            .flat_map(|b| b.lines())
            .filter(|line| line.starts_with("# Content from:"))
            .count();
        assert_eq!(markers, 1);
        assert!(outcome.blocks().len() > 1);
    }

    #[test]
    fn exactly_one_block_is_last() {
        let dir = tempfile::tempdir().unwrap();
        let log = write_log(&dir, "app.log", &["a", "b", "c", "d"]);

        let outcome = BlockPartitioner::new(2).unwrap().partition(&[log]);
        let last_flags = outcome.blocks().iter().filter(|b| b.is_last()).count();
        assert_eq!(last_flags, 1);
        assert!(outcome.blocks().last().unwrap().is_last());
        for (i, block) in outcome.blocks().iter().enumerate() {
            assert_eq!(block.position(), i);
        }
    }

    #[test]
    fn missing_sources_are_recorded_not_fatal() {
        let dir = tempfile::tempdir().unwrap();
        let present = write_log(&dir, "present.log", &["x"]);
        let absent = dir.path().join("absent.log");

        let outcome = BlockPartitioner::new(10)
            .unwrap()
            .partition(&[absent.clone(), present]);

        assert!(outcome.has_content());
        assert_eq!(outcome.sources().len(), 2);
        assert!(matches!(outcome.sources()[0].status(), SourceStatus::Missing));
        assert!(outcome.sources()[1].is_loaded());
        // The absent source contributes no marker line.
        let markers = outcome
            .blocks()
            .iter()
            .flat_map(|b| b.lines())
            .filter(|l| l.contains("absent.log"))
            .count();
        assert_eq!(markers, 0);
    }
}
