//! Log and template ingestion for the Vermeer workspace.
//!
//! Three pieces live here: resolving caller-supplied paths into an ordered
//! list of log files, merging and partitioning those files into fixed-size
//! blocks with provenance markers, and discovering diagnostic template files.
//!
//! File reads are local, synchronous, best-effort operations: an unreadable
//! file is skipped and recorded, never fatal for the whole operation.

#![forbid(unsafe_code)]
#![warn(missing_docs)]

mod partition;
mod sources;
mod templates;

pub use partition::{BlockPartitioner, PartitionOutcome, SourceOutcome, SourceStatus};
pub use sources::resolve_log_inputs;
pub use templates::load_templates;
