//! Resolution of caller-supplied log inputs into individual file paths.

use std::path::{Path, PathBuf};
use vermeer_error::{IngestError, IngestErrorKind};

/// Resolve a list of files and directories into an ordered list of log file
/// paths.
///
/// Files pass through unchanged. Directories expand (non-recursively) to
/// their regular files in sorted order. Anything that is neither is logged
/// and skipped.
///
/// # Examples
///
/// ```no_run
/// use std::path::PathBuf;
/// use vermeer_ingest::resolve_log_inputs;
///
/// let files = resolve_log_inputs(&[PathBuf::from("bug_logs/HIVE-3335")]);
/// assert!(files.iter().all(|p| p.is_file()));
/// ```
pub fn resolve_log_inputs(inputs: &[PathBuf]) -> Vec<PathBuf> {
    let mut log_files = Vec::new();

    for input in inputs {
        if input.is_file() {
            tracing::debug!(path = %input.display(), "Added log file");
            log_files.push(input.clone());
        } else if input.is_dir() {
            let mut folder_files = list_regular_files(input);
            folder_files.sort();
            tracing::info!(
                path = %input.display(),
                count = folder_files.len(),
                "Added log files from folder"
            );
            log_files.extend(folder_files);
        } else {
            let err = IngestError::new(IngestErrorKind::InvalidPath(
                input.display().to_string(),
            ));
            tracing::warn!(%err, "Skipping log input");
        }
    }

    log_files
}

fn list_regular_files(dir: &Path) -> Vec<PathBuf> {
    let entries = match std::fs::read_dir(dir) {
        Ok(entries) => entries,
        Err(e) => {
            tracing::warn!(path = %dir.display(), error = %e, "Failed to list folder");
            return Vec::new();
        }
    };

    entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file())
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn files_pass_through_and_folders_expand() {
        let dir = tempfile::tempdir().unwrap();
        let single = dir.path().join("standalone.log");
        std::fs::write(&single, "one\n").unwrap();

        let folder = dir.path().join("corpus");
        std::fs::create_dir(&folder).unwrap();
        std::fs::write(folder.join("b.log"), "b\n").unwrap();
        std::fs::write(folder.join("a.log"), "a\n").unwrap();
        std::fs::create_dir(folder.join("nested")).unwrap();

        let resolved = resolve_log_inputs(&[single.clone(), folder.clone()]);
        assert_eq!(
            resolved,
            vec![single, folder.join("a.log"), folder.join("b.log")]
        );
    }

    #[test]
    fn missing_inputs_are_skipped() {
        let resolved = resolve_log_inputs(&[PathBuf::from("/no/such/input")]);
        assert!(resolved.is_empty());
    }
}
