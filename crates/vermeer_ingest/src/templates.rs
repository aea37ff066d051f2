//! Diagnostic template discovery.

use std::collections::BTreeMap;
use std::path::Path;
use vermeer_error::{IngestError, IngestErrorKind};
use walkdir::WalkDir;

const TEMPLATE_EXTENSIONS: [&str; 2] = [".txt", ".template"];

/// Load template files from a directory (recursively) or a single file.
///
/// Returns a mapping from template id to raw template content. Ids derive
/// deterministically from paths: a single file's id is its basename with the
/// `.txt`/`.template` extension stripped; a file inside a directory uses its
/// path relative to the load root, separators replaced with underscores,
/// extension stripped. Two different paths can flatten to the same id
/// (`a/b.txt` vs `a_b.txt`); the loader does not detect this, and later
/// entries overwrite earlier ones.
///
/// An empty mapping is returned (not an error) when the path is neither a
/// file nor a directory or no matching files exist; callers surface that as
/// a reportable condition.
///
/// # Examples
///
/// ```no_run
/// use std::path::Path;
/// use vermeer_ingest::load_templates;
///
/// let templates = load_templates(Path::new("./template/"));
/// for (id, content) in &templates {
///     println!("{id}: {} bytes", content.len());
/// }
/// ```
#[tracing::instrument(fields(path = %path.display()))]
pub fn load_templates(path: &Path) -> BTreeMap<String, String> {
    let mut templates = BTreeMap::new();

    if path.is_file() {
        let Some(name) = path.file_name().and_then(|n| n.to_str()) else {
            return templates;
        };
        // The extension filter applies to directory walks only; an
        // explicitly named file always loads.
        let id = strip_template_extension(name).unwrap_or(name);
        match std::fs::read_to_string(path) {
            Ok(content) => {
                tracing::info!(template_id = %id, "Loaded template");
                templates.insert(id.to_string(), content.trim().to_string());
            }
            Err(e) => {
                let err = IngestError::new(IngestErrorKind::TemplateRead {
                    path: path.display().to_string(),
                    message: e.to_string(),
                });
                tracing::warn!(%err, "Skipping template");
            }
        }
    } else if path.is_dir() {
        for entry in WalkDir::new(path)
            .sort_by_file_name()
            .into_iter()
            .filter_map(|e| e.ok())
            .filter(|e| e.file_type().is_file())
        {
            let Some(id) = template_id_for(path, entry.path()) else {
                continue;
            };
            match std::fs::read_to_string(entry.path()) {
                Ok(content) => {
                    tracing::info!(template_id = %id, file = %entry.path().display(), "Loaded template");
                    templates.insert(id, content.trim().to_string());
                }
                Err(e) => {
                    let err = IngestError::new(IngestErrorKind::TemplateRead {
                        path: entry.path().display().to_string(),
                        message: e.to_string(),
                    });
                    tracing::warn!(%err, "Skipping template");
                }
            }
        }
    } else {
        tracing::warn!(path = %path.display(), "Templates path is neither a file nor a directory");
    }

    templates
}

/// Derive the flattened template id for `file` relative to `root`, or `None`
/// when the file does not carry a template extension.
fn template_id_for(root: &Path, file: &Path) -> Option<String> {
    let relative = file.strip_prefix(root).ok()?;
    let flattened = relative
        .components()
        .map(|c| c.as_os_str().to_string_lossy())
        .collect::<Vec<_>>()
        .join("_");
    strip_template_extension(&flattened).map(str::to_string)
}

fn strip_template_extension(name: &str) -> Option<&str> {
    TEMPLATE_EXTENSIONS
        .iter()
        .find_map(|ext| name.strip_suffix(ext))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_file_id_is_the_stripped_basename() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("welcome.txt");
        std::fs::write(&file, "Root cause: [cause]\n").unwrap();

        let templates = load_templates(&file);
        assert_eq!(templates.len(), 1);
        assert_eq!(templates["welcome"], "Root cause: [cause]");
    }

    #[test]
    fn nested_files_flatten_with_underscores() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(dir.path().join("welcome.txt"), "Root cause: [cause]").unwrap();
        let sub = dir.path().join("sub");
        std::fs::create_dir(&sub).unwrap();
        std::fs::write(sub.join("err.template"), "Error: [error]").unwrap();
        // Non-template files are ignored.
        std::fs::write(dir.path().join("README.md"), "docs").unwrap();

        let templates = load_templates(dir.path());
        let ids: Vec<&str> = templates.keys().map(String::as_str).collect();
        assert_eq!(ids, vec!["sub_err", "welcome"]);
        assert_eq!(templates["sub_err"], "Error: [error]");
    }

    #[test]
    fn explicitly_named_file_loads_regardless_of_extension() {
        let dir = tempfile::tempdir().unwrap();
        let file = dir.path().join("notes.md");
        std::fs::write(&file, "Cause: [cause]").unwrap();

        let templates = load_templates(&file);
        assert_eq!(templates["notes.md"], "Cause: [cause]");
    }

    #[test]
    fn missing_path_yields_empty_mapping() {
        let templates = load_templates(Path::new("/no/such/templates"));
        assert!(templates.is_empty());
    }

    #[test]
    fn colliding_flattened_ids_overwrite() {
        let dir = tempfile::tempdir().unwrap();
        let a = dir.path().join("a");
        std::fs::create_dir(&a).unwrap();
        std::fs::write(a.join("b.txt"), "nested").unwrap();
        std::fs::write(dir.path().join("a_b.txt"), "flat").unwrap();

        let templates = load_templates(dir.path());
        assert_eq!(templates.len(), 1);
        // The sorted walk descends into `a/` before reaching `a_b.txt`, so
        // the flat file is the later entry and wins.
        assert_eq!(templates["a_b"], "flat");
    }
}
