//! Filesystem-backed result store.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use vermeer_core::VermeerConfig;
use vermeer_error::{StorageError, StorageErrorKind, VermeerResult};
use vermeer_extract::ResultExtractor;

/// Payload of a `<timestamp>_analysis.json` artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AnalysisArtifact {
    /// The interaction-graph completion, verbatim
    pub interaction_pairs: String,
    /// The pattern-dispatch completion, verbatim
    pub dispatched_interactions: String,
    /// The resolved log files the analysis consumed
    pub log_files: Vec<String>,
}

/// Payload of a `<timestamp>_diagnosis.json` artifact.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DiagnosisArtifact {
    /// Template id → completion texts, one per diagnosis call
    pub results: BTreeMap<String, Vec<String>>,
    /// The resolved log files the diagnosis consumed
    pub log_files: Vec<String>,
    /// The templates path the diagnosis loaded from
    pub templates_path: String,
}

/// Paths of a persisted transcript and its derived extraction.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranscriptArtifacts {
    /// The flattened transcript log
    pub transcript: PathBuf,
    /// The `_extracted.json` derived from the transcript
    pub extracted: PathBuf,
}

/// Writes timestamped result artifacts under the configured directories.
///
/// # Examples
///
/// ```no_run
/// use vermeer_core::VermeerConfig;
/// use vermeer_storage::ResultStore;
///
/// let config = VermeerConfig::default();
/// let store = ResultStore::from_config(&config).unwrap();
/// # let _ = store;
/// ```
#[derive(Debug, Clone)]
pub struct ResultStore {
    analysis_dir: PathBuf,
    diagnosis_dir: PathBuf,
    history_dir: PathBuf,
    extractor: ResultExtractor,
}

impl ResultStore {
    /// Create a store writing under the three given directories.
    ///
    /// Directories are created on first write, not here.
    ///
    /// # Errors
    ///
    /// Returns an error if the extraction patterns fail to compile.
    pub fn new(
        analysis_dir: impl Into<PathBuf>,
        diagnosis_dir: impl Into<PathBuf>,
        history_dir: impl Into<PathBuf>,
    ) -> VermeerResult<Self> {
        Ok(Self {
            analysis_dir: analysis_dir.into(),
            diagnosis_dir: diagnosis_dir.into(),
            history_dir: history_dir.into(),
            extractor: ResultExtractor::new()?,
        })
    }

    /// Create a store from the configured artifact directories.
    pub fn from_config(config: &VermeerConfig) -> VermeerResult<Self> {
        Self::new(
            config.analysis_dir(),
            config.diagnosis_dir(),
            config.history_dir(),
        )
    }

    /// Persist an analysis artifact, returning its path.
    #[tracing::instrument(skip(self, artifact))]
    pub async fn save_analysis(&self, artifact: &AnalysisArtifact) -> VermeerResult<PathBuf> {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = self.analysis_dir.join(format!("{timestamp}_analysis.json"));
        write_json(&self.analysis_dir, &path, artifact).await?;
        tracing::info!(path = %path.display(), "Saved analysis artifact");
        Ok(path)
    }

    /// Persist a diagnosis artifact, returning its path.
    #[tracing::instrument(skip(self, artifact))]
    pub async fn save_diagnosis(&self, artifact: &DiagnosisArtifact) -> VermeerResult<PathBuf> {
        let timestamp = chrono::Local::now().format("%Y%m%d-%H%M%S");
        let path = self
            .diagnosis_dir
            .join(format!("{timestamp}_diagnosis.json"));
        write_json(&self.diagnosis_dir, &path, artifact).await?;
        tracing::info!(path = %path.display(), "Saved diagnosis artifact");
        Ok(path)
    }

    /// Write the flattened transcript log for the grouped diagnosis results
    /// and derive its `_extracted.json`.
    ///
    /// Each template opens a `\n=== <template_id> Results ===\n` section;
    /// when a template carries more than one completion, each is preceded by
    /// a `\n--- Response N ---\n` marker.
    #[tracing::instrument(skip(self, results), fields(templates = results.len()))]
    pub async fn save_transcript(
        &self,
        results: &BTreeMap<String, Vec<String>>,
    ) -> VermeerResult<TranscriptArtifacts> {
        let mut content = String::new();
        for (template_id, result_list) in results {
            content.push_str(&format!("\n=== {template_id} Results ===\n"));
            for (idx, result) in result_list.iter().enumerate() {
                if result_list.len() > 1 {
                    content.push_str(&format!("\n--- Response {} ---\n", idx + 1));
                }
                content.push_str(result.trim());
                content.push_str("\n\n");
            }
        }

        let timestamp = chrono::Local::now().format("%Y%m%d_%H%M%S").to_string();
        let transcript = self.history_dir.join(format!("{timestamp}.log"));
        ensure_dir(&self.history_dir).await?;
        tokio::fs::write(&transcript, &content).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileWrite(format!(
                "{}: {}",
                transcript.display(),
                e
            )))
        })?;
        tracing::info!(path = %transcript.display(), "Saved diagnosis transcript");

        let records = self.extractor.extract(&content);
        let extracted = self
            .history_dir
            .join(format!("{timestamp}_extracted.json"));
        write_json(&self.history_dir, &extracted, &records).await?;
        tracing::info!(path = %extracted.display(), records = records.len(), "Saved extracted records");

        Ok(TranscriptArtifacts {
            transcript,
            extracted,
        })
    }

    /// Re-run extraction over an already-persisted transcript log, writing
    /// its `_extracted.json` next to it.
    #[tracing::instrument(skip(self), fields(path = %transcript.display()))]
    pub async fn extract_transcript(&self, transcript: &Path) -> VermeerResult<PathBuf> {
        let content = tokio::fs::read_to_string(transcript).await.map_err(|e| {
            StorageError::new(StorageErrorKind::FileRead(format!(
                "{}: {}",
                transcript.display(),
                e
            )))
        })?;

        let records = self.extractor.extract(&content);
        let stem = transcript
            .file_stem()
            .map(|s| s.to_string_lossy().to_string())
            .unwrap_or_else(|| "transcript".to_string());
        let parent = transcript.parent().unwrap_or(Path::new("."));
        let extracted = parent.join(format!("{stem}_extracted.json"));
        write_json(parent, &extracted, &records).await?;
        tracing::info!(path = %extracted.display(), records = records.len(), "Saved extracted records");
        Ok(extracted)
    }
}

async fn ensure_dir(dir: &Path) -> VermeerResult<()> {
    tokio::fs::create_dir_all(dir).await.map_err(|e| {
        StorageError::new(StorageErrorKind::DirectoryCreation(format!(
            "{}: {}",
            dir.display(),
            e
        )))
        .into()
    })
}

async fn write_json<T: Serialize>(dir: &Path, path: &Path, payload: &T) -> VermeerResult<()> {
    ensure_dir(dir).await?;
    let json = serde_json::to_vec_pretty(payload)
        .map_err(|e| StorageError::new(StorageErrorKind::Serialize(e.to_string())))?;
    tokio::fs::write(path, json).await.map_err(|e| {
        StorageError::new(StorageErrorKind::FileWrite(format!(
            "{}: {}",
            path.display(),
            e
        )))
        .into()
    })
}
