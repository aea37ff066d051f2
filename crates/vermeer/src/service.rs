//! The analyze and diagnose operations.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::PathBuf;
use vermeer_analysis::{
    NextTask, SessionExecutor, analysis_system_prompt, diagnosis_system_prompt,
};
use vermeer_core::{ConversationSession, VermeerConfig};
use vermeer_error::VermeerResult;
use vermeer_extract::parse_interaction_edges;
use vermeer_ingest::{BlockPartitioner, load_templates, resolve_log_inputs};
use vermeer_interface::CompletionDriver;
use vermeer_storage::{AnalysisArtifact, DiagnosisArtifact, ResultStore};

/// Input for the interaction-analysis operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct AnalyzeRequest {
    /// Log files or directories to analyze
    pub log_files: Option<Vec<PathBuf>>,
    /// Accepted for interface parity; interaction analysis loads no templates
    pub templates_path: Option<PathBuf>,
    /// Optional caller-supplied session identifier
    pub session_id: Option<String>,
}

/// Output of the interaction-analysis operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AnalyzeResponse {
    /// The interaction-graph completion, verbatim
    pub interaction_pairs: String,
    /// The pattern-dispatch completion, verbatim
    pub dispatched_interactions: String,
    /// Whether the analysis produced a result
    pub success: bool,
    /// Human-readable outcome description
    pub message: Option<String>,
}

/// Input for the diagnosis operation.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnoseRequest {
    /// Log files or directories to diagnose against
    pub log_files: Option<Vec<PathBuf>>,
    /// Template file or directory to fill
    pub templates_path: Option<PathBuf>,
    /// Optional caller-supplied session identifier
    pub session_id: Option<String>,
}

/// Output of the diagnosis operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiagnoseResponse {
    /// Template id → completion texts, one per diagnosis call
    pub results: BTreeMap<String, Vec<String>>,
    /// Whether the diagnosis produced a result
    pub success: bool,
    /// Human-readable outcome description
    pub message: Option<String>,
}

const DEFAULT_TEMPLATES_PATH: &str = "./template/";

/// The request/response surface above the core.
///
/// Each call constructs its own [`ConversationSession`] and discards it on
/// completion; different requests share no mutable state and may run
/// concurrently. Empty inputs (no log content, no templates) surface as
/// `success = false` responses; configuration and engine errors propagate as
/// `Err` and leave no partial artifacts behind.
pub struct DiagnosisService<D: CompletionDriver> {
    executor: SessionExecutor<D>,
    partitioner: BlockPartitioner,
    store: ResultStore,
}

impl<D: CompletionDriver> DiagnosisService<D> {
    /// Build the service from a driver and validated configuration.
    ///
    /// # Errors
    ///
    /// Returns a configuration error if the block size is invalid, or an
    /// extraction error if the extractor patterns fail to compile.
    pub fn new(driver: D, config: VermeerConfig) -> VermeerResult<Self> {
        config.validate()?;
        Ok(Self {
            executor: SessionExecutor::with_engine_config(driver, config.engine()),
            partitioner: BlockPartitioner::new(*config.log_block_size())?,
            store: ResultStore::from_config(&config)?,
        })
    }

    /// Analyze log files for cross-component interactions.
    ///
    /// Delivers the partitioned logs, requests the interaction graph, then
    /// requests its classification into the three interaction patterns, all
    /// against one session.
    #[tracing::instrument(skip(self, request))]
    pub async fn analyze_interaction(
        &self,
        request: AnalyzeRequest,
    ) -> VermeerResult<AnalyzeResponse> {
        let log_files = resolve_log_inputs(&request.log_files.unwrap_or_default());
        let partition = self.partitioner.partition(&log_files);
        if !partition.has_content() {
            tracing::warn!("No log content found, skipping analysis");
            return Ok(AnalyzeResponse {
                interaction_pairs: String::new(),
                dispatched_interactions: String::new(),
                success: false,
                message: Some("No log content found in the provided inputs".to_string()),
            });
        }

        let mut session = new_session(request.session_id);
        self.executor.seed(&mut session, analysis_system_prompt());
        self.executor
            .deliver_blocks(&mut session, partition.blocks(), NextTask::InteractionGraph)
            .await?;

        let interaction_pairs = self.executor.extract_interaction_graph(&mut session).await?;
        let dispatched_interactions = self
            .executor
            .dispatch_patterns(&mut session, &interaction_pairs)
            .await?;

        let edges = parse_interaction_edges(&dispatched_interactions);
        tracing::info!(edges = edges.len(), "Recovered interaction edges from dispatch");

        let artifact = AnalysisArtifact {
            interaction_pairs: interaction_pairs.clone(),
            dispatched_interactions: dispatched_interactions.clone(),
            log_files: display_paths(&log_files),
        };
        let path = self.store.save_analysis(&artifact).await?;

        Ok(AnalyzeResponse {
            interaction_pairs,
            dispatched_interactions,
            success: true,
            message: Some(format!(
                "Analysis completed successfully. Results saved to {}",
                path.display()
            )),
        })
    }

    /// Diagnose log files by filling root-cause templates.
    ///
    /// Templates are loaded before any engine traffic so a missing or empty
    /// template set fails fast. Each template is then diagnosed sequentially
    /// against the same cumulative session.
    #[tracing::instrument(skip(self, request))]
    pub async fn diagnose(&self, request: DiagnoseRequest) -> VermeerResult<DiagnoseResponse> {
        let templates_path = request
            .templates_path
            .unwrap_or_else(|| PathBuf::from(DEFAULT_TEMPLATES_PATH));
        let templates = load_templates(&templates_path);
        if templates.is_empty() {
            tracing::warn!(path = %templates_path.display(), "No templates found");
            return Ok(DiagnoseResponse {
                results: BTreeMap::new(),
                success: false,
                message: Some(format!(
                    "No templates found at {}",
                    templates_path.display()
                )),
            });
        }

        let log_files = resolve_log_inputs(&request.log_files.unwrap_or_default());
        let partition = self.partitioner.partition(&log_files);
        if !partition.has_content() {
            tracing::warn!("No log content found, skipping diagnosis");
            return Ok(DiagnoseResponse {
                results: BTreeMap::new(),
                success: false,
                message: Some("No log content found in the provided inputs".to_string()),
            });
        }

        let mut session = new_session(request.session_id);
        self.executor.seed(&mut session, diagnosis_system_prompt());
        self.executor
            .deliver_blocks(&mut session, partition.blocks(), NextTask::Templates)
            .await?;

        let mut results: BTreeMap<String, Vec<String>> = BTreeMap::new();
        for (template_id, template_content) in &templates {
            let completion = self
                .executor
                .diagnose_template(&mut session, template_id, template_content)
                .await?;
            results.entry(template_id.clone()).or_default().push(completion);
        }

        self.store.save_transcript(&results).await?;
        let artifact = DiagnosisArtifact {
            results: results.clone(),
            log_files: display_paths(&log_files),
            templates_path: templates_path.display().to_string(),
        };
        let path = self.store.save_diagnosis(&artifact).await?;

        Ok(DiagnoseResponse {
            results,
            success: true,
            message: Some(format!(
                "Diagnosis completed successfully. Results saved to {}",
                path.display()
            )),
        })
    }
}

fn new_session(session_id: Option<String>) -> ConversationSession {
    match session_id {
        Some(id) => ConversationSession::with_id(id),
        None => ConversationSession::new(),
    }
}

fn display_paths(paths: &[PathBuf]) -> Vec<String> {
    paths.iter().map(|p| p.display().to_string()).collect()
}
