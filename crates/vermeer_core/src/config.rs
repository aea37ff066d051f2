//! Validated configuration surface.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use vermeer_error::{ConfigError, VermeerResult};

fn default_block_size() -> usize {
    300
}

fn default_analysis_dir() -> PathBuf {
    PathBuf::from("interaction_analysis_results")
}

fn default_diagnosis_dir() -> PathBuf {
    PathBuf::from("diagnosis_results")
}

fn default_history_dir() -> PathBuf {
    PathBuf::from("chat_history")
}

fn default_base_url() -> String {
    "https://api.openai.com/v1/chat/completions".to_string()
}

fn default_model() -> String {
    "gpt-4o".to_string()
}

fn default_temperature() -> f32 {
    0.0
}

fn default_timeout_secs() -> u64 {
    120
}

/// Reasoning engine connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct EngineConfig {
    /// Chat-completions endpoint URL
    #[serde(default = "default_base_url")]
    base_url: String,
    /// Model identifier requested from the endpoint
    #[serde(default = "default_model")]
    model: String,
    /// Sampling temperature
    #[serde(default = "default_temperature")]
    temperature: f32,
    /// Optional completion token cap
    #[serde(default)]
    max_tokens: Option<u32>,
    /// Per-call timeout in seconds; exceeding it is fatal for the request
    #[serde(default = "default_timeout_secs")]
    timeout_secs: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            model: default_model(),
            temperature: default_temperature(),
            max_tokens: None,
            timeout_secs: default_timeout_secs(),
        }
    }
}

/// Configuration consumed by the diagnosis pipeline.
///
/// Loaded once per process and validated up front, then passed by value into
/// the components that need it. The block size in particular is validated at
/// construction rather than re-read from disk on every partition call.
///
/// # Examples
///
/// ```
/// use vermeer_core::VermeerConfig;
///
/// let config = VermeerConfig::default();
/// assert!(config.validate().is_ok());
/// assert_eq!(*config.log_block_size(), 300);
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, derive_getters::Getters)]
pub struct VermeerConfig {
    /// Number of merged log lines per delivered block
    #[serde(default = "default_block_size")]
    log_block_size: usize,
    /// Directory for `<timestamp>_analysis.json` artifacts
    #[serde(default = "default_analysis_dir")]
    analysis_dir: PathBuf,
    /// Directory for `<timestamp>_diagnosis.json` artifacts
    #[serde(default = "default_diagnosis_dir")]
    diagnosis_dir: PathBuf,
    /// Directory for flattened transcripts and derived extractions
    #[serde(default = "default_history_dir")]
    history_dir: PathBuf,
    /// Reasoning engine settings
    #[serde(default)]
    engine: EngineConfig,
}

impl Default for VermeerConfig {
    fn default() -> Self {
        Self {
            log_block_size: default_block_size(),
            analysis_dir: default_analysis_dir(),
            diagnosis_dir: default_diagnosis_dir(),
            history_dir: default_history_dir(),
            engine: EngineConfig::default(),
        }
    }
}

impl VermeerConfig {
    /// Load configuration from `vermeer.toml` (optional) layered with
    /// `VERMEER_*` environment overrides, then validate it.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if the sources cannot be read, the values
    /// fail to deserialize, or validation rejects them.
    pub fn load() -> VermeerResult<Self> {
        let settings = config::Config::builder()
            .add_source(config::File::with_name("vermeer").required(false))
            .add_source(
                config::Environment::with_prefix("VERMEER")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()
            .map_err(|e| ConfigError::new(format!("failed to read configuration: {e}")))?;

        let config: Self = settings
            .try_deserialize()
            .map_err(|e| ConfigError::new(format!("invalid configuration: {e}")))?;

        config.validate()?;
        tracing::debug!(
            log_block_size = config.log_block_size,
            model = %config.engine.model,
            "Loaded configuration"
        );
        Ok(config)
    }

    /// Check the loaded values against the invariants the pipeline relies on.
    ///
    /// # Errors
    ///
    /// Returns a [`ConfigError`] if `log_block_size` is zero or the engine
    /// timeout is zero.
    pub fn validate(&self) -> VermeerResult<()> {
        if self.log_block_size == 0 {
            return Err(ConfigError::new("log_block_size must be a positive integer").into());
        }
        if self.engine.timeout_secs == 0 {
            return Err(ConfigError::new("engine.timeout_secs must be positive").into());
        }
        Ok(())
    }
}
