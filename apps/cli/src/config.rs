//! CLI configuration file support.
//!
//! Configuration precedence:
//! 1. CLI arguments (handled by clap)
//! 2. Explicit `--config` file, or the local config (./.perceptrc) merged
//!    over the global config (~/.percept/config.toml)
//! 3. Built-in defaults

use percept_training::trace::format_rate;
use percept_training::{Bipolar, HyperParams, TargetFunction, TraceLanguage, WeightVector, DEFAULT_MAX_UPDATES};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// CLI configuration structure.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PerceptConfig {
    /// Log level (trace, debug, info, warn, error)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub log_level: Option<String>,

    /// Trace language (en, es)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<TraceLanguage>,

    /// Default training inputs
    #[serde(default)]
    pub training: TrainingDefaults,

    /// Output format preferences
    #[serde(default)]
    pub output: OutputConfig,
}

/// Defaults for the values the user would otherwise type in.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrainingDefaults {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub function: Option<TargetFunction>,

    /// Bias sign, `1` or `-1`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bias: Option<Bipolar>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alpha: Option<f64>,

    /// Initial weights `[w0, w1, w2]`
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub weights: Option<[f64; 3]>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_updates: Option<u64>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Human,
    Json,
}

/// Output format configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default)]
    pub format: OutputFormat,
}

/// Errors that can occur during configuration loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Configuration file not found.
    #[error("Configuration file not found: {0}")]
    NotFound(String),

    /// Failed to read configuration file.
    #[error("Failed to read configuration file: {0}")]
    ReadError(String),

    /// Failed to parse configuration file.
    #[error("Failed to parse configuration file: {0}")]
    ParseError(String),

    /// Failed to write configuration file.
    #[error("Failed to write configuration file: {0}")]
    WriteError(String),
}

/// Result type for configuration operations.
pub type ConfigResult<T> = std::result::Result<T, ConfigError>;

impl PerceptConfig {
    /// Fully populated configuration matching the built-in defaults.
    pub fn with_builtin_defaults() -> Self {
        let params = HyperParams::default();
        Self {
            log_level: Some("warn".to_string()),
            language: Some(TraceLanguage::English),
            training: TrainingDefaults {
                function: Some(TargetFunction::And),
                bias: Some(Bipolar::Positive),
                alpha: Some(params.alpha),
                weights: Some(params.initial_weights.as_array()),
                max_updates: Some(params.max_updates),
            },
            output: OutputConfig::default(),
        }
    }

    /// Load configuration from a TOML file.
    pub fn load_from_file(path: &Path) -> ConfigResult<Self> {
        if !path.exists() {
            return Err(ConfigError::NotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)
            .map_err(|e| ConfigError::ReadError(format!("{}: {}", path.display(), e)))?;

        toml::from_str(&content).map_err(|e| ConfigError::ParseError(format!("{}: {}", path.display(), e)))
    }

    /// Save configuration to a TOML file.
    pub fn save_to_file(&self, path: &Path) -> ConfigResult<()> {
        let content = self.to_toml()?;

        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)
                .map_err(|e| ConfigError::WriteError(format!("Failed to create directory: {}", e)))?;
        }

        std::fs::write(path, content)
            .map_err(|e| ConfigError::WriteError(format!("{}: {}", path.display(), e)))
    }

    pub fn to_toml(&self) -> ConfigResult<String> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError(format!("Failed to serialize: {}", e)))
    }

    /// Get default global configuration file path.
    pub fn default_global_path() -> PathBuf {
        dirs::home_dir().unwrap_or_else(|| PathBuf::from(".")).join(".percept").join("config.toml")
    }

    /// Get default local configuration file path.
    pub fn default_local_path() -> PathBuf {
        PathBuf::from(".perceptrc")
    }

    /// Discover and load configuration files.
    ///
    /// A missing file is skipped; a file that exists but does not parse is
    /// an error.
    pub fn discover_and_load() -> ConfigResult<Self> {
        let mut config = Self::default();

        for path in [Self::default_global_path(), Self::default_local_path()] {
            match Self::load_from_file(&path) {
                Ok(found) => {
                    tracing::debug!(path = %path.display(), "Loaded configuration");
                    config.merge(&found);
                }
                Err(ConfigError::NotFound(_)) => {}
                Err(e) => return Err(e),
            }
        }

        Ok(config)
    }

    /// Load the explicit file when given, otherwise discover.
    pub fn load(explicit: Option<&Path>) -> ConfigResult<Self> {
        match explicit {
            Some(path) => Self::load_from_file(path),
            None => Self::discover_and_load(),
        }
    }

    /// Merge another configuration into this one.
    ///
    /// Values from `other` override values in `self` if they are Some.
    pub fn merge(&mut self, other: &Self) {
        if let Some(ref log_level) = other.log_level {
            self.log_level = Some(log_level.clone());
        }
        if other.language.is_some() {
            self.language = other.language;
        }

        let (mine, theirs) = (&mut self.training, &other.training);
        mine.function = theirs.function.or(mine.function);
        mine.bias = theirs.bias.or(mine.bias);
        mine.alpha = theirs.alpha.or(mine.alpha);
        mine.weights = theirs.weights.or(mine.weights);
        mine.max_updates = theirs.max_updates.or(mine.max_updates);

        if other.output.format != OutputFormat::Human {
            self.output.format = other.output.format;
        }
    }

    pub fn function(&self) -> TargetFunction {
        self.training.function.unwrap_or(TargetFunction::And)
    }

    pub fn bias(&self) -> Bipolar {
        self.training.bias.unwrap_or_default()
    }

    pub fn language(&self) -> TraceLanguage {
        self.language.unwrap_or_default()
    }

    pub fn max_updates(&self) -> u64 {
        self.training.max_updates.unwrap_or(DEFAULT_MAX_UPDATES)
    }

    pub fn initial_weights(&self) -> WeightVector {
        self.training.weights.map_or_else(WeightVector::zeros, WeightVector::from)
    }

    /// Text shown as the default α in prompts and used when `--alpha` is absent.
    pub fn alpha_text(&self) -> String {
        format_rate(self.training.alpha.unwrap_or(HyperParams::default().alpha))
    }

    /// Text defaults for `w0`, `w1`, `w2`.
    pub fn weight_texts(&self) -> [String; 3] {
        self.initial_weights().as_array().map(format_rate)
    }
}
