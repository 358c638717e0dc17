//! Engine configuration (flat, validated, YAML-loadable)

use serde::{Deserialize, Serialize};
use std::path::Path;

use super::error::{ConfigError, ConfigResult};
use crate::features::parsing::LanguageId;

/// Default batch match threshold (percent)
pub const DEFAULT_THRESHOLD: f64 = 50.0;

/// Default minimum copied-span length (characters, exclusive)
pub const DEFAULT_MIN_SPAN_LENGTH: usize = 20;

/// Default classifier input length
pub const DEFAULT_CLASSIFIER_MAX_LENGTH: usize = 512;

const SUPPORTED_VERSIONS: &[u32] = &[1];

/// Engine configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Grammar used for structural extraction and comment stripping
    pub language: LanguageId,

    /// Batch match threshold on the blended score (0..=100)
    pub threshold: f64,

    /// Copied spans must be strictly longer than this (1..=10000)
    pub min_span_length: usize,

    /// Drop very frequent elements of the second sequence from the match index
    pub autojunk: bool,

    /// Evaluate batch pairs on a rayon pool
    pub parallel: bool,

    /// Worker threads for batch runs (None = 75% of cores)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub worker_threads: Option<usize>,

    /// Maximum classifier input length (1..=100000)
    pub classifier_max_length: usize,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            language: LanguageId::Python,
            threshold: DEFAULT_THRESHOLD,
            min_span_length: DEFAULT_MIN_SPAN_LENGTH,
            autojunk: true,
            parallel: true,
            worker_threads: None,
            classifier_max_length: DEFAULT_CLASSIFIER_MAX_LENGTH,
        }
    }
}

impl EngineConfig {
    pub fn language(mut self, language: LanguageId) -> Self {
        self.language = language;
        self
    }

    pub fn threshold(mut self, threshold: f64) -> Self {
        self.threshold = threshold;
        self
    }

    pub fn min_span_length(mut self, min_span_length: usize) -> Self {
        self.min_span_length = min_span_length;
        self
    }

    pub fn autojunk(mut self, autojunk: bool) -> Self {
        self.autojunk = autojunk;
        self
    }

    pub fn parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn worker_threads(mut self, threads: usize) -> Self {
        self.worker_threads = Some(threads);
        self
    }

    pub fn classifier_max_length(mut self, max_length: usize) -> Self {
        self.classifier_max_length = max_length;
        self
    }

    /// Thread count for parallel batch runs
    pub fn effective_worker_threads(&self) -> usize {
        self.worker_threads
            .unwrap_or_else(|| (num_cpus::get() * 3 / 4).max(1))
    }

    /// Validate configuration
    pub fn validate(&self) -> ConfigResult<()> {
        if !self.threshold.is_finite() || !(0.0..=100.0).contains(&self.threshold) {
            return Err(ConfigError::range_with_hint(
                "threshold",
                self.threshold,
                0,
                100,
                "Threshold is a similarity percentage",
            ));
        }

        if self.min_span_length < 1 || self.min_span_length > 10_000 {
            return Err(ConfigError::range_with_hint(
                "min_span_length",
                self.min_span_length,
                1,
                10_000,
                "Spans of a single character are never meaningful copies",
            ));
        }

        if let Some(threads) = self.worker_threads {
            if threads < 1 || threads > 1024 {
                return Err(ConfigError::range_with_hint(
                    "worker_threads",
                    threads,
                    1,
                    1024,
                    "Use parallel: false for sequential runs",
                ));
            }
        }

        if self.classifier_max_length < 1 || self.classifier_max_length > 100_000 {
            return Err(ConfigError::range_with_hint(
                "classifier_max_length",
                self.classifier_max_length,
                1,
                100_000,
                "Most text classifiers accept 512 tokens",
            ));
        }

        Ok(())
    }

    /// Load and validate a YAML configuration file
    pub fn from_yaml(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Parse and validate YAML configuration text
    pub fn from_yaml_str(content: &str) -> ConfigResult<Self> {
        let file: ConfigFileV1 = serde_yaml::from_str(content)?;

        let version = file.version.ok_or(ConfigError::MissingVersion)?;
        if !SUPPORTED_VERSIONS.contains(&version) {
            return Err(ConfigError::UnsupportedVersion {
                found: version,
                supported: SUPPORTED_VERSIONS.to_vec(),
            });
        }

        let config = file.engine;
        config.validate()?;
        Ok(config)
    }

    /// Export as versioned YAML
    pub fn to_yaml(&self) -> ConfigResult<String> {
        let file = ConfigFileV1 {
            version: Some(1),
            engine: self.clone(),
        };
        serde_yaml::to_string(&file).map_err(ConfigError::Yaml)
    }
}

/// YAML Schema v1
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFileV1 {
    /// Schema version (always 1 for v1)
    pub version: Option<u32>,

    /// Engine settings
    #[serde(default)]
    pub engine: EngineConfig,
}
