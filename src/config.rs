/// Configuration module for faqbot.
///
/// Handles loading, validating, and providing default configuration values.
/// Every value has a default, so a missing or partial config file is never
/// an error; the defaults are the design constants of the retrieval core.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

// ── Default value functions ──────────────────────────────────────────

fn default_confidence_threshold() -> f32 {
    0.5
}

fn default_fallback_confidence() -> f32 {
    0.3
}

fn default_max_suggestions() -> usize {
    3
}

fn default_top_k() -> usize {
    3
}

fn default_model_name() -> String {
    "all-MiniLM-L6-v2".to_string()
}

fn default_dimensions() -> usize {
    384
}

fn default_log_level() -> String {
    "info".to_string()
}

// ── Config structs ───────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct Config {
    #[serde(default)]
    pub retrieval: RetrievalConfig,

    #[serde(default)]
    pub model: ModelConfig,

    #[serde(default)]
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct RetrievalConfig {
    /// Minimum top-1 cosine similarity for answering directly.
    /// Inclusive: a score of exactly the threshold answers directly.
    #[serde(default = "default_confidence_threshold")]
    pub confidence_threshold: f32,

    /// Confidence reported on the suggestion fallback path. A fixed value,
    /// not derived from match quality — callers must not treat it as
    /// calibrated.
    #[serde(default = "default_fallback_confidence")]
    pub fallback_confidence: f32,

    /// Cap on suggested questions, and on the example questions listed when
    /// nothing matches at all.
    #[serde(default = "default_max_suggestions")]
    pub max_suggestions: usize,

    /// How many candidates the semantic matcher ranks per query.
    #[serde(default = "default_top_k")]
    pub top_k: usize,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ModelConfig {
    #[serde(default = "default_model_name")]
    pub name: String,

    #[serde(default = "default_dimensions")]
    pub dimensions: usize,
}

/// Log verbosity, consumed by the binary when it installs the tracing
/// subscriber. The library itself never touches process-global state.
#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,
}

// ── Default impls ────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            retrieval: RetrievalConfig::default(),
            model: ModelConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for RetrievalConfig {
    fn default() -> Self {
        Self {
            confidence_threshold: default_confidence_threshold(),
            fallback_confidence: default_fallback_confidence(),
            max_suggestions: default_max_suggestions(),
            top_k: default_top_k(),
        }
    }
}

impl Default for ModelConfig {
    fn default() -> Self {
        Self {
            name: default_model_name(),
            dimensions: default_dimensions(),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to `"faqbot.json"`.
    /// If the file does not exist, returns a default config and optionally
    /// generates a template file.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            "faqbot.json"
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            let cfg = Self::default();

            // Generate template only for the default path
            if path == "faqbot.json" {
                match cfg.save(path) {
                    Ok(()) => info!("Generated config template: {path}"),
                    Err(e) => warn!("Failed to generate config template: {e}"),
                }
            }

            return Ok(cfg);
        }

        let data = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config: {path}"))?;

        let cfg: Config = match serde_json::from_str(&data) {
            Ok(c) => c,
            Err(e) => {
                warn!("Invalid JSON in {path}: {e}");
                warn!("Using default configuration");
                return Ok(Self::default());
            }
        };

        info!("Loaded configuration from {path}");
        Ok(cfg)
    }

    /// Save configuration to a JSON file.
    pub fn save(&self, path: &str) -> Result<()> {
        let data = serde_json::to_string_pretty(self).context("failed to marshal config")?;
        std::fs::write(path, data).with_context(|| format!("failed to write config: {path}"))?;
        Ok(())
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<()> {
        anyhow::ensure!(self.retrieval.top_k > 0, "retrieval.top_k must be positive");
        anyhow::ensure!(
            self.retrieval.max_suggestions > 0,
            "retrieval.max_suggestions must be positive"
        );
        anyhow::ensure!(
            self.model.dimensions > 0,
            "model.dimensions must be positive"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.retrieval.confidence_threshold),
            "retrieval.confidence_threshold must be within [0, 1]"
        );
        anyhow::ensure!(
            (0.0..=1.0).contains(&self.retrieval.fallback_confidence),
            "retrieval.fallback_confidence must be within [0, 1]"
        );
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
