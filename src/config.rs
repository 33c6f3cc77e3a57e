/// Configuration module for the style profiler.
///
/// Handles loading, validating, and providing default configuration values.
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::transcript::TranscriptFormat;

// ── Default value functions ──────────────────────────────────────────

fn default_output_dir() -> String {
    "output".to_string()
}

fn default_profile_filename() -> String {
    "style-profile.md".to_string()
}

fn default_scores_filename() -> String {
    "chunk_scores.json".to_string()
}

fn default_true() -> bool {
    true
}

// ── Config structs ───────────────────────────────────────────────────

#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
pub struct Config {
    #[serde(default)]
    pub format: TranscriptFormat,

    #[serde(default = "default_output_dir")]
    pub output_dir: String,

    #[serde(default = "default_profile_filename")]
    pub profile_filename: String,

    #[serde(default = "default_scores_filename")]
    pub scores_filename: String,

    /// Run the five agents as parallel tasks.
    #[serde(default = "default_true")]
    pub concurrent: bool,

    /// Deduplicate findings in every section, not only themes and values.
    #[serde(default)]
    pub dedupe_all_sections: bool,
}

// ── Default impls ────────────────────────────────────────────────────

impl Default for Config {
    fn default() -> Self {
        Self {
            format: TranscriptFormat::default(),
            output_dir: default_output_dir(),
            profile_filename: default_profile_filename(),
            scores_filename: default_scores_filename(),
            concurrent: default_true(),
            dedupe_all_sections: false,
        }
    }
}

// ── Config implementation ────────────────────────────────────────────

impl Config {
    /// Load configuration from a JSON file.
    ///
    /// If `config_path` is empty, defaults to `"config.json"`.
    /// A missing file or invalid JSON yields the default config.
    pub fn load(config_path: &str) -> Result<Self> {
        let path = if config_path.is_empty() {
            "config.json"
        } else {
            config_path
        };

        if !Path::new(path).exists() {
            info!("{path} not found, using defaults");
            return Ok(Self::default());
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
        anyhow::ensure!(
            !self.format.chunk_header.trim().is_empty(),
            "format.chunk_header must not be empty"
        );
        anyhow::ensure!(
            !self.format.timestamp_marker.trim().is_empty(),
            "format.timestamp_marker must not be empty"
        );
        anyhow::ensure!(
            !self.format.speaker_marker.trim().is_empty(),
            "format.speaker_marker must not be empty"
        );
        anyhow::ensure!(
            !self.profile_filename.is_empty() && !self.scores_filename.is_empty(),
            "output filenames must not be empty"
        );
        anyhow::ensure!(
            self.profile_filename != self.scores_filename,
            "profile_filename and scores_filename must differ"
        );
        Ok(())
    }
}

// ── Tests ────────────────────────────────────────────────────────────
