//! Startup configuration, read once from a JSON file.
//!
//! Default location is `~/.aquasens/config.json`, where a missing file means
//! defaults. A path given explicitly must exist. The loaded [`Config`] is never mutated afterwards.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};

use crate::engine::Weights;

/// Allowed drift of the weight sum from 1.0.
const WEIGHT_SUM_TOLERANCE: f64 = 1e-6;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Index weights per parameter.
    pub weights: Weights,
    /// Directory where text reports are written.
    pub report_dir: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            weights: Weights::default(),
            report_dir: PathBuf::from("."),
        }
    }
}

impl Config {
    /// Load from an explicit `path`. The file must exist.
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        let config = Self::from_json(&raw)
            .with_context(|| format!("invalid config file {}", path.display()))?;
        tracing::info!(path = %path.display(), "config loaded");
        Ok(config)
    }

    /// Load from the default location. A missing file, or no resolvable
    /// home directory, means defaults.
    pub fn load_default() -> Result<Self> {
        match crate::consts::default_config_path() {
            Some(path) => Self::load_or_default(&path),
            None => {
                tracing::warn!("cannot determine home directory, using default config");
                Ok(Self::default())
            }
        }
    }

    /// Like [`Config::load`], but a missing file yields defaults.
    pub fn load_or_default(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load(path)
    }

    pub fn from_json(raw: &str) -> Result<Self> {
        let config: Self = serde_json::from_str(raw).context("failed to parse config JSON")?;
        config.validate()?;
        Ok(config)
    }

    /// Weights must be finite, non-negative, and sum to 1.0 so the index
    /// stays within [0, 100].
    pub fn validate(&self) -> Result<()> {
        let w = &self.weights;
        for (name, value) in [
            ("ph", w.ph),
            ("turbidity", w.turbidity),
            ("arsenic", w.arsenic),
        ] {
            if !value.is_finite() || value < 0.0 {
                bail!("weight for {name} must be a non-negative number, got {value}");
            }
        }
        let sum = w.sum();
        if (sum - 1.0).abs() > WEIGHT_SUM_TOLERANCE {
            bail!("weights must sum to 1.0, got {sum}");
        }
        Ok(())
    }
}
