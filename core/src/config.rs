//! Generation run configuration.

use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::DataResult;

/// Parameters for one generation run.
///
/// `rows` is an attempt count: with `seasonal` enabled, most
/// November/December candidates are rejected, so the resulting table is
/// smaller than `rows` (see `generator::SEASONAL_KEEP_PROBABILITY`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenConfig {
    #[serde(default = "default_rows")]
    pub rows: usize,
    #[serde(default = "default_seed")]
    pub seed: u64,
    #[serde(default)]
    pub seasonal: bool,
    #[serde(default = "default_output")]
    pub output: PathBuf,
}

impl Default for GenConfig {
    fn default() -> Self {
        Self {
            rows: default_rows(),
            seed: default_seed(),
            seasonal: false,
            output: default_output(),
        }
    }
}

impl GenConfig {
    /// Load a config from a JSON file. Missing fields fall back to their
    /// defaults.
    pub fn load(path: &Path) -> DataResult<Self> {
        let content = fs::read_to_string(path)?;
        let cfg: GenConfig = serde_json::from_str(&content)?;
        Ok(cfg)
    }
}

fn default_rows() -> usize {
    2000
}

fn default_seed() -> u64 {
    42
}

fn default_output() -> PathBuf {
    PathBuf::from("ecommerce_data.csv")
}
