use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::cache::SpaceBuildConfig;
use crate::selection::weights::ScoringWeights;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Everything a [`crate::selection::Recommender`] needs besides the catalog.
/// Missing JSON keys fall back to the `v0` values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RecommenderConfig {
    pub weights: ScoringWeights,
    pub spaces: SpaceBuildConfig,
    /// Postings handed to the refinement collaborator before truncating to `top_k`.
    pub refine_pool_size: usize,
}

impl RecommenderConfig {
    pub fn v0() -> Self {
        Self {
            weights: ScoringWeights::default(),
            spaces: SpaceBuildConfig::v0(),
            refine_pool_size: 20,
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

impl Default for RecommenderConfig {
    fn default() -> Self {
        Self::v0()
    }
}
