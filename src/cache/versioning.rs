use chrono::{DateTime, Utc};

use crate::types::identifiers::CatalogVersion;

// Key point:
// Serializable
// Comparable
// Explicit defaults
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct SpaceBuildConfig {
    pub version: String,
    pub max_description_terms: usize,
    pub max_skill_terms: usize,
    pub description_ngram_max: usize,
}

impl SpaceBuildConfig {
    pub fn v0() -> Self {
        Self {
            version: "1".into(),
            max_description_terms: 5000,
            max_skill_terms: 1000,
            description_ngram_max: 2,
        }
    }
}

impl Default for SpaceBuildConfig {
    fn default() -> Self {
        Self::v0()
    }
}

/// Describes which catalog a pair of fitted spaces belongs to.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct SpaceManifest {
    pub catalog_version: CatalogVersion,
    pub build_config: SpaceBuildConfig,
    pub fitted_at: DateTime<Utc>, // informational only
    pub posting_count: usize,
    pub description_terms: usize,
    pub skill_terms: usize,
}
