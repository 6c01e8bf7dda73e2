use chrono::Utc;
use thiserror::Error;

use crate::cache::cache::FittedSpaces;
use crate::cache::versioning::{SpaceBuildConfig, SpaceManifest};
use crate::posting::Catalog;
use crate::vectorize::{Analyzer, VectorSpace};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum SpaceBuildError {
    #[error("Invalid space build config: {0}")]
    InvalidConfig(String),
}

/// Fits both vector spaces for a catalog snapshot.
///
/// Pure and reentrant: the same builder may fit request-local spaces
/// concurrently while shared spaces are being read elsewhere.
#[derive(Debug, Clone)]
pub struct SpaceBuilder {
    config: SpaceBuildConfig,
}

impl SpaceBuilder {
    pub fn new(config: SpaceBuildConfig) -> Result<Self, SpaceBuildError> {
        if config.max_description_terms == 0 {
            return Err(SpaceBuildError::InvalidConfig(
                "max_description_terms must be at least 1".into(),
            ));
        }
        if config.max_skill_terms == 0 {
            return Err(SpaceBuildError::InvalidConfig(
                "max_skill_terms must be at least 1".into(),
            ));
        }
        if config.description_ngram_max == 0 {
            return Err(SpaceBuildError::InvalidConfig(
                "description_ngram_max must be at least 1".into(),
            ));
        }
        Ok(Self { config })
    }

    pub fn config(&self) -> &SpaceBuildConfig {
        &self.config
    }

    /// Fit on `catalog`. An empty catalog yields empty spaces with zero rows.
    pub fn build(&self, catalog: &Catalog) -> FittedSpaces {
        let description_corpus: Vec<String> = catalog
            .postings()
            .iter()
            .map(|p| p.description_text())
            .collect();
        let skill_corpus: Vec<&str> = catalog.postings().iter().map(|p| p.skills.as_str()).collect();

        let description = VectorSpace::fit(
            Analyzer::Words {
                ngram_max: self.config.description_ngram_max,
            },
            &description_corpus,
            self.config.max_description_terms,
        );
        let skill = VectorSpace::fit(Analyzer::CommaTokens, &skill_corpus, self.config.max_skill_terms);

        tracing::debug!(
            catalog_version = catalog.version().as_str(),
            postings = catalog.len(),
            description_terms = description.vocabulary_size(),
            skill_terms = skill.vocabulary_size(),
            "fitted vector spaces"
        );

        // Note: fitted_at is strictly informational
        let manifest = SpaceManifest {
            catalog_version: catalog.version().clone(),
            build_config: self.config.clone(),
            fitted_at: Utc::now(),
            posting_count: catalog.len(),
            description_terms: description.vocabulary_size(),
            skill_terms: skill.vocabulary_size(),
        };

        FittedSpaces {
            manifest,
            description,
            skill,
        }
    }
}
