use thiserror::Error;

use crate::cache::FittedSpaces;
use crate::eligibility::education_score;
use crate::posting::{Catalog, Posting};
use crate::types::candidate::Candidate;
use crate::types::recommendation::{ScoreSignals, ScoredPosting};
use super::weights::{NormalizedWeights, ScoringWeights, WeightError};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ScoringError {
    #[error("Vector space has {rows} rows but catalog has {postings} postings")]
    MisalignedSpace { rows: usize, postings: usize },
    #[error("Vector spaces were fit on catalog {fitted}, not {requested}")]
    StaleSpaces { fitted: String, requested: String },
}

#[derive(Debug, Clone, Copy)]
pub struct ScoringEngine {
    weights: NormalizedWeights,
}

impl ScoringEngine {
    /// Rejects weights that cannot be normalized or where skill similarity
    /// is not the strictly heaviest signal.
    pub fn new(weights: ScoringWeights) -> Result<Self, WeightError> {
        let weights = weights.normalized()?;
        if !weights.get().skill_dominates() {
            return Err(WeightError::SkillNotDominant);
        }
        Ok(Self { weights })
    }

    pub fn weights(&self) -> &NormalizedWeights {
        &self.weights
    }

    /// Score every posting of `catalog`, in catalog order.
    ///
    /// `spaces` must have been fit on exactly `catalog`; anything else is a
    /// caller bug and fails before any score is produced.
    pub fn score<'c>(
        &self,
        candidate: &Candidate,
        catalog: &'c Catalog,
        spaces: &FittedSpaces,
    ) -> Result<Vec<ScoredPosting<'c>>, ScoringError> {
        for rows in [spaces.description.row_count(), spaces.skill.row_count()] {
            if rows != catalog.len() {
                return Err(ScoringError::MisalignedSpace {
                    rows,
                    postings: catalog.len(),
                });
            }
        }
        if spaces.manifest.catalog_version != *catalog.version() {
            return Err(ScoringError::StaleSpaces {
                fitted: spaces.manifest.catalog_version.as_str().to_string(),
                requested: catalog.version().as_str().to_string(),
            });
        }

        if catalog.is_empty() {
            return Ok(Vec::new());
        }

        let description_query = spaces.description.project(&candidate.description_text());
        let skill_query = spaces.skill.project(&candidate.skill_text());
        let description_sims = spaces.description.similarities(&description_query);
        let skill_sims = spaces.skill.similarities(&skill_query);

        let scored = catalog
            .postings()
            .iter()
            .enumerate()
            .map(|(position, posting)| {
                let signals = ScoreSignals {
                    skill_similarity: skill_sims[position],
                    description_similarity: description_sims[position],
                    sector_match: sector_match(candidate, posting),
                    location_match: location_match(candidate, posting),
                    education_score: education_score(&candidate.education, &posting.required_education),
                };
                ScoredPosting {
                    posting,
                    position,
                    score: self.combine(&signals),
                    signals,
                }
            })
            .collect();

        Ok(scored)
    }

    /// Weighted sum of the signals scaled to a percentage.
    pub fn combine(&self, signals: &ScoreSignals) -> f64 {
        let w = self.weights.get();
        let combined = w.skill * signals.skill_similarity
            + w.description * signals.description_similarity
            + w.sector * signals.sector_match
            + w.location * signals.location_match
            + w.education * signals.education_score;

        let score = combined * 100.0;
        debug_assert!((0.0..=100.0 + 1e-9).contains(&score), "score {score} out of range [0, 100]");
        score
    }
}

/// 1.0 when the posting's sector equals one of the preferred sectors.
pub fn sector_match(candidate: &Candidate, posting: &Posting) -> f64 {
    let sector = posting.sector.trim().to_lowercase();
    if sector.is_empty() {
        return 0.0;
    }
    let matched = candidate
        .sectors
        .iter()
        .any(|preferred| preferred.trim().to_lowercase() == sector);
    if matched { 1.0 } else { 0.0 }
}

/// 1.0 when a preferred location equals, contains, or is contained in any
/// value of the posting's location. Ingest has already rewritten every
/// location delimiter to a comma, so only commas separate values here.
pub fn location_match(candidate: &Candidate, posting: &Posting) -> f64 {
    let posting_locations: Vec<String> = posting
        .location
        .split(',')
        .map(|part| part.trim().to_lowercase())
        .filter(|part| !part.is_empty())
        .collect();

    let matched = candidate
        .locations
        .iter()
        .map(|preferred| preferred.trim().to_lowercase())
        .filter(|preferred| !preferred.is_empty())
        .any(|preferred| {
            posting_locations
                .iter()
                .any(|loc| *loc == preferred || loc.contains(&preferred) || preferred.contains(loc.as_str()))
        });
    if matched { 1.0 } else { 0.0 }
}
