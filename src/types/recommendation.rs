use serde::{Deserialize, Serialize};

use crate::cache::SpaceBuildError;
use crate::eligibility::EducationTier;
use crate::posting::Posting;
use crate::selection::scoring::ScoringError;
use crate::selection::weights::WeightError;

/// The five per-posting signals the combined score is built from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct ScoreSignals {
    pub skill_similarity: f64,
    pub description_similarity: f64,
    pub sector_match: f64,
    pub location_match: f64,
    pub education_score: f64,
}

/// Internal: a posting that has been scored but not yet ranked or truncated.
/// Holds a reference to the catalog posting to avoid cloning before selection.
#[derive(Debug, Clone)]
pub struct ScoredPosting<'a> {
    pub posting: &'a Posting,
    /// Row position in the catalog the posting was scored against.
    pub position: usize,
    pub signals: ScoreSignals,
    /// Weighted combination of the signals, in `[0, 100]`.
    pub score: f64,
}

/// Why a posting was recommended. Declaration order is the explanation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MatchReason {
    Skill,
    Sector,
    Location,
    Education,
    Semantic,
}

impl MatchReason {
    pub fn as_str(self) -> &'static str {
        match self {
            MatchReason::Skill => "skill match",
            MatchReason::Sector => "sector match",
            MatchReason::Location => "location match",
            MatchReason::Education => "education match",
            MatchReason::Semantic => "semantic match",
        }
    }
}

/// Annotation attached by the optional refinement pass.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Refinement {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rank: Option<u32>,
    pub reason: String,
}

/// A recommended posting returned in the output.
/// Fully self-contained and serializable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recommendation {
    pub id: String,
    pub title: String,
    pub company: String,
    pub location: String,
    pub skills: String,
    pub sector: String,
    pub required_education: String,

    pub score: f64,
    pub signals: ScoreSignals,
    pub explanation: String,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub refinement: Option<Refinement>,
}

/// Metadata describing the outcome of one recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationMetadata {
    pub top_k: usize,
    pub candidate_tier: EducationTier,

    pub postings_considered: usize,
    pub postings_eligible: usize,
    pub postings_returned: usize,

    /// Whether request-local vector spaces had to be fit for a reduced catalog.
    pub spaces_refit: bool,
}

/// The final result of a recommendation request.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecommendationResult {
    pub recommendations: Vec<Recommendation>,
    pub metadata: RecommendationMetadata,
}

#[derive(Debug, thiserror::Error)]
pub enum RecommendError {
    #[error("Invalid top_k: {0}")]
    InvalidTopK(usize),

    #[error("Invalid weights: {0}")]
    Weights(#[from] WeightError),

    #[error("Space build error: {0}")]
    SpaceBuild(#[from] SpaceBuildError),

    #[error("Scoring error: {0}")]
    Scoring(#[from] ScoringError),
}
