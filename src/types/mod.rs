pub mod candidate;
pub mod identifiers;
pub mod recommendation;

pub use candidate::{Candidate, CandidateProfile};
pub use identifiers::{CatalogVersion, PostingId, ProfileHash};
pub use recommendation::{
    MatchReason, Recommendation, RecommendError, RecommendationMetadata, RecommendationResult,
    Refinement, ScoreSignals, ScoredPosting,
};
