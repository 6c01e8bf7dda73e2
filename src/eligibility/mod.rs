pub mod filter;
pub mod grade;
pub mod tier;

pub use filter::{admits, EligibilityFilter};
pub use grade::education_score;
pub use tier::{
    candidate_tier, requirement_tier, tokenize_requirement, EducationTier, TierRule, TokenTier,
    TIER_RULES,
};
