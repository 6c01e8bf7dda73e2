use std::borrow::Cow;

use crate::posting::Catalog;
use crate::types::candidate::Candidate;
use super::tier::{candidate_tier, requirement_tier, EducationTier};

/// Hard education cutoff applied before scoring.
#[derive(Debug, Clone, Copy, Default)]
pub struct EligibilityFilter;

impl EligibilityFilter {
    /// Postings whose required tier does not exceed the candidate's tier.
    ///
    /// Returns the input catalog borrowed when nothing was removed, so its
    /// fitted spaces stay valid; otherwise an owned sub-catalog with a new version.
    pub fn eligible<'a>(&self, candidate: &Candidate, catalog: &'a Catalog) -> Cow<'a, Catalog> {
        let tier = candidate_tier(&candidate.education);

        let all_eligible = catalog
            .postings()
            .iter()
            .all(|p| admits(tier, requirement_tier(&p.required_education)));

        if all_eligible {
            return Cow::Borrowed(catalog);
        }

        let subset = catalog.retain(|p| admits(tier, requirement_tier(&p.required_education)));
        tracing::debug!(
            candidate_tier = ?tier,
            postings = catalog.len(),
            eligible = subset.len(),
            "education filter reduced catalog"
        );
        Cow::Owned(subset)
    }
}

/// `Any` on the candidate side is unrestricted.
pub fn admits(candidate: EducationTier, requirement: EducationTier) -> bool {
    candidate == EducationTier::Any || requirement <= candidate
}
