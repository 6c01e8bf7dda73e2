use std::cmp::Ordering;

use crate::types::recommendation::{MatchReason, ScoreSignals, ScoredPosting};

/// Sort globally by (score, skill, sector, location, description) descending,
/// then by catalog position ascending.
///
/// Skill similarity is the first tie-breaker because it carries the most weight;
/// catalog position makes the order total, so identical inputs always rank identically.
pub fn rank(scored: &mut [ScoredPosting<'_>]) {
    scored.sort_by(compare);

    debug_assert!(scored.windows(2).all(|w| compare(&w[0], &w[1]) != Ordering::Greater));
}

/// Rank and keep at most `top_k` entries.
pub fn rank_top_k(mut scored: Vec<ScoredPosting<'_>>, top_k: usize) -> Vec<ScoredPosting<'_>> {
    rank(&mut scored);
    scored.truncate(top_k);
    scored
}

pub fn compare(a: &ScoredPosting<'_>, b: &ScoredPosting<'_>) -> Ordering {
    let (sa, sb) = (&a.signals, &b.signals);
    b.score
        .total_cmp(&a.score)
        .then_with(|| sb.skill_similarity.total_cmp(&sa.skill_similarity))
        .then_with(|| sb.sector_match.total_cmp(&sa.sector_match))
        .then_with(|| sb.location_match.total_cmp(&sa.location_match))
        .then_with(|| sb.description_similarity.total_cmp(&sa.description_similarity))
        .then_with(|| a.position.cmp(&b.position))
}

/// Reasons in fixed order (skill, sector, location, education) for every
/// strictly positive signal; `semantic match` when none apply.
pub fn explain(signals: &ScoreSignals) -> Vec<MatchReason> {
    let mut reasons = Vec::with_capacity(4);
    if signals.skill_similarity > 0.0 {
        reasons.push(MatchReason::Skill);
    }
    if signals.sector_match > 0.0 {
        reasons.push(MatchReason::Sector);
    }
    if signals.location_match > 0.0 {
        reasons.push(MatchReason::Location);
    }
    if signals.education_score > 0.0 {
        reasons.push(MatchReason::Education);
    }
    if reasons.is_empty() {
        reasons.push(MatchReason::Semantic);
    }
    reasons
}

pub fn explanation_text(signals: &ScoreSignals) -> String {
    explain(signals)
        .into_iter()
        .map(MatchReason::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}
