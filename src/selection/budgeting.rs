use crate::types::recommendation::{Recommendation, ScoredPosting};
use super::ranking::explanation_text;

pub struct TopKResult {
    pub selected: Vec<Recommendation>,
    pub postings_selected: usize,
    pub postings_excluded: usize,
}

/// Keep the first `top_k` ranked postings and turn them into owned recommendations.
/// Expects `ranked` to be sorted already.
pub fn apply_top_k(ranked: Vec<ScoredPosting<'_>>, top_k: usize) -> TopKResult {
    let total = ranked.len();

    let selected: Vec<Recommendation> = ranked
        .into_iter()
        .take(top_k)
        .map(|sp| Recommendation {
            id: sp.posting.id.as_str().to_string(),
            title: sp.posting.title.clone(),
            company: sp.posting.company.clone(),
            location: sp.posting.location.clone(),
            skills: sp.posting.skills.clone(),
            sector: sp.posting.sector.clone(),
            required_education: sp.posting.required_education.clone(),
            score: sp.score,
            explanation: explanation_text(&sp.signals),
            signals: sp.signals,
            refinement: None,
        })
        .collect();

    let postings_selected = selected.len();
    TopKResult {
        selected,
        postings_selected,
        postings_excluded: total - postings_selected,
    }
}
