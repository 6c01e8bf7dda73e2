//! Boundary to an optional language-generation collaborator that may
//! re-order the ranked list and attach a one-sentence reason per item.
//!
//! The collaborator is non-authoritative. Its output is parsed defensively
//! and discarded on any failure; the engine's ranking then stands unchanged.

use std::collections::BTreeMap;

use serde_json::Value;
use thiserror::Error;

use crate::types::candidate::Candidate;
use crate::types::recommendation::{Recommendation, Refinement};

const FIELD_PREVIEW_CHARS: usize = 200;

#[derive(Debug, Error)]
pub enum RefineError {
    #[error("Refiner unavailable: {0}")]
    Unavailable(String),
    #[error("Empty refiner response")]
    Empty,
    #[error("Malformed refiner response: {0}")]
    Malformed(String),
}

/// A text-completion collaborator. Implementations own transport and timeouts.
pub trait Refiner {
    fn complete(&self, prompt: &str) -> Result<String, RefineError>;
}

/// One item shown to the collaborator.
#[derive(Debug, Clone, PartialEq)]
pub struct RefineItem {
    pub id: String,
    pub title: String,
    pub skills: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct RefineRequest {
    pub candidate_summary: String,
    pub items: Vec<RefineItem>,
    pub top_k: usize,
}

impl RefineRequest {
    pub fn new(candidate: &Candidate, recommendations: &[Recommendation], top_k: usize) -> Self {
        Self {
            candidate_summary: candidate.summary(),
            items: recommendations
                .iter()
                .map(|r| RefineItem {
                    id: r.id.clone(),
                    title: preview(&r.title),
                    skills: preview(&r.skills),
                })
                .collect(),
            top_k,
        }
    }

    pub fn prompt(&self) -> String {
        let mut lines = vec![
            "Rank these internship postings for this candidate.".to_string(),
            format!("Candidate: {}", self.candidate_summary),
            String::new(),
            "Internships (id: title | skills):".to_string(),
        ];
        for item in &self.items {
            lines.push(format!("{}: {} | {}", item.id, item.title, item.skills));
        }
        lines.push(String::new());
        lines.push(format!(
            "Return a JSON array of up to {} objects ordered best-to-worst. \
             Each object must be {{\"id\":<id>,\"rank\":<1..N>,\"reason\":\"one short sentence\"}}. \
             Return JSON only.",
            self.top_k
        ));
        lines.join("\n")
    }
}

/// One parsed entry of the collaborator's answer.
#[derive(Debug, Clone, PartialEq)]
pub struct RefinedEntry {
    pub id: String,
    pub rank: Option<u32>,
    pub reason: String,
}

/// Parse a JSON array of `{id, rank, reason}` objects.
///
/// Accepts the array on its own or embedded in surrounding prose; entries
/// without an id are skipped.
pub fn parse_refinement(text: &str) -> Result<Vec<RefinedEntry>, RefineError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(RefineError::Empty);
    }

    let value: Value = match serde_json::from_str(trimmed) {
        Ok(value) => value,
        Err(_) => {
            let embedded = match (trimmed.find('['), trimmed.rfind(']')) {
                (Some(start), Some(end)) if start < end => &trimmed[start..=end],
                _ => return Err(RefineError::Malformed("no JSON array found".into())),
            };
            serde_json::from_str(embedded).map_err(|e| RefineError::Malformed(e.to_string()))?
        }
    };

    let Value::Array(items) = value else {
        return Err(RefineError::Malformed("expected a JSON array".into()));
    };

    Ok(items.iter().filter_map(parse_entry).collect())
}

fn parse_entry(item: &Value) -> Option<RefinedEntry> {
    let id = match item.get("id")? {
        Value::String(s) => s.trim().to_string(),
        Value::Number(n) => n.to_string(),
        _ => return None,
    };
    if id.is_empty() {
        return None;
    }

    let rank = match item.get("rank") {
        Some(Value::Number(n)) => n.as_u64().and_then(|r| u32::try_from(r).ok()),
        Some(Value::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    let reason = item
        .get("reason")
        .and_then(Value::as_str)
        .unwrap_or_default()
        .to_string();

    Some(RefinedEntry { id, rank, reason })
}

/// Attach reasons by id and, if any rank was given, stable-sort by rank
/// with unranked items last.
pub fn apply_refinement(
    recommendations: Vec<Recommendation>,
    entries: &[RefinedEntry],
) -> Vec<Recommendation> {
    let by_id: BTreeMap<&str, &RefinedEntry> = entries.iter().map(|e| (e.id.as_str(), e)).collect();

    let mut out: Vec<Recommendation> = recommendations
        .into_iter()
        .map(|mut rec| {
            if let Some(entry) = by_id.get(rec.id.as_str()) {
                rec.refinement = Some(Refinement {
                    rank: entry.rank,
                    reason: entry.reason.clone(),
                });
            }
            rec
        })
        .collect();

    let any_ranked = out
        .iter()
        .any(|r| r.refinement.as_ref().and_then(|f| f.rank).is_some());
    if any_ranked {
        out.sort_by_key(|r| r.refinement.as_ref().and_then(|f| f.rank).unwrap_or(u32::MAX));
    }

    out
}

/// Run `refiner` over `recommendations`; on any failure log a warning and
/// return the input unchanged.
pub fn refine_best_effort(
    refiner: &dyn Refiner,
    candidate: &Candidate,
    recommendations: Vec<Recommendation>,
    top_k: usize,
) -> Vec<Recommendation> {
    if recommendations.is_empty() {
        return recommendations;
    }

    let prompt = RefineRequest::new(candidate, &recommendations, top_k).prompt();

    let entries = refiner
        .complete(&prompt)
        .and_then(|text| parse_refinement(&text));

    match entries {
        Ok(entries) => {
            tracing::debug!(entries = entries.len(), "refinement applied");
            apply_refinement(recommendations, &entries)
        }
        Err(e) => {
            tracing::warn!(error = %e, "discarding refinement, keeping engine ranking");
            recommendations
        }
    }
}

fn preview(text: &str) -> String {
    text.chars().take(FIELD_PREVIEW_CHARS).collect()
}
