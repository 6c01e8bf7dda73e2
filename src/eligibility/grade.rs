use super::tier::{
    candidate_tier, descriptor_terms, is_any_requirement, normalize_descriptor, requirement_tier,
    synonym_tier, synonyms, EducationTier,
};

/// Graded education confidence used by the scorer.
///
/// Values: 1.0 exact, 0.8 substring overlap, 0.5 same inferred tier, 0.0 unrelated.
/// An unspecified requirement or an empty candidate education always grades 1.0.
pub fn education_score(candidate_education: &str, requirement: &str) -> f64 {
    if is_any_requirement(requirement) {
        return 1.0;
    }

    let candidate = normalize_descriptor(candidate_education);
    if candidate.is_empty() {
        return 1.0;
    }

    let terms = descriptor_terms(requirement);

    if let Some(group) = named_group(&candidate) {
        let members = synonyms(group);
        let related = terms.iter().any(|term| match synonym_tier(term) {
            Some(tier) => tier == group,
            None => members.iter().any(|member| overlaps(term, member)),
        });
        return if related { 1.0 } else { 0.0 };
    }

    let compact = candidate.replace(' ', "");
    if terms.iter().any(|term| *term == compact) {
        return 1.0;
    }
    if terms.iter().any(|term| overlaps(term, &compact)) {
        return 0.8;
    }

    let tier = candidate_tier(candidate_education);
    if tier != EducationTier::Any && tier == requirement_tier(requirement) {
        return 0.5;
    }

    0.0
}

/// Candidates may name a whole level instead of a degree.
fn named_group(candidate: &str) -> Option<EducationTier> {
    match candidate {
        "secondary" => Some(EducationTier::Secondary),
        "higher secondary" | "senior secondary" => Some(EducationTier::HigherSecondary),
        "undergraduate" | "under graduate" => Some(EducationTier::Undergraduate),
        "post graduate" | "postgraduate" => Some(EducationTier::Postgraduate),
        "phd" | "doctoral" | "doctorate" => Some(EducationTier::Doctoral),
        _ => None,
    }
}

/// Substring relation in either direction. Two-letter codes (`ba`, `me`) only match exactly.
fn overlaps(a: &str, b: &str) -> bool {
    a.len() >= 3 && b.len() >= 3 && (a.contains(b) || b.contains(a))
}
