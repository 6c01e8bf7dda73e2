use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::posting::normalize::{clean_location, clean_text};

/// Raw request payload describing a candidate.
/// Field names follow the public request format (`sector`, `location` singular).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CandidateProfile {
    pub education: Option<String>,
    pub skills: Vec<String>,
    pub sector: Vec<String>,
    pub location: Vec<String>,
}

/// A normalized candidate, constructed fresh per request.
/// Normalization rules:
/// - Every value passes through the catalog text cleaner (locations through the location cleaner)
/// - Empty values are dropped
/// - Sets are ordered, so duplicates and input order never matter
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Candidate {
    pub education: String,
    pub skills: BTreeSet<String>,
    pub sectors: BTreeSet<String>,
    pub locations: BTreeSet<String>,
}

impl Candidate {
    pub fn new<I, S>(education: Option<&str>, skills: I, sectors: I, locations: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            education: clean_text(education),
            skills: clean_set(skills, clean_text),
            sectors: clean_set(sectors, clean_text),
            locations: clean_set(locations, clean_location),
        }
    }

    /// Text projected into the description space:
    /// education, skills, sectors, locations, space-joined in that order.
    pub fn description_text(&self) -> String {
        let mut parts: Vec<String> = Vec::with_capacity(4);
        if !self.education.is_empty() {
            parts.push(self.education.clone());
        }
        for set in [&self.skills, &self.sectors, &self.locations] {
            if !set.is_empty() {
                parts.push(set.iter().map(String::as_str).collect::<Vec<_>>().join(" "));
            }
        }
        parts.join(" ")
    }

    /// Text projected into the skill space: comma-joined skills.
    pub fn skill_text(&self) -> String {
        self.skills
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// One-line summary handed to the refinement collaborator.
    pub fn summary(&self) -> String {
        let join = |set: &BTreeSet<String>| set.iter().map(String::as_str).collect::<Vec<_>>().join(", ");
        format!(
            "Education={}; Skills={}; Sectors={}; Locations={}",
            self.education,
            join(&self.skills),
            join(&self.sectors),
            join(&self.locations),
        )
    }
}

impl From<CandidateProfile> for Candidate {
    fn from(profile: CandidateProfile) -> Self {
        Candidate::new(
            profile.education.as_deref(),
            profile.skills,
            profile.sector,
            profile.location,
        )
    }
}

fn clean_set<I, S>(values: I, clean: fn(Option<&str>) -> String) -> BTreeSet<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    values
        .into_iter()
        .flat_map(|value| {
            // A single submitted value may itself carry several comma-separated entries.
            clean(Some(value.as_ref()))
                .split(',')
                .map(|part| part.trim().to_string())
                .collect::<Vec<_>>()
        })
        .filter(|value| !value.is_empty())
        .collect()
}
