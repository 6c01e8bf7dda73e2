use serde::{Deserialize, Serialize};

use crate::types::identifiers::PostingId;
use super::normalize::{clean_location, clean_text, join_skill_columns, split_skills, SKILL_JOIN};

/// A catalog row as it arrives from the catalog source, before normalization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawPosting {
    pub id: Option<String>,
    pub title: Option<String>,
    pub company: Option<String>,
    pub description: Option<String>,
    pub required_education: Option<String>,
    pub sector: Option<String>,
    pub location: Option<String>,
    /// One entry per raw skill column, in column order.
    pub skills: Vec<String>,
}

/// One normalized internship posting.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Posting {
    pub id: PostingId,
    pub title: String,
    pub company: String,
    pub description: String,
    pub required_education: String,
    pub sector: String,
    pub location: String,
    pub skills: String,
    pub skills_list: Vec<String>,
}

impl Posting {
    /// Normalize a raw row into a Posting.
    ///
    /// This is the ONLY way to construct a Posting.
    /// `fallback_id` is used when the row carries no identifier.
    pub fn ingest(raw: RawPosting, fallback_id: PostingId) -> Self {
        let id = raw
            .id
            .as_deref()
            .and_then(PostingId::parse)
            .unwrap_or(fallback_id);

        let skill_columns: Vec<Option<&str>> = raw.skills.iter().map(|s| Some(s.as_str())).collect();
        // A skill listed twice counts once
        let skills_list = split_skills(&join_skill_columns(&skill_columns));
        let skills = skills_list.join(SKILL_JOIN);

        Posting {
            id,
            title: clean_text(raw.title.as_deref()),
            company: clean_text(raw.company.as_deref()),
            description: clean_text(raw.description.as_deref()),
            required_education: clean_text(raw.required_education.as_deref()),
            sector: clean_text(raw.sector.as_deref()),
            location: clean_location(raw.location.as_deref()),
            skills,
            skills_list,
        }
    }

    /// Free text fed to the description space.
    pub fn description_text(&self) -> String {
        format!("{} {}", self.title, self.description)
    }
}
