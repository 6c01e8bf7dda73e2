use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::posting::Posting;
use crate::types::candidate::Candidate;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PostingId(String);

impl PostingId {
    /// Create a PostingId from a raw source identifier.
    /// Returns `None` when the identifier is blank after trimming.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            None
        } else {
            Some(PostingId(trimmed.to_string()))
        }
    }

    /// Sequential identifier for rows that arrive without one (1-based row number).
    pub fn sequential(row: usize) -> Self {
        PostingId(row.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for PostingId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Content hash of an ordered catalog snapshot.
///
/// Row order participates in the hash: a reordered catalog is a different
/// identity because vector-space rows are positional.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CatalogVersion(String);

impl CatalogVersion {
    pub fn from_postings(postings: &[Posting]) -> Self {
        let mut hasher = Sha256::new();

        for posting in postings {
            for field in [
                posting.id.as_str(),
                &posting.title,
                &posting.description,
                &posting.required_education,
                &posting.sector,
                &posting.location,
                &posting.skills,
            ] {
                hasher.update(field.as_bytes());
                hasher.update([0u8]);
            }
            hasher.update(b"\n");
        }

        let hash = hasher.finalize();
        CatalogVersion(format!("sha256:{}", hex::encode(hash)))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Anonymized key for a candidate profile, used by feedback sinks.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProfileHash(String);

impl ProfileHash {
    pub fn from_candidate(candidate: &Candidate) -> Self {
        let mut hasher = Sha256::new();

        // BTreeSet iteration is sorted; input order never changes the hash.
        hasher.update(candidate.education.as_bytes());
        for (label, values) in [
            ("skills", &candidate.skills),
            ("sectors", &candidate.sectors),
            ("locations", &candidate.locations),
        ] {
            hasher.update([0u8]);
            hasher.update(label.as_bytes());
            for value in values {
                hasher.update([0x1fu8]);
                hasher.update(value.as_bytes());
            }
        }

        ProfileHash(format!("sha256:{}", hex::encode(hasher.finalize())))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}
