use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::types::candidate::Candidate;
use crate::types::identifiers::ProfileHash;

#[derive(Debug, Error)]
pub enum FeedbackError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FeedbackKind {
    Impression,
    Upvote,
    Downvote,
}

/// A single telemetry record. The candidate is only ever stored as a hash.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeedbackEvent {
    pub profile: ProfileHash,
    pub posting_id: String,
    pub kind: FeedbackKind,
    pub recorded_at: DateTime<Utc>,
}

impl FeedbackEvent {
    pub fn new(candidate: &Candidate, posting_id: impl Into<String>, kind: FeedbackKind) -> Self {
        Self {
            profile: ProfileHash::from_candidate(candidate),
            posting_id: posting_id.into(),
            kind,
            recorded_at: Utc::now(),
        }
    }
}

pub trait FeedbackSink {
    fn record(&self, event: &FeedbackEvent) -> Result<(), FeedbackError>;
}

/// Appends one JSON object per line.
#[derive(Debug, Clone)]
pub struct JsonlFeedbackSink {
    path: PathBuf,
}

impl JsonlFeedbackSink {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read_all(&self) -> Result<Vec<FeedbackEvent>, FeedbackError> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let raw = std::fs::read_to_string(&self.path)?;
        raw.lines()
            .filter(|line| !line.trim().is_empty())
            .map(|line| serde_json::from_str(line).map_err(FeedbackError::from))
            .collect()
    }
}

impl FeedbackSink for JsonlFeedbackSink {
    fn record(&self, event: &FeedbackEvent) -> Result<(), FeedbackError> {
        let mut line = serde_json::to_vec(event)?;
        line.push(b'\n');

        let mut f = OpenOptions::new().create(true).append(true).open(&self.path)?;
        f.write_all(&line)?;
        f.sync_all()?;

        tracing::debug!(kind = ?event.kind, posting_id = %event.posting_id, "feedback recorded");
        Ok(())
    }
}
