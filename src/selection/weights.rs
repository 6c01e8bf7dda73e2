use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum WeightError {
    #[error("Weight `{0}` must be finite and non-negative")]
    InvalidComponent(&'static str),
    #[error("Weights sum to zero")]
    ZeroTotal,
    #[error("Skill weight must strictly dominate every other weight")]
    SkillNotDominant,
}

/// Relative importance of the five signals, before normalization.
///
/// Hierarchy: skills > description > sector > location > education.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScoringWeights {
    pub skill: f64,
    pub description: f64,
    pub sector: f64,
    pub location: f64,
    pub education: f64,
}

impl Default for ScoringWeights {
    fn default() -> Self {
        Self {
            skill: 0.60,
            description: 0.20,
            sector: 0.12,
            location: 0.05,
            education: 0.03,
        }
    }
}

impl ScoringWeights {
    /// Profile that trades description similarity for categorical matches.
    pub fn precision() -> Self {
        Self {
            skill: 0.60,
            description: 0.10,
            sector: 0.12,
            location: 0.10,
            education: 0.08,
        }
    }

    /// Scale so the five weights sum to 1.0.
    pub fn normalized(&self) -> Result<NormalizedWeights, WeightError> {
        let components = [
            ("skill", self.skill),
            ("description", self.description),
            ("sector", self.sector),
            ("location", self.location),
            ("education", self.education),
        ];
        for (name, value) in components {
            if !value.is_finite() || value < 0.0 {
                return Err(WeightError::InvalidComponent(name));
            }
        }

        let total: f64 = components.iter().map(|(_, v)| v).sum();
        if total <= 0.0 {
            return Err(WeightError::ZeroTotal);
        }

        Ok(NormalizedWeights(ScoringWeights {
            skill: self.skill / total,
            description: self.description / total,
            sector: self.sector / total,
            location: self.location / total,
            education: self.education / total,
        }))
    }

    pub fn skill_dominates(&self) -> bool {
        [self.description, self.sector, self.location, self.education]
            .iter()
            .all(|&w| self.skill > w)
    }
}

/// Weights guaranteed to sum to 1.0.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(transparent)]
pub struct NormalizedWeights(ScoringWeights);

impl NormalizedWeights {
    pub fn get(&self) -> &ScoringWeights {
        &self.0
    }

    pub fn sum(&self) -> f64 {
        let w = &self.0;
        w.skill + w.description + w.sector + w.location + w.education
    }
}
