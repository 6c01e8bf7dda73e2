use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

/// Ordinal education level. Comparison follows the declaration order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EducationTier {
    Any = 0,
    Secondary = 1,
    HigherSecondary = 2,
    Undergraduate = 3,
    Postgraduate = 4,
    Doctoral = 5,
}

impl EducationTier {
    pub fn ordinal(self) -> u8 {
        self as u8
    }
}

/// Requirement descriptors that mean "no restriction".
pub const ANY_REQUIREMENTS: &[&str] = &["any", "any graduate", "any degree"];

const FILLER: &[&str] = &[
    "a", "all", "an", "and", "any", "at", "branch", "branches", "candidate", "candidates",
    "class", "completed", "equivalent", "field", "final", "for", "from", "in", "least",
    "minimum", "of", "on", "or", "pass", "passed", "preferred", "pursuing", "related",
    "relevant", "std", "stream", "student", "students", "the", "to", "with", "year",
];

const SECONDARY: &[&str] = &[
    "10th", "highschool", "matric", "matriculation", "secondary", "ssc", "sslc", "tenth",
];

const HIGHER_SECONDARY: &[&str] = &[
    "12th", "diploma", "highersecondary", "hsc", "intermediate", "polytechnic", "puc",
    "seniorsecondary", "twelfth",
];

const UNDERGRADUATE: &[&str] = &[
    "ba", "bachelor", "bachelors", "barch", "bba", "bca", "bcom", "bdes", "be", "bpharm", "bsc",
    "btech", "degree", "graduate", "graduation", "llb", "mbbs", "ug", "undergraduate",
];

const POSTGRADUATE: &[&str] = &[
    "llm", "ma", "master", "masters", "mba", "mca", "mcom", "mdes", "me", "mpharm", "mphil",
    "msc", "mtech", "pg", "pgdm", "postgraduate",
];

const DOCTORAL: &[&str] = &["doctoral", "doctorate", "doctor", "dphil", "phd"];

/// Degree abbreviations are short; the first-letter rules only apply up to this length.
const ABBREVIATION_MAX_LEN: usize = 5;

/// One step of the token → tier lookup.
#[derive(Debug, Clone, Copy)]
pub enum TierRule {
    /// Connective or filler words that imply no level.
    Neutral(&'static [&'static str]),
    Synonyms(EducationTier, &'static [&'static str]),
    Prefix(&'static str, EducationTier),
    Contains(&'static str, EducationTier),
    Default(EducationTier),
}

/// What a rule concluded about one token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenTier {
    Neutral,
    Tier(EducationTier),
}

impl TierRule {
    pub fn apply(&self, token: &str) -> Option<TokenTier> {
        match *self {
            TierRule::Neutral(words) => words.contains(&token).then_some(TokenTier::Neutral),
            TierRule::Synonyms(tier, words) => words.contains(&token).then_some(TokenTier::Tier(tier)),
            TierRule::Prefix(prefix, tier) => (token.len() <= ABBREVIATION_MAX_LEN
                && token.starts_with(prefix))
            .then_some(TokenTier::Tier(tier)),
            TierRule::Contains(needle, tier) => token.contains(needle).then_some(TokenTier::Tier(tier)),
            TierRule::Default(tier) => Some(TokenTier::Tier(tier)),
        }
    }
}

/// Evaluated top to bottom; the first rule that applies decides.
pub const TIER_RULES: &[TierRule] = &[
    TierRule::Neutral(FILLER),
    TierRule::Synonyms(EducationTier::Secondary, SECONDARY),
    TierRule::Synonyms(EducationTier::HigherSecondary, HIGHER_SECONDARY),
    TierRule::Synonyms(EducationTier::Undergraduate, UNDERGRADUATE),
    TierRule::Synonyms(EducationTier::Postgraduate, POSTGRADUATE),
    TierRule::Synonyms(EducationTier::Doctoral, DOCTORAL),
    TierRule::Prefix("b", EducationTier::Undergraduate),
    TierRule::Contains("bach", EducationTier::Undergraduate),
    TierRule::Prefix("m", EducationTier::Postgraduate),
    TierRule::Contains("master", EducationTier::Postgraduate),
    TierRule::Contains("phd", EducationTier::Doctoral),
    TierRule::Contains("doctor", EducationTier::Doctoral),
    TierRule::Default(EducationTier::Undergraduate),
];

pub fn token_tier(token: &str) -> TokenTier {
    TIER_RULES
        .iter()
        .find_map(|rule| rule.apply(token))
        .unwrap_or(TokenTier::Tier(EducationTier::Undergraduate))
}

/// Exact synonym-set membership only, without heuristics.
pub fn synonym_tier(token: &str) -> Option<EducationTier> {
    TIER_RULES.iter().find_map(|rule| match rule {
        TierRule::Synonyms(tier, words) if words.contains(&token) => Some(*tier),
        _ => None,
    })
}

pub fn synonyms(tier: EducationTier) -> &'static [&'static str] {
    match tier {
        EducationTier::Any => &[],
        EducationTier::Secondary => SECONDARY,
        EducationTier::HigherSecondary => HIGHER_SECONDARY,
        EducationTier::Undergraduate => UNDERGRADUATE,
        EducationTier::Postgraduate => POSTGRADUATE,
        EducationTier::Doctoral => DOCTORAL,
    }
}

/// Lowercase, turn `.`, `/` and `-` into spaces, collapse whitespace.
pub fn normalize_descriptor(text: &str) -> String {
    text.to_lowercase()
        .replace(['.', '/', '-'], " ")
        .split_whitespace()
        .collect::<Vec<_>>()
        .join(" ")
}

/// Descriptor tokens in order of appearance.
pub fn descriptor_tokens(text: &str) -> Vec<String> {
    normalize_descriptor(text)
        .split(|c: char| c.is_whitespace() || c == ',')
        .filter(|t| !t.is_empty())
        .map(str::to_string)
        .collect()
}

pub fn tokenize_requirement(text: &str) -> BTreeSet<String> {
    descriptor_tokens(text).into_iter().collect()
}

/// Tokens with split abbreviations re-joined: adjacent tokens whose
/// concatenation is a known synonym (`b tech`, `ph d`, `post graduate`)
/// become one term.
pub fn descriptor_terms(text: &str) -> Vec<String> {
    let tokens = descriptor_tokens(text);
    let mut terms = Vec::with_capacity(tokens.len());

    let mut i = 0;
    while i < tokens.len() {
        if let Some(next) = tokens.get(i + 1) {
            let joined = format!("{}{}", tokens[i], next);
            if synonym_tier(&joined).is_some() {
                terms.push(joined);
                i += 2;
                continue;
            }
        }
        terms.push(tokens[i].clone());
        i += 1;
    }

    terms
}

fn descriptor_tier(text: &str) -> EducationTier {
    descriptor_terms(text)
        .iter()
        .filter_map(|term| match token_tier(term) {
            TokenTier::Tier(tier) => Some(tier),
            TokenTier::Neutral => None,
        })
        .max()
        .unwrap_or(EducationTier::Any)
}

pub fn is_any_requirement(text: &str) -> bool {
    let normalized = normalize_descriptor(text);
    normalized.is_empty() || ANY_REQUIREMENTS.contains(&normalized.as_str())
}

/// Highest tier implied by a posting's requirement. Empty or "any" → `Any`.
pub fn requirement_tier(text: &str) -> EducationTier {
    if is_any_requirement(text) {
        return EducationTier::Any;
    }
    descriptor_tier(text)
}

/// Tier of a candidate's education. Empty → `Any`, which the filter treats as unrestricted.
pub fn candidate_tier(text: &str) -> EducationTier {
    if normalize_descriptor(text).is_empty() {
        return EducationTier::Any;
    }
    descriptor_tier(text)
}
