use serde::{Deserialize, Serialize};

/// How a document is split into vocabulary terms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Analyzer {
    /// Word tokens (two or more word characters) plus contiguous n-grams up to `ngram_max`.
    Words { ngram_max: usize },
    /// Comma-delimited tokens; internal whitespace is part of the token.
    CommaTokens,
}

impl Analyzer {
    pub fn analyze(&self, text: &str) -> Vec<String> {
        match *self {
            Analyzer::Words { ngram_max } => word_ngrams(&word_tokens(text), ngram_max),
            Analyzer::CommaTokens => comma_tokens(text),
        }
    }
}

pub fn word_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(|c: char| !(c.is_alphanumeric() || c == '_'))
        .filter(|token| token.chars().count() >= 2)
        .map(str::to_string)
        .collect()
}

/// All unigrams in order, then bigrams in order, and so on up to `ngram_max`.
pub fn word_ngrams(tokens: &[String], ngram_max: usize) -> Vec<String> {
    let mut terms = tokens.to_vec();
    for n in 2..=ngram_max {
        terms.extend(tokens.windows(n).map(|window| window.join(" ")));
    }
    terms
}

pub fn comma_tokens(text: &str) -> Vec<String> {
    text.to_lowercase()
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}
