use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::analyzer::Analyzer;
use super::sparse::SparseVector;

/// A fitted term-weighting model.
///
/// - Vocabulary: the `max_terms` most frequent terms across the corpus
///   (ties broken by term, ascending); columns are assigned in term order.
/// - IDF: smoothed, `ln((1 + n) / (1 + df)) + 1`.
/// - Rows: raw term count × idf, L2-normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TfidfModel {
    analyzer: Analyzer,
    vocabulary: BTreeMap<String, usize>,
    idf: Vec<f64>,
}

impl TfidfModel {
    /// Fit on `documents` and return the model together with one row per document,
    /// in document order.
    pub fn fit<S: AsRef<str>>(
        analyzer: Analyzer,
        documents: &[S],
        max_terms: usize,
    ) -> (Self, Vec<SparseVector>) {
        let counted: Vec<BTreeMap<String, usize>> = documents
            .iter()
            .map(|doc| count_terms(analyzer.analyze(doc.as_ref())))
            .collect();

        let mut corpus_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        let mut document_frequency: BTreeMap<&str, usize> = BTreeMap::new();
        for counts in &counted {
            for (term, count) in counts {
                *corpus_frequency.entry(term.as_str()).or_insert(0) += count;
                *document_frequency.entry(term.as_str()).or_insert(0) += 1;
            }
        }

        let mut ranked: Vec<(&str, usize)> = corpus_frequency.into_iter().collect();
        // Descending frequency, ascending term
        ranked.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        ranked.truncate(max_terms);

        let mut selected: Vec<&str> = ranked.into_iter().map(|(term, _)| term).collect();
        selected.sort_unstable();

        let n = documents.len() as f64;
        let mut vocabulary = BTreeMap::new();
        let mut idf = Vec::with_capacity(selected.len());
        for (column, term) in selected.iter().enumerate() {
            let df = document_frequency.get(term).copied().unwrap_or(0) as f64;
            idf.push(((1.0 + n) / (1.0 + df)).ln() + 1.0);
            vocabulary.insert((*term).to_string(), column);
        }

        let model = TfidfModel {
            analyzer,
            vocabulary,
            idf,
        };
        let rows = counted.iter().map(|counts| model.weigh(counts)).collect();

        (model, rows)
    }

    /// Project unseen text into this model's space.
    /// Out-of-vocabulary terms are ignored; text with no known terms maps to the zero vector.
    pub fn transform(&self, text: &str) -> SparseVector {
        self.weigh(&count_terms(self.analyzer.analyze(text)))
    }

    pub fn analyzer(&self) -> Analyzer {
        self.analyzer
    }

    pub fn vocabulary_size(&self) -> usize {
        self.vocabulary.len()
    }

    pub fn contains(&self, term: &str) -> bool {
        self.vocabulary.contains_key(term)
    }

    pub fn idf(&self, term: &str) -> Option<f64> {
        self.vocabulary.get(term).map(|&column| self.idf[column])
    }

    fn weigh(&self, counts: &BTreeMap<String, usize>) -> SparseVector {
        let pairs = counts
            .iter()
            .filter_map(|(term, &count)| {
                self.vocabulary
                    .get(term)
                    .map(|&column| (column, count as f64 * self.idf[column]))
            })
            .collect();

        SparseVector::from_pairs(pairs).l2_normalized()
    }
}

fn count_terms(terms: Vec<String>) -> BTreeMap<String, usize> {
    let mut counts = BTreeMap::new();
    for term in terms {
        *counts.entry(term).or_insert(0) += 1;
    }
    counts
}
