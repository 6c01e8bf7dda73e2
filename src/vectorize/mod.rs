pub mod analyzer;
pub mod sparse;
pub mod tfidf;

pub use analyzer::Analyzer;
pub use sparse::{cosine, SparseVector};
pub use tfidf::TfidfModel;

/// A fitted weighting model plus the document-term rows of the corpus it was fit on.
/// Row `i` belongs to document `i` of that corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct VectorSpace {
    model: TfidfModel,
    rows: Vec<SparseVector>,
}

impl VectorSpace {
    pub fn fit<S: AsRef<str>>(analyzer: Analyzer, documents: &[S], max_terms: usize) -> Self {
        let (model, rows) = TfidfModel::fit(analyzer, documents, max_terms);
        Self { model, rows }
    }

    pub fn project(&self, text: &str) -> SparseVector {
        self.model.transform(text)
    }

    /// Cosine similarity of `query` against every row, in row order.
    pub fn similarities(&self, query: &SparseVector) -> Vec<f64> {
        if query.is_zero() {
            return vec![0.0; self.rows.len()];
        }
        self.rows.iter().map(|row| cosine(query, row)).collect()
    }

    pub fn model(&self) -> &TfidfModel {
        &self.model
    }

    pub fn rows(&self) -> &[SparseVector] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn vocabulary_size(&self) -> usize {
        self.model.vocabulary_size()
    }
}
