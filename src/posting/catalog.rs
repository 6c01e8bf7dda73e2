use std::collections::BTreeSet;
use std::io::Read;
use std::path::Path;

use thiserror::Error;

use crate::types::identifiers::{CatalogVersion, PostingId};
use super::posting::{Posting, RawPosting};

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
}

/// An immutable, ordered snapshot of postings with unique identifiers.
///
/// Catalogs are replaced wholesale on reload; there are no mutation methods.
#[derive(Debug, Clone, PartialEq)]
pub struct Catalog {
    postings: Vec<Posting>,
    version: CatalogVersion,
}

impl Catalog {
    pub fn empty() -> Self {
        Self::from_postings(Vec::new())
    }

    /// Normalize raw rows, synthesize missing ids and drop duplicate ids.
    /// The first occurrence of an id wins.
    ///
    /// A row without an id takes its 1-based row number, or the next free
    /// number when that is already taken. Synthesized ids never collide with
    /// an id present in the source, so only repeated source ids are dropped.
    pub fn from_raw(rows: Vec<RawPosting>) -> Self {
        let explicit: BTreeSet<PostingId> = rows
            .iter()
            .filter_map(|raw| raw.id.as_deref().and_then(PostingId::parse))
            .collect();

        let mut seen = BTreeSet::new();
        let mut postings = Vec::with_capacity(rows.len());

        for (index, raw) in rows.into_iter().enumerate() {
            let mut row = index + 1;
            let mut fallback = PostingId::sequential(row);
            while explicit.contains(&fallback) || seen.contains(&fallback) {
                row += 1;
                fallback = PostingId::sequential(row);
            }

            let posting = Posting::ingest(raw, fallback);
            if !seen.insert(posting.id.clone()) {
                tracing::warn!(id = %posting.id, row = index + 1, "dropping posting with duplicate id");
                continue;
            }
            postings.push(posting);
        }

        Self::from_postings(postings)
    }

    pub fn from_csv_path(path: &Path) -> Result<Self, CatalogError> {
        let file = std::fs::File::open(path)?;
        let catalog = Self::from_csv_reader(file)?;
        tracing::info!(path = %path.display(), postings = catalog.len(), version = catalog.version.as_str(), "catalog loaded");
        Ok(catalog)
    }

    /// Read a catalog from CSV with a header row.
    ///
    /// Headers are matched case-insensitively after trimming. Every column
    /// whose name starts with `skill` contributes to the skills field.
    pub fn from_csv_reader<R: Read>(reader: R) -> Result<Self, CatalogError> {
        let mut rdr = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

        let headers: Vec<String> = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_lowercase())
            .collect();

        let position = |names: &[&str]| headers.iter().position(|h| names.contains(&h.as_str()));
        let idx_id = position(&["internship_id", "id"]);
        let idx_title = position(&["title"]);
        let idx_company = position(&["company"]);
        let idx_description = position(&["description"]);
        let idx_education = position(&["required_education"]);
        let idx_sector = position(&["sector"]);
        let idx_location = position(&["location"]);
        let skill_columns: Vec<usize> = headers
            .iter()
            .enumerate()
            .filter(|(_, h)| h.starts_with("skill"))
            .map(|(i, _)| i)
            .collect();

        let mut rows = Vec::new();
        for record in rdr.records() {
            let record = record?;
            let field = |idx: Option<usize>| idx.and_then(|i| record.get(i)).map(str::to_string);

            rows.push(RawPosting {
                id: field(idx_id),
                title: field(idx_title),
                company: field(idx_company),
                description: field(idx_description),
                required_education: field(idx_education),
                sector: field(idx_sector),
                location: field(idx_location),
                skills: skill_columns
                    .iter()
                    .filter_map(|&i| record.get(i))
                    .map(str::to_string)
                    .collect(),
            });
        }

        Ok(Self::from_raw(rows))
    }

    /// Sub-catalog of the postings matching `keep`, in original order.
    /// The version is recomputed, so spaces fit on `self` are invalid for the result
    /// whenever membership changed.
    pub fn retain<F>(&self, mut keep: F) -> Self
    where
        F: FnMut(&Posting) -> bool,
    {
        let postings = self.postings.iter().filter(|p| keep(p)).cloned().collect();
        Self::from_postings(postings)
    }

    pub fn postings(&self) -> &[Posting] {
        &self.postings
    }

    pub fn version(&self) -> &CatalogVersion {
        &self.version
    }

    pub fn len(&self) -> usize {
        self.postings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.postings.is_empty()
    }

    fn from_postings(postings: Vec<Posting>) -> Self {
        let version = CatalogVersion::from_postings(&postings);
        Self { postings, version }
    }
}
