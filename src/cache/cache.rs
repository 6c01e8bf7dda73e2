// This is intentionally thin:
// no mutation
// no "refit" methods
// shared reads only

use crate::cache::SpaceManifest;
use crate::posting::Catalog;
use crate::vectorize::VectorSpace;

/// The description space and skill space fit on one catalog snapshot.
#[derive(Debug, Clone)]
pub struct FittedSpaces {
    pub manifest: SpaceManifest,
    pub description: VectorSpace,
    pub skill: VectorSpace,
}

impl FittedSpaces {
    /// True when these spaces were fit on exactly this catalog snapshot,
    /// so row `i` of each space still belongs to posting `i`.
    pub fn is_valid_for(&self, catalog: &Catalog) -> bool {
        self.manifest.catalog_version == *catalog.version()
            && self.manifest.posting_count == catalog.len()
            && self.description.row_count() == catalog.len()
            && self.skill.row_count() == catalog.len()
    }
}
