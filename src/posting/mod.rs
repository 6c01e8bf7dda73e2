pub mod catalog;
pub mod normalize;
pub mod posting;

pub use crate::types::identifiers::{CatalogVersion, PostingId};
pub use catalog::{Catalog, CatalogError};
pub use posting::{Posting, RawPosting};
