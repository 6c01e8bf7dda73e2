pub mod cache;
pub mod versioning;
pub mod invalidation;

pub use invalidation::{SpaceBuildError, SpaceBuilder};
pub use cache::FittedSpaces;
pub use versioning::{SpaceBuildConfig, SpaceManifest};
