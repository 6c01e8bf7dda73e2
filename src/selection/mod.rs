pub mod budgeting;
pub mod ranking;
pub mod scoring;
pub mod weights;

use std::borrow::Cow;
use std::sync::Arc;

use crate::cache::{FittedSpaces, SpaceBuilder};
use crate::config::RecommenderConfig;
use crate::eligibility::{candidate_tier, EligibilityFilter};
use crate::posting::Catalog;
use crate::refine::{refine_best_effort, Refiner};
use crate::types::candidate::Candidate;
use crate::types::recommendation::{
	RecommendError, RecommendationMetadata, RecommendationResult, ScoredPosting,
};
pub use budgeting::{apply_top_k, TopKResult};
pub use ranking::{explain, explanation_text, rank, rank_top_k};
pub use scoring::{location_match, sector_match, ScoringEngine, ScoringError};
pub use weights::{NormalizedWeights, ScoringWeights, WeightError};

/// Two-stage pipeline: eligibility filter, then scoring against vector spaces
/// that are known to match the filtered catalog.
///
/// The full-catalog spaces are fit once in [`Recommender::new`] and shared
/// read-only. A request whose eligible set differs from the catalog gets its
/// own request-local spaces; the shared ones are never touched.
#[derive(Debug, Clone)]
pub struct Recommender {
	catalog: Arc<Catalog>,
	spaces: Arc<FittedSpaces>,
	builder: SpaceBuilder,
	engine: ScoringEngine,
	filter: EligibilityFilter,
	refine_pool_size: usize,
}

impl Recommender {
	pub fn new(catalog: Catalog, config: RecommenderConfig) -> Result<Self, RecommendError> {
		let engine = ScoringEngine::new(config.weights)?;
		let builder = SpaceBuilder::new(config.spaces)?;
		let spaces = builder.build(&catalog);

		Ok(Self {
			catalog: Arc::new(catalog),
			spaces: Arc::new(spaces),
			builder,
			engine,
			filter: EligibilityFilter,
			refine_pool_size: config.refine_pool_size,
		})
	}

	pub fn catalog(&self) -> &Catalog {
		&self.catalog
	}

	pub fn spaces(&self) -> &FittedSpaces {
		&self.spaces
	}

	pub fn engine(&self) -> &ScoringEngine {
		&self.engine
	}

	#[tracing::instrument(skip_all, fields(top_k = top_k, postings = self.catalog.len()))]
	pub fn recommend(
		&self,
		candidate: &Candidate,
		top_k: usize,
	) -> Result<RecommendationResult, RecommendError> {
		if top_k == 0 {
			return Err(RecommendError::InvalidTopK(top_k));
		}

		// 1. Eligibility Phase
		let eligible: Cow<'_, Catalog> = self.filter.eligible(candidate, &self.catalog);

		// 2. Space Phase: reuse shared spaces only while they still describe the eligible set
		let spaces: Cow<'_, FittedSpaces> = if self.spaces.is_valid_for(&eligible) {
			Cow::Borrowed(self.spaces.as_ref())
		} else {
			Cow::Owned(self.builder.build(&eligible))
		};
		let spaces_refit = matches!(spaces, Cow::Owned(_));

		// 3. Scoring Phase
		let mut scored: Vec<ScoredPosting> = self.engine.score(candidate, &eligible, &spaces)?;

		// 4. Ordering Phase
		rank(&mut scored);

		// 5. Top-K Phase
		let TopKResult {
			selected,
			postings_selected,
			..
		} = apply_top_k(scored, top_k);

		debug_assert_eq!(postings_selected, top_k.min(eligible.len()));

		let metadata = RecommendationMetadata {
			top_k,
			candidate_tier: candidate_tier(&candidate.education),
			postings_considered: self.catalog.len(),
			postings_eligible: eligible.len(),
			postings_returned: postings_selected,
			spaces_refit,
		};

		Ok(RecommendationResult {
			recommendations: selected,
			metadata,
		})
	}

	/// Rank a wider pool, let `refiner` re-order and annotate it, then keep `top_k`.
	///
	/// Refinement is best-effort: any failure leaves the engine's own order in place.
	pub fn recommend_refined(
		&self,
		candidate: &Candidate,
		top_k: usize,
		refiner: &dyn Refiner,
	) -> Result<RecommendationResult, RecommendError> {
		if top_k == 0 {
			return Err(RecommendError::InvalidTopK(top_k));
		}

		let pool_size = top_k.max(self.refine_pool_size);
		let mut result = self.recommend(candidate, pool_size)?;

		let pool = std::mem::take(&mut result.recommendations);
		let mut refined = refine_best_effort(refiner, candidate, pool, top_k);
		refined.truncate(top_k);

		result.metadata.top_k = top_k;
		result.metadata.postings_returned = refined.len();
		result.recommendations = refined;

		Ok(result)
	}
}
