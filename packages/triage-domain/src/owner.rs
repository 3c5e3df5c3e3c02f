use std::collections::HashSet;

use crate::ranking::ScoredCandidate;

/// Strategy for deriving an owner recommendation from a ranked candidate
/// list. The default picks the owner of the closest match; alternative
/// policies (skip overloaded owners, require a score threshold) implement
/// this trait without touching the ranker.
pub trait OwnerSelector {
	/// `None` means no recommendation; owner assignment is skipped
	/// downstream.
	fn select(&self, ranked: &[ScoredCandidate]) -> Option<String>;
}

/// Recommends the owner of the most similar ticket.
#[derive(Clone, Copy, Debug, Default)]
pub struct NearestOwnerSelector;

impl OwnerSelector for NearestOwnerSelector {
	fn select(&self, ranked: &[ScoredCandidate]) -> Option<String> {
		distinct_owners(ranked).into_iter().next()
	}
}

/// Owner ids in rank order of first appearance.
pub fn distinct_owners(ranked: &[ScoredCandidate]) -> Vec<String> {
	let mut seen = HashSet::new();
	let mut owners = Vec::new();

	for candidate in ranked {
		if seen.insert(candidate.owner_id.as_str()) {
			owners.push(candidate.owner_id.clone());
		}
	}

	owners
}
