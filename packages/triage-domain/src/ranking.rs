use serde::{Deserialize, Serialize};

use crate::{Result, vector};

/// A previously-owned ticket offered as a comparison point.
///
/// Candidates arrive already filtered by the search collaborator: each one
/// carries a stored embedding and an owner, and the ticket being routed is
/// excluded upstream.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct Candidate {
	pub ticket_id: String,
	pub owner_id: String,
	pub display_name: String,
	pub embedding: Vec<f32>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct ScoredCandidate {
	pub ticket_id: String,
	pub owner_id: String,
	pub display_name: String,
	pub score: f32,
}

/// Scores every candidate against the query vector and sorts descending.
///
/// The sort is stable: candidates with equal scores keep their relative
/// input order, so the caller's candidate order is the tie-break. The
/// upstream search order is the only source of tie nondeterminism.
///
/// A dimension mismatch or degenerate vector on any candidate aborts the
/// whole ranking; no partial result is produced.
pub fn rank_candidates(query: &[f32], candidates: Vec<Candidate>) -> Result<Vec<ScoredCandidate>> {
	let mut scored = Vec::with_capacity(candidates.len());

	for candidate in candidates {
		let score = vector::cosine_similarity(query, &candidate.embedding)?;

		scored.push(ScoredCandidate {
			ticket_id: candidate.ticket_id,
			owner_id: candidate.owner_id,
			display_name: candidate.display_name,
			score,
		});
	}

	scored.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(std::cmp::Ordering::Equal));

	Ok(scored)
}
