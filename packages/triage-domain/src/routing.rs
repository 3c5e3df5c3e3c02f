use crate::{
	Result,
	owner::{NearestOwnerSelector, OwnerSelector},
	patch::{self, UpdatePatch},
	ranking::{self, Candidate, ScoredCandidate},
	report::{self, ReportOptions},
};

/// The outcome of one routing decision. Everything here is derived from
/// the inputs of a single call; nothing is carried across invocations.
#[derive(Clone, Debug)]
pub struct RoutingDecision {
	pub ranked: Vec<ScoredCandidate>,
	/// Set only when the routed ticket had no owner and a candidate owner
	/// was found.
	pub assigned_owner: Option<String>,
	pub report: String,
	pub patch: UpdatePatch,
}

/// Runs one routing decision with the default owner strategy: rank the
/// candidates, pick an owner when the ticket has none, render the report,
/// and compose the store patch. The caller supplies the query embedding
/// and candidates, and persists the returned patch.
pub fn route_ticket(
	query: &[f32],
	existing_owner: Option<&str>,
	candidates: Vec<Candidate>,
	report_opts: &ReportOptions,
) -> Result<RoutingDecision> {
	route_ticket_with(query, existing_owner, candidates, report_opts, &NearestOwnerSelector)
}

/// `route_ticket` with a caller-chosen owner selection strategy.
///
/// Ownership reassignment is out of scope: when `existing_owner` is set,
/// the selector is never consulted and the patch carries no owner.
pub fn route_ticket_with(
	query: &[f32],
	existing_owner: Option<&str>,
	candidates: Vec<Candidate>,
	report_opts: &ReportOptions,
	selector: &dyn OwnerSelector,
) -> Result<RoutingDecision> {
	let ranked = ranking::rank_candidates(query, candidates)?;
	let assigned_owner = match existing_owner {
		Some(_) => None,
		None => selector.select(&ranked),
	};
	let report = report::render_report(&ranked, report_opts);
	let patch = patch::compose_patch(Some(query), assigned_owner.as_deref(), Some(&report));

	Ok(RoutingDecision { ranked, assigned_owner, report, patch })
}
