use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::{Error, Result, TriageService};
use triage_domain::{
	patch::UpdatePatch,
	ranking::ScoredCandidate,
	report::ReportOptions,
	routing::route_ticket,
};

/// One incoming ticket to route. Every recognized field is explicit;
/// `owner_id` is the ticket's current owner, if it already has one.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteRequest {
	pub ticket_id: String,
	pub subject: String,
	pub content: String,
	pub owner_id: Option<String>,
}

#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct RouteResponse {
	pub decision_id: Uuid,
	pub ticket_id: String,
	/// Present only when the ticket had no owner and a recommendation was
	/// found.
	pub assigned_owner: Option<String>,
	pub matches: Vec<ScoredCandidate>,
	pub report: String,
	pub patch: UpdatePatch,
}

impl TriageService {
	/// Runs one routing decision without persisting anything: embed the
	/// ticket text, search candidates, rank, select an owner when the
	/// ticket has none, and compose the patch. Any failure abandons the
	/// decision; there is no partial result.
	pub async fn route(&self, req: RouteRequest) -> Result<RouteResponse> {
		let ticket_id = req.ticket_id.trim();
		let subject = req.subject.trim();
		let content = req.content.trim();

		if ticket_id.is_empty() {
			return Err(Error::InvalidRequest { message: "ticket_id is required.".to_string() });
		}
		if subject.is_empty() && content.is_empty() {
			return Err(Error::InvalidRequest {
				message: "At least one of subject and content is required.".to_string(),
			});
		}

		let existing_owner =
			req.owner_id.as_deref().map(str::trim).filter(|owner| !owner.is_empty());
		let text = embedding_input(subject, content);
		let embedding = self
			.providers
			.embedding
			.embed(&self.cfg.providers.embedding, &text)
			.await
			.map_err(|err| Error::Embedding { message: err.to_string() })?;
		let expected = self.cfg.providers.embedding.dimensions as usize;

		if embedding.len() != expected {
			return Err(Error::Embedding {
				message: format!(
					"Embedding provider returned {} dimensions, expected {expected}.",
					embedding.len(),
				),
			});
		}

		let candidates = self
			.providers
			.search
			.find(&self.cfg.store, ticket_id)
			.await
			.map_err(|err| Error::Search { message: err.to_string() })?;
		let report_opts = ReportOptions::new(self.cfg.routing.ticket_link_template.clone())
			.with_max_entries(self.cfg.routing.report_max_entries);
		let decision = route_ticket(&embedding, existing_owner, candidates, &report_opts)?;

		tracing::info!(
			ticket_id,
			candidates = decision.ranked.len(),
			assigned_owner = decision.assigned_owner.as_deref().unwrap_or("-"),
			"Routed ticket."
		);

		Ok(RouteResponse {
			decision_id: Uuid::new_v4(),
			ticket_id: ticket_id.to_string(),
			assigned_owner: decision.assigned_owner,
			matches: decision.ranked,
			report: decision.report,
			patch: decision.patch,
		})
	}

	/// `route`, then persist the composed patch through the ticket store.
	/// A persistence failure is reported as `Error::Update`; there is no
	/// retry and nothing to roll back, since the patch is the only write.
	pub async fn route_and_apply(&self, req: RouteRequest) -> Result<RouteResponse> {
		let response = self.route(req).await?;

		self.providers
			.store
			.apply(&self.cfg.store, &response.ticket_id, &response.patch)
			.await
			.map_err(|err| Error::Update { message: err.to_string() })?;

		Ok(response)
	}
}

/// The exact text sent to the embedding provider. Stored candidate
/// embeddings were produced from this same shape, so changing it would
/// shift every new ticket relative to the stored vectors.
fn embedding_input(subject: &str, content: &str) -> String {
	format!("Ticket name: {subject};\n Ticket description: {content}")
}
