use std::time::Duration;

use reqwest::{
	Client,
	header::{HeaderMap, HeaderName},
};
use serde_json::Value;

use crate::{
	Error, Result,
	models::{SearchResults, TicketRecord},
};
use triage_config::Store;
use triage_domain::{patch::UpdatePatch, ranking::Candidate};

/// REST client for the desk (ticket store). The desk is responsible for
/// search-side filtering: only tickets that carry a stored embedding and
/// an owner, minus the ticket being routed, come back as candidates.
pub struct DeskClient {
	client: Client,
	api_base: String,
	api_key: String,
	search_limit: u32,
}

impl DeskClient {
	pub fn new(cfg: &Store) -> Result<Self> {
		let client = Client::builder()
			.timeout(Duration::from_millis(cfg.timeout_ms))
			.default_headers(default_headers(cfg)?)
			.build()?;

		Ok(Self {
			client,
			api_base: cfg.api_base.clone(),
			api_key: cfg.api_key.clone(),
			search_limit: cfg.search_limit,
		})
	}

	pub async fn search_candidates(&self, exclude_ticket_id: &str) -> Result<Vec<Candidate>> {
		let url = format!("{}/tickets/search", self.api_base);
		let res = self
			.client
			.post(url)
			.bearer_auth(&self.api_key)
			.json(&search_body(self.search_limit, exclude_ticket_id))
			.send()
			.await?;
		let results: SearchResults = res.error_for_status()?.json().await?;

		results.results.into_iter().map(candidate_from_record).collect()
	}

	/// Persists a sparse patch. An empty patch is still a valid request;
	/// the desk treats it as a no-op.
	pub async fn apply_patch(&self, ticket_id: &str, patch: &UpdatePatch) -> Result<()> {
		let url = format!("{}/tickets/{ticket_id}", self.api_base);

		self.client
			.patch(url)
			.bearer_auth(&self.api_key)
			.json(&serde_json::json!({ "properties": patch }))
			.send()
			.await?
			.error_for_status()?;

		Ok(())
	}
}

fn default_headers(cfg: &Store) -> Result<HeaderMap> {
	let mut headers = HeaderMap::new();

	for (key, value) in &cfg.default_headers {
		let Some(raw) = value.as_str() else {
			return Err(Error::InvalidConfig {
				message: format!("Default header {key} must be a string."),
			});
		};

		headers.insert(HeaderName::from_bytes(key.as_bytes())?, raw.parse()?);
	}

	Ok(headers)
}

fn search_body(limit: u32, exclude_ticket_id: &str) -> Value {
	serde_json::json!({
		"limit": limit,
		"properties": ["ticket_id", "subject", "owner_id", "embedding"],
		"filters": [
			{ "property": "embedding", "operator": "HAS_PROPERTY" },
			{ "property": "owner_id", "operator": "HAS_PROPERTY" },
			{ "property": "ticket_id", "operator": "NEQ", "value": exclude_ticket_id },
		],
	})
}

fn candidate_from_record(record: TicketRecord) -> Result<Candidate> {
	let Some(owner_id) = record.owner_id.filter(|owner| !owner.trim().is_empty()) else {
		return Err(Error::InvalidResponse {
			message: format!("Search result {} is missing an owner.", record.ticket_id),
		});
	};
	let Some(text) = record.embedding else {
		return Err(Error::InvalidResponse {
			message: format!("Search result {} is missing an embedding.", record.ticket_id),
		});
	};
	let embedding: Vec<f32> = serde_json::from_str(&text).map_err(|_| Error::InvalidResponse {
		message: format!("Search result {} has undecodable embedding text.", record.ticket_id),
	})?;

	Ok(Candidate {
		ticket_id: record.ticket_id,
		owner_id,
		display_name: record.subject,
		embedding,
	})
}
