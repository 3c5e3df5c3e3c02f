use serde::Deserialize;
use serde_json::{Map, Value};

#[derive(Debug, Deserialize)]
pub struct Config {
	pub service: Service,
	pub store: Store,
	pub providers: Providers,
	pub routing: Routing,
}

#[derive(Debug, Deserialize)]
pub struct Service {
	pub http_bind: String,
	pub log_level: String,
}

/// The desk (ticket store) REST API the router searches and writes back to.
#[derive(Debug, Deserialize)]
pub struct Store {
	pub api_base: String,
	pub api_key: String,
	pub timeout_ms: u64,
	/// Upper bound on candidates fetched per decision; the router ranks
	/// tens of tickets, not millions.
	pub search_limit: u32,
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Providers {
	pub embedding: EmbeddingProviderConfig,
}

#[derive(Debug, Deserialize)]
pub struct EmbeddingProviderConfig {
	pub provider_id: String,
	pub api_base: String,
	pub api_key: String,
	pub path: String,
	pub model: String,
	pub dimensions: u32,
	pub timeout_ms: u64,
	pub default_headers: Map<String, Value>,
}

#[derive(Debug, Deserialize)]
pub struct Routing {
	#[serde(default = "default_report_max_entries")]
	pub report_max_entries: usize,
	/// Must contain the `{ticket_id}` placeholder.
	pub ticket_link_template: String,
}

fn default_report_max_entries() -> usize {
	3
}
