pub mod route;

mod error;

pub use error::{Error, Result};
pub use route::{RouteRequest, RouteResponse};

use std::{future::Future, pin::Pin, sync::Arc};

use triage_config::{Config, EmbeddingProviderConfig, Store};
use triage_domain::{patch::UpdatePatch, ranking::Candidate};
use triage_providers::embedding;
use triage_store::DeskClient;

pub type BoxFuture<'a, T> = Pin<Box<dyn Future<Output = T> + Send + 'a>>;

/// Fetches the semantic embedding for a ticket's text.
pub trait EmbeddingProvider
where
	Self: Send + Sync,
{
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>>;
}

/// Finds previously-owned tickets to compare against. Filtering (has an
/// embedding, has an owner, excludes the routed ticket) happens on the
/// search side; the core never re-checks it.
pub trait CandidateSearch
where
	Self: Send + Sync,
{
	fn find<'a>(
		&'a self,
		cfg: &'a Store,
		exclude_ticket_id: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Candidate>>>;
}

/// Persists the sparse patch a routing decision produced.
pub trait TicketStore
where
	Self: Send + Sync,
{
	fn apply<'a>(
		&'a self,
		cfg: &'a Store,
		ticket_id: &'a str,
		patch: &'a UpdatePatch,
	) -> BoxFuture<'a, color_eyre::Result<()>>;
}

#[derive(Clone)]
pub struct Providers {
	pub embedding: Arc<dyn EmbeddingProvider>,
	pub search: Arc<dyn CandidateSearch>,
	pub store: Arc<dyn TicketStore>,
}

pub struct TriageService {
	pub cfg: Config,
	pub providers: Providers,
}

struct DefaultProviders;

impl EmbeddingProvider for DefaultProviders {
	fn embed<'a>(
		&'a self,
		cfg: &'a EmbeddingProviderConfig,
		text: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<f32>>> {
		Box::pin(async move { Ok(embedding::embed(cfg, text).await?) })
	}
}

impl CandidateSearch for DefaultProviders {
	fn find<'a>(
		&'a self,
		cfg: &'a Store,
		exclude_ticket_id: &'a str,
	) -> BoxFuture<'a, color_eyre::Result<Vec<Candidate>>> {
		Box::pin(async move {
			let client = DeskClient::new(cfg)?;

			Ok(client.search_candidates(exclude_ticket_id).await?)
		})
	}
}

impl TicketStore for DefaultProviders {
	fn apply<'a>(
		&'a self,
		cfg: &'a Store,
		ticket_id: &'a str,
		patch: &'a UpdatePatch,
	) -> BoxFuture<'a, color_eyre::Result<()>> {
		Box::pin(async move {
			let client = DeskClient::new(cfg)?;

			Ok(client.apply_patch(ticket_id, patch).await?)
		})
	}
}

impl Providers {
	pub fn new(
		embedding: Arc<dyn EmbeddingProvider>,
		search: Arc<dyn CandidateSearch>,
		store: Arc<dyn TicketStore>,
	) -> Self {
		Self { embedding, search, store }
	}
}

impl Default for Providers {
	fn default() -> Self {
		let provider = Arc::new(DefaultProviders);

		Self { embedding: provider.clone(), search: provider.clone(), store: provider }
	}
}

impl TriageService {
	pub fn new(cfg: Config) -> Self {
		Self { cfg, providers: Providers::default() }
	}

	pub fn with_providers(cfg: Config, providers: Providers) -> Self {
		Self { cfg, providers }
	}
}
