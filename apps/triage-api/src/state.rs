use std::sync::Arc;

use triage_service::TriageService;

#[derive(Clone)]
pub struct AppState {
	pub service: Arc<TriageService>,
}

impl AppState {
	pub fn new(config: triage_config::Config) -> Self {
		Self { service: Arc::new(TriageService::new(config)) }
	}
}
