mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, EmbeddingProviderConfig, Providers, Routing, Service, Store};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.http_bind.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.http_bind must be non-empty.".to_string(),
		});
	}
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}
	if cfg.store.api_base.trim().is_empty() {
		return Err(Error::Validation { message: "store.api_base must be non-empty.".to_string() });
	}
	if cfg.store.api_key.trim().is_empty() {
		return Err(Error::Validation { message: "store.api_key must be non-empty.".to_string() });
	}
	if cfg.store.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "store.timeout_ms must be greater than zero.".to_string(),
		});
	}
	if cfg.store.search_limit == 0 {
		return Err(Error::Validation {
			message: "store.search_limit must be greater than zero.".to_string(),
		});
	}

	let embedding = &cfg.providers.embedding;

	if embedding.api_base.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.api_base must be non-empty.".to_string(),
		});
	}
	if embedding.api_key.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.api_key must be non-empty.".to_string(),
		});
	}
	if embedding.model.trim().is_empty() {
		return Err(Error::Validation {
			message: "providers.embedding.model must be non-empty.".to_string(),
		});
	}
	if embedding.dimensions == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.dimensions must be greater than zero.".to_string(),
		});
	}
	if embedding.timeout_ms == 0 {
		return Err(Error::Validation {
			message: "providers.embedding.timeout_ms must be greater than zero.".to_string(),
		});
	}

	if cfg.routing.report_max_entries == 0 {
		return Err(Error::Validation {
			message: "routing.report_max_entries must be greater than zero.".to_string(),
		});
	}
	if !cfg.routing.ticket_link_template.contains("{ticket_id}") {
		return Err(Error::Validation {
			message: "routing.ticket_link_template must contain the {ticket_id} placeholder."
				.to_string(),
		});
	}

	Ok(())
}

fn normalize(cfg: &mut Config) {
	while cfg.store.api_base.ends_with('/') {
		cfg.store.api_base.pop();
	}
}
