use std::time::Duration;

use reqwest::Client;
use serde_json::Value;

use crate::{Error, Result, auth_headers};
use triage_config::EmbeddingProviderConfig;

/// Fetches the embedding for one text from an OpenAI-compatible
/// `/embeddings` endpoint. The router embeds a single ticket per decision,
/// so the request carries exactly one input.
pub async fn embed(cfg: &EmbeddingProviderConfig, text: &str) -> Result<Vec<f32>> {
	let client = Client::builder().timeout(Duration::from_millis(cfg.timeout_ms)).build()?;
	let url = format!("{}{}", cfg.api_base, cfg.path);
	let body = serde_json::json!({
		"model": cfg.model,
		"input": text,
		"dimensions": cfg.dimensions,
	});
	let res = client
		.post(url)
		.headers(auth_headers(&cfg.api_key, &cfg.default_headers)?)
		.json(&body)
		.send()
		.await?;
	let json: Value = res.error_for_status()?.json().await?;

	parse_embedding_response(&json)
}

fn parse_embedding_response(json: &Value) -> Result<Vec<f32>> {
	let embedding = json
		.get("data")
		.and_then(Value::as_array)
		.and_then(|data| data.first())
		.and_then(|item| item.get("embedding"))
		.and_then(Value::as_array)
		.ok_or_else(|| Error::InvalidResponse {
			message: "Embedding response is missing data[0].embedding.".to_string(),
		})?;

	if embedding.is_empty() {
		return Err(Error::InvalidResponse {
			message: "Embedding response contains an empty vector.".to_string(),
		});
	}

	let mut vec = Vec::with_capacity(embedding.len());

	for value in embedding {
		let number = value.as_f64().ok_or_else(|| Error::InvalidResponse {
			message: "Embedding value must be numeric.".to_string(),
		})?;

		vec.push(number as f32);
	}

	Ok(vec)
}
