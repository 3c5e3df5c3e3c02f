use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

pub const PROPERTY_EMBEDDING: &str = "embedding";
pub const PROPERTY_OWNER_ID: &str = "owner_id";
pub const PROPERTY_SIMILAR_TICKETS: &str = "similar_tickets";

/// A sparse set of ticket properties to persist. Only properties the
/// caller chose to set are present; an all-absent composition is an empty
/// patch, which the store treats as a no-op.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Serialize)]
#[serde(transparent)]
pub struct UpdatePatch {
	properties: BTreeMap<String, String>,
}

impl UpdatePatch {
	pub fn is_empty(&self) -> bool {
		self.properties.is_empty()
	}

	pub fn len(&self) -> usize {
		self.properties.len()
	}

	pub fn get(&self, property: &str) -> Option<&str> {
		self.properties.get(property).map(String::as_str)
	}

	pub fn properties(&self) -> &BTreeMap<String, String> {
		&self.properties
	}
}

/// Builds the patch for one routing decision; absent inputs leave their
/// property out entirely rather than writing a null placeholder.
pub fn compose_patch(
	embedding: Option<&[f32]>,
	owner_id: Option<&str>,
	report: Option<&str>,
) -> UpdatePatch {
	let mut properties = BTreeMap::new();

	if let Some(embedding) = embedding {
		properties.insert(PROPERTY_EMBEDDING.to_string(), embedding_to_json(embedding));
	}
	if let Some(owner_id) = owner_id {
		properties.insert(PROPERTY_OWNER_ID.to_string(), owner_id.to_string());
	}
	if let Some(report) = report {
		properties.insert(PROPERTY_SIMILAR_TICKETS.to_string(), report.to_string());
	}

	UpdatePatch { properties }
}

/// Canonical JSON array text, the transport form the ticket store expects
/// for stored embeddings.
pub fn embedding_to_json(vec: &[f32]) -> String {
	let mut out = String::with_capacity(vec.len() * 8);

	out.push('[');

	for (i, value) in vec.iter().enumerate() {
		if i > 0 {
			out.push(',');
		}
		out.push_str(&value.to_string());
	}

	out.push(']');

	out
}
