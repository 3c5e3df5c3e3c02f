use serde::{Deserialize, Serialize};

/// A ticket as the desk's search API returns it. Owner and embedding are
/// optional on the wire even though the search filters should guarantee
/// both; the client treats their absence as a broken contract.
#[derive(Clone, Debug, Deserialize, Serialize)]
pub struct TicketRecord {
	pub ticket_id: String,
	pub subject: String,
	#[serde(default)]
	pub owner_id: Option<String>,
	/// Stored embedding as JSON array text, e.g. `[0.1,0.2]`.
	#[serde(default)]
	pub embedding: Option<String>,
}

#[derive(Debug, Deserialize)]
pub struct SearchResults {
	pub results: Vec<TicketRecord>,
}
