pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Invalid request: {message}")]
	InvalidRequest { message: String },
	#[error("Embedding fetch failed: {message}")]
	Embedding { message: String },
	#[error("Candidate search failed: {message}")]
	Search { message: String },
	#[error("Ticket update failed: {message}")]
	Update { message: String },
	#[error(transparent)]
	Routing(#[from] triage_domain::Error),
}
