pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Vector dimensions do not match: expected {expected}, got {got}.")]
	DimensionMismatch { expected: usize, got: usize },
	#[error("Vector has zero magnitude and cannot be compared.")]
	DegenerateVector,
}
