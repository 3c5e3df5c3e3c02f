use crate::{Error, Result};

pub fn dot(a: &[f32], b: &[f32]) -> Result<f32> {
	if a.len() != b.len() {
		return Err(Error::DimensionMismatch { expected: a.len(), got: b.len() });
	}

	Ok(a.iter().zip(b.iter()).map(|(x, y)| x * y).sum())
}

pub fn magnitude(a: &[f32]) -> f32 {
	a.iter().map(|x| x * x).sum::<f32>().sqrt()
}

/// Cosine of the angle between `a` and `b`, in [-1, 1].
///
/// Comparing vectors of different lengths is a `DimensionMismatch` error.
/// A zero-magnitude input on either side is a `DegenerateVector` error
/// rather than a silent NaN.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32> {
	let dot = dot(a, b)?;
	let norm_a = magnitude(a);
	let norm_b = magnitude(b);

	if norm_a == 0.0 || norm_b == 0.0 {
		return Err(Error::DegenerateVector);
	}

	Ok(dot / (norm_a * norm_b))
}
