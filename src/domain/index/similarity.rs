//! Cosine similarity over `f32` vectors

use crate::domain::DomainError;

/// Substituted for a zero norm so the division stays finite
pub const NORM_EPSILON: f32 = 1e-5;

/// Cosine similarity between two equal-length vectors.
///
/// Computes `dot(a, b) / (norm(a) * norm(b))`, accumulating in `f64` so that
/// large finite components cannot overflow the sums. A zero norm is replaced
/// by [`NORM_EPSILON`], which yields `0.0` for a zero vector.
pub fn cosine_similarity(a: &[f32], b: &[f32]) -> Result<f32, DomainError> {
    if a.len() != b.len() {
        return Err(DomainError::dimension_mismatch(a.len(), b.len()));
    }

    let (dot, norm_a, norm_b) = a
        .iter()
        .zip(b.iter())
        .map(|(&x, &y)| (f64::from(x), f64::from(y)))
        .fold((0.0f64, 0.0f64, 0.0f64), |(d, na, nb), (x, y)| {
            (d + x * y, na + x * x, nb + y * y)
        });

    let norm_a = non_zero(norm_a.sqrt());
    let norm_b = non_zero(norm_b.sqrt());

    Ok((dot / (norm_a * norm_b)) as f32)
}

fn non_zero(norm: f64) -> f64 {
    if norm == 0.0 { f64::from(NORM_EPSILON) } else { norm }
}

/// Every component is a finite number
pub fn is_finite_vector(vector: &[f32]) -> bool {
    vector.iter().all(|v| v.is_finite())
}
