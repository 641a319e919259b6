//! Similarity Scorer — cosine similarity between term-frequency vectors.

/// Cosine of the angle between `a` and `b`, in `[0, 1]`.
///
/// Returns 0.0 when either vector has zero norm (empty document or empty vocabulary).
/// Both slices must come from the same vocabulary.
pub fn cosine_similarity(a: &[u32], b: &[u32]) -> f64 {
    debug_assert_eq!(a.len(), b.len(), "vectors must share a vocabulary");

    let mut dot = 0.0_f64;
    let mut norm_a = 0.0_f64;
    let mut norm_b = 0.0_f64;

    for (&x, &y) in a.iter().zip(b) {
        let (x, y) = (f64::from(x), f64::from(y));
        dot += x * y;
        norm_a += x * x;
        norm_b += y * y;
    }

    if norm_a == 0.0 || norm_b == 0.0 {
        return 0.0;
    }

    (dot / (norm_a.sqrt() * norm_b.sqrt())).clamp(0.0, 1.0)
}

/// Cosine similarity scaled to a percentage in `[0, 100]`.
pub fn score(a: &[u32], b: &[u32]) -> f64 {
    cosine_similarity(a, b) * 100.0
}
