/// Euclidean norm, accumulated in f64 in slice order so repeated identical
/// queries score identically.
pub(crate) fn l2_norm(v: &[f32]) -> f64 {
    v.iter()
        .map(|x| {
            let x = *x as f64;
            x * x
        })
        .sum::<f64>()
        .sqrt()
}

/// Cosine similarity of `candidate` against a query whose norm is already
/// known. A zero-norm candidate has no direction; it scores negative
/// infinity so it ranks last instead of injecting NaN into the ordering.
pub(crate) fn cosine(query: &[f32], query_norm: f64, candidate: &[f32]) -> f64 {
    let candidate_norm = l2_norm(candidate);
    if candidate_norm == 0.0 {
        return f64::NEG_INFINITY;
    }
    let mut dot = 0.0_f64;
    for (q, c) in query.iter().zip(candidate.iter()) {
        dot += *q as f64 * *c as f64;
    }
    dot / (query_norm * candidate_norm)
}
