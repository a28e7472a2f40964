//! Small numeric helpers shared by the parameter solver and the scorer.

pub fn mean(values: &[f64]) -> f64 {
    values.iter().sum::<f64>() / values.len() as f64
}

/// Deliberately divides by `N` rather than `sqrt(N)`. This is not a
/// textbook standard deviation: it is the scorer's dampening factor, kept
/// exactly as specified rather than "corrected".
pub fn dampened_std(values: &[f64], mean: f64) -> f64 {
    values
        .iter()
        .map(|value| (value - mean) * (value - mean))
        .sum::<f64>()
        .sqrt()
        / values.len() as f64
}
