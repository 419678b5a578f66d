//! Small numeric helpers shared by the scorers.

/// Arithmetic mean, or `None` for an empty sequence.
pub fn mean(values: &[f64]) -> Option<f64> {
    if values.is_empty() {
        return None;
    }
    Some(values.iter().sum::<f64>() / values.len() as f64)
}

/// Population standard deviation (divides by N, not N − 1).
///
/// Returns `None` for an empty sequence. A single value has deviation zero.
pub fn population_std_dev(values: &[f64]) -> Option<f64> {
    let avg = mean(values)?;
    let variance = values.iter().map(|v| (v - avg).powi(2)).sum::<f64>() / values.len() as f64;
    Some(variance.sqrt())
}

/// Round to one decimal place.
///
/// Rounds the exact binary value, so `0.35` (stored just below) goes down,
/// and exact ties go to the even digit (`2.25` -> `2.2`, `3.75` -> `3.8`).
pub fn round1(v: f64) -> f64 {
    format!("{v:.1}").parse().unwrap_or(v)
}
