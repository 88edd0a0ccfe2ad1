// Math helpers shared by the signal functions and the similarity finder

use std::collections::HashSet;
use std::hash::Hash;

/// exp(-rate * hours / 24): 1.0 at age 0, decays per day of age
pub fn daily_decay(hours_old: i64, rate: f64) -> f64 {
    (-rate * hours_old as f64 / 24.0).exp()
}

/// Logistic curve centred on `midpoint`
pub fn sigmoid(x: f64, steepness: f64, midpoint: f64) -> f64 {
    1.0 / (1.0 + (-steepness * (x - midpoint)).exp())
}

/// |a ∩ b| / |a ∪ b|, None when both sets are empty
pub fn jaccard<T: Eq + Hash>(a: &HashSet<T>, b: &HashSet<T>) -> Option<f64> {
    let intersection = a.intersection(b).count();
    let union = a.len() + b.len() - intersection;

    if union == 0 {
        None
    } else {
        Some(intersection as f64 / union as f64)
    }
}
