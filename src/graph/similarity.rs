//! Lexical similarity between token sequences

use rustc_hash::FxHashSet;
use std::hash::Hash;

/// Jaccard similarity of two sequences treated as sets
///
/// Duplicates and order are ignored. Returns 0.0 when either sequence is
/// empty, so an empty sentence is never similar to anything.
pub fn jaccard_similarity<T: Eq + Hash>(a: &[T], b: &[T]) -> f64 {
    if a.is_empty() || b.is_empty() {
        return 0.0;
    }

    let set_a: FxHashSet<&T> = a.iter().collect();
    let set_b: FxHashSet<&T> = b.iter().collect();

    let intersection = set_a.intersection(&set_b).count();
    let union = set_a.len() + set_b.len() - intersection;

    intersection as f64 / union as f64
}
