//! Score comparisons shared by both recovery algorithms.
//!
//! Scores are validated as finite before they reach these helpers. Equal
//! scores, including `-0.0` against `0.0`, compare as ties so the earlier
//! entry keeps precedence.

use std::cmp::Ordering;

/// Orders `left` before `right` when it has the strictly higher score.
pub(crate) fn descending(left: f64, right: f64) -> Ordering {
    right.partial_cmp(&left).unwrap_or(Ordering::Equal)
}

/// Returns entry indices sorted by descending score, first-seen first on ties.
pub(crate) fn descending_order<T>(entries: &[T], score: impl Fn(&T) -> f64) -> Vec<usize> {
    let mut order: Vec<usize> = (0..entries.len()).collect();
    // `sort_by` is stable, which is what keeps ties in input order.
    order.sort_by(|&left, &right| match (entries.get(left), entries.get(right)) {
        (Some(a), Some(b)) => descending(score(a), score(b)),
        _ => Ordering::Equal,
    });
    order
}

/// Returns the index of the first entry holding the maximum score.
pub(crate) fn first_max_index<T>(entries: &[T], score: impl Fn(&T) -> f64) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, entry) in entries.iter().enumerate() {
        let candidate = score(entry);
        match best {
            Some((_, current)) if candidate <= current => {}
            _ => best = Some((index, candidate)),
        }
    }
    best.map(|(index, _)| index)
}
