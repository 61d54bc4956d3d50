//! Ancestor-directory closeness between a candidate file and a target file.

use super::paths::{file_name, is_ancestor, normalize_separators, segment_count};
use std::cmp::Ordering;

/// Score of a candidate sharing no ancestor with the target
pub const UNRELATED: i32 = 0;

/// Closeness of `candidate` to `target`.
///
/// The candidate's path is truncated one segment at a time, starting with its
/// own file name. The first truncation that is an ancestor of the target
/// decides the score: minus the number of target segments below that
/// ancestor. A type-config in the target's own directory scores -1, one a
/// level higher -2, and so on. [`UNRELATED`] (0) means no truncation matched.
pub fn score(candidate: &str, target: &str) -> i32 {
    let candidate = normalize_separators(candidate);
    let target = normalize_separators(target);
    let target_depth = segment_count(&target);

    let mut prefix = candidate.as_str();
    while let Some(cut) = prefix.rfind('/') {
        prefix = &prefix[..cut];
        if is_ancestor(prefix, &target) {
            let below = target_depth.saturating_sub(segment_count(prefix));
            return -(below as i32);
        }
    }

    UNRELATED
}

/// Tie-break key: length of the candidate's file name
pub fn name_length(candidate: &str) -> usize {
    file_name(&normalize_separators(candidate)).chars().count()
}

/// Total order on (score, name length, path) used to rank candidates.
///
/// Related candidates come before unrelated ones, closer before farther,
/// shorter file names before longer ones. The full path is the last key so
/// equal candidates never depend on enumeration order.
pub fn compare(a: (i32, usize, &str), b: (i32, usize, &str)) -> Ordering {
    let related = |score: i32| score != UNRELATED;

    related(b.0)
        .cmp(&related(a.0))
        .then_with(|| b.0.cmp(&a.0))
        .then_with(|| a.1.cmp(&b.1))
        .then_with(|| a.2.cmp(b.2))
}

#[cfg(test)]
mod tests {
    include!("scoring.test.rs");
}
