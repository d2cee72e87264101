//! Ordering of matched candidates.
//!
//! Results are ordered by two levels: score (descending, better first), then
//! insertion index (ascending, first-seen wins). Insertion indexes are unique,
//! so the order is strict and total.

use std::cmp::Ordering;

use crate::engine::Match;

/// Two-level comparator for matched candidates.
///
/// 1. **Better score wins**: the higher [`Score`](crate::Score) sorts first.
/// 2. **Earlier candidate wins**: equal scores keep insertion order.
///
/// # Examples
///
/// ```
/// use linepick::{Match, Score, compare_matches};
/// use std::cmp::Ordering;
///
/// let a = Match { index: 4, score: Score::Prefix };
/// let b = Match { index: 1, score: Score::Interior };
/// assert_eq!(compare_matches(&a, &b), Ordering::Less);
///
/// let c = Match { index: 0, score: Score::Interior };
/// assert_eq!(compare_matches(&b, &c), Ordering::Greater);
/// ```
pub fn compare_matches(a: &Match, b: &Match) -> Ordering {
    b.score
        .cmp(&a.score)
        .then_with(|| a.index.cmp(&b.index))
}

/// Sort matches in place into result order.
pub(crate) fn sort_matches(matches: &mut [Match]) {
    // Unstable is fine: the comparator never returns Equal for distinct indexes.
    matches.sort_unstable_by(compare_matches);
}
