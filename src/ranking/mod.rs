//! Scores and per-candidate scoring.
//!
//! Two modes decide whether a candidate matches and how well:
//!
//! | Mode   | Predicate                                  | Score                          |
//! |--------|--------------------------------------------|--------------------------------|
//! | exact  | folded query is a substring of the candidate | `Prefix` at offset 0, else `Interior` |
//! | fuzzy  | folded query is a subsequence of the candidate | `Span { extra, start }` of the minimal window |
//!
//! Folding is ASCII-only: `A..=Z` become `a..=z`, every other codepoint is
//! compared literally.

use std::cmp::Ordering;

use memchr::memmem::Finder;

/// How well a candidate matched the query.
///
/// `Score` is ordered so that a better match compares as greater, mirroring
/// the convention that results are sorted by descending score:
///
/// - `Prefix > Interior`
/// - both exact variants outrank any `Span`
/// - for two `Span`s, the smaller `(extra, start)` pair is greater
///
/// A single result only ever mixes variants of one mode, so the cross-mode
/// order exists only to make the ordering total.
///
/// # Examples
///
/// ```
/// use linepick::Score;
///
/// assert!(Score::Prefix > Score::Interior);
/// assert!(Score::Span { extra: 0, start: 4 } > Score::Span { extra: 1, start: 0 });
/// assert!(Score::Span { extra: 2, start: 0 } > Score::Span { extra: 2, start: 3 });
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Score {
    /// Exact mode: the query occurs at the very start of the candidate.
    Prefix,
    /// Exact mode: the query occurs, but not at the start.
    Interior,
    /// Fuzzy mode: the shortest window holding the query as a subsequence.
    Span {
        /// Window length minus query length, in codepoints.
        extra: usize,
        /// Codepoint offset where the window starts.
        start: usize,
    },
}

impl Score {
    /// Score given to every candidate when the fuzzy query is empty.
    pub const EMPTY_FUZZY: Score = Score::Span { extra: 0, start: 0 };

    fn tier(&self) -> u8 {
        match self {
            Score::Prefix => 2,
            Score::Interior => 1,
            Score::Span { .. } => 0,
        }
    }
}

impl Ord for Score {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (
                Score::Span { extra: ea, start: sa },
                Score::Span { extra: eb, start: sb },
            ) => (eb, sb).cmp(&(ea, sa)),
            _ => self.tier().cmp(&other.tier()),
        }
    }
}

impl PartialOrd for Score {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Fold `s` into `buf` with the ASCII-only lowercase mapping, reusing the
/// buffer's allocation.
pub(crate) fn fold_into(s: &str, buf: &mut String) {
    buf.clear();
    buf.reserve(s.len());
    buf.extend(s.chars().map(|c| c.to_ascii_lowercase()));
}

/// Exact-mode score of an already folded candidate.
///
/// `finder` searches for the folded query, or is `None` for an empty query,
/// which every candidate contains at offset 0.
pub(crate) fn substring_score(folded_candidate: &str, finder: Option<&Finder<'_>>) -> Option<Score> {
    let Some(finder) = finder else {
        return Some(Score::Prefix);
    };
    // Byte search is codepoint-correct: UTF-8 never matches mid-sequence.
    match finder.find(folded_candidate.as_bytes()) {
        Some(0) => Some(Score::Prefix),
        Some(_) => Some(Score::Interior),
        None => None,
    }
}

const UNSET: usize = usize::MAX;

/// Locate the shortest window of `folded_candidate` that contains `query` as
/// a subsequence.
///
/// Returns `(start, len)` in codepoints, choosing the earliest start among
/// windows of the minimal length, or `None` when `query` is not a subsequence.
///
/// `starts` is scratch space. After processing position `p`, `starts[j]`
/// holds the latest offset `s` such that `query[..=j]` is a subsequence of
/// `candidate[s..=p]`; the latest such `s` gives the tightest window ending at
/// `p`. One pass over the candidate, `query.len()` steps per codepoint.
pub(crate) fn minimal_span(
    folded_candidate: &str,
    query: &[char],
    starts: &mut Vec<usize>,
) -> Option<(usize, usize)> {
    let Some(&last) = query.last() else {
        return Some((0, 0));
    };
    // Byte length bounds codepoint count from above.
    if query.len() > folded_candidate.len() {
        return None;
    }

    starts.clear();
    starts.resize(query.len(), UNSET);
    let tail = query.len() - 1;
    let mut best: Option<(usize, usize)> = None;

    for (pos, c) in folded_candidate.chars().enumerate() {
        // Descending so one codepoint never advances two query positions.
        for j in (1..query.len()).rev() {
            if query[j] == c && starts[j - 1] != UNSET {
                starts[j] = starts[j - 1];
            }
        }
        if query[0] == c {
            starts[0] = pos;
        }

        if c == last && starts[tail] != UNSET {
            let len = pos - starts[tail] + 1;
            if best.is_none_or(|(_, best_len)| len < best_len) {
                best = Some((starts[tail], len));
                if len == query.len() {
                    // Contiguous; nothing shorter or earlier can follow.
                    break;
                }
            }
        }
    }

    best
}

/// Fuzzy-mode score from a window found by [`minimal_span`].
pub(crate) fn span_score(query_len: usize, (start, len): (usize, usize)) -> Score {
    Score::Span {
        extra: len - query_len,
        start,
    }
}

/// Score one candidate against a query.
///
/// Convenience for one-off calls; [`MatchEngine`](crate::MatchEngine) does the
/// same work over a whole store with reused buffers.
///
/// # Returns
///
/// `None` when the candidate does not match in the selected mode.
///
/// # Examples
///
/// ```
/// use linepick::{Score, score_candidate};
///
/// assert_eq!(score_candidate("Apple", "app", false), Some(Score::Prefix));
/// assert_eq!(score_candidate("pineapple", "app", false), Some(Score::Interior));
/// assert_eq!(score_candidate("banana", "bnn", true), Some(Score::Span { extra: 2, start: 0 }));
/// assert_eq!(score_candidate("banana", "aln", true), None);
/// ```
pub fn score_candidate(candidate: &str, query: &str, fuzzy: bool) -> Option<Score> {
    let mut folded_candidate = String::new();
    let mut folded_query = String::new();
    fold_into(candidate, &mut folded_candidate);
    fold_into(query, &mut folded_query);

    if fuzzy {
        let query_chars: Vec<char> = folded_query.chars().collect();
        let mut starts = Vec::new();
        minimal_span(&folded_candidate, &query_chars, &mut starts)
            .map(|window| span_score(query_chars.len(), window))
    } else {
        let finder = (!folded_query.is_empty()).then(|| Finder::new(folded_query.as_bytes()));
        substring_score(&folded_candidate, finder.as_ref())
    }
}
