//! Whole-store matching.
//!
//! [`MatchEngine`] runs one query over every candidate of a
//! [`CandidateStore`] and returns a freshly ordered [`MatchResult`]. Each run
//! is a full recompute. The engine owns its scratch buffers so repeated runs,
//! one per keystroke, do not allocate once the buffers have grown.

use memchr::memmem::Finder;

use crate::ranking::{Score, fold_into, minimal_span, span_score, substring_score};
use crate::sort::sort_matches;
use crate::store::CandidateStore;

/// One matched candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Match {
    /// Insertion index of the candidate in the store.
    pub index: usize,
    /// How well it matched.
    pub score: Score,
}

/// Matched candidates in result order: score descending, then insertion
/// index ascending.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MatchResult {
    matches: Vec<Match>,
}

impl MatchResult {
    /// Number of matched candidates.
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    /// Returns `true` when nothing matched.
    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    /// The match at `rank`, if any.
    pub fn get(&self, rank: usize) -> Option<&Match> {
        self.matches.get(rank)
    }

    /// Matches in result order.
    pub fn as_slice(&self) -> &[Match] {
        &self.matches
    }

    /// Iterate matches in result order.
    pub fn iter(&self) -> std::slice::Iter<'_, Match> {
        self.matches.iter()
    }

    /// Candidate indexes in result order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.matches.iter().map(|m| m.index)
    }
}

impl<'a> IntoIterator for &'a MatchResult {
    type Item = &'a Match;
    type IntoIter = std::slice::Iter<'a, Match>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Ranks a store against queries, reusing its buffers between runs.
///
/// # Examples
///
/// ```
/// use linepick::{CandidateStore, MatchEngine, PickerConfig};
///
/// let store = CandidateStore::build(
///     ["apple", "banana", "application"],
///     &PickerConfig::default(),
/// ).unwrap();
/// let mut engine = MatchEngine::new();
///
/// let exact: Vec<usize> = engine.rank("app", &store, false).indices().collect();
/// assert_eq!(exact, vec![0, 2]);
///
/// let fuzzy: Vec<usize> = engine.rank("bnn", &store, true).indices().collect();
/// assert_eq!(fuzzy, vec![1]);
/// ```
#[derive(Debug, Default)]
pub struct MatchEngine {
    folded_query: String,
    query_chars: Vec<char>,
    starts: Vec<usize>,
}

impl MatchEngine {
    /// Create an engine with empty scratch buffers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Rank every candidate in `store` against `query`.
    pub fn rank(&mut self, query: &str, store: &CandidateStore, fuzzy: bool) -> MatchResult {
        let mut result = MatchResult::default();
        self.rank_into(query, store, fuzzy, &mut result);
        result
    }

    /// Like [`rank`](Self::rank), but refills `out`, keeping its allocation.
    pub fn rank_into(
        &mut self,
        query: &str,
        store: &CandidateStore,
        fuzzy: bool,
        out: &mut MatchResult,
    ) {
        let matches = &mut out.matches;
        matches.clear();
        fold_into(query, &mut self.folded_query);

        if fuzzy {
            self.query_chars.clear();
            self.query_chars.extend(self.folded_query.chars());
            let query_len = self.query_chars.len();
            for candidate in store {
                if let Some(window) = minimal_span(candidate.lower(), &self.query_chars, &mut self.starts) {
                    matches.push(Match {
                        index: candidate.index(),
                        score: span_score(query_len, window),
                    });
                }
            }
        } else {
            let finder = (!self.folded_query.is_empty())
                .then(|| Finder::new(self.folded_query.as_bytes()));
            for candidate in store {
                if let Some(score) = substring_score(candidate.lower(), finder.as_ref()) {
                    matches.push(Match {
                        index: candidate.index(),
                        score,
                    });
                }
            }
        }

        sort_matches(matches);
        tracing::trace!(
            query,
            fuzzy,
            candidates = store.len(),
            matched = matches.len(),
            "ranked candidates"
        );
    }
}

/// Rank `store` against `query` with a throwaway engine.
///
/// # Examples
///
/// ```
/// use linepick::{CandidateStore, PickerConfig, match_candidates};
///
/// let store = CandidateStore::build(["b", "a", "c"], &PickerConfig::default()).unwrap();
/// let all: Vec<usize> = match_candidates("", &store, true).indices().collect();
/// assert_eq!(all, vec![0, 1, 2]);
/// ```
pub fn match_candidates(query: &str, store: &CandidateStore, fuzzy: bool) -> MatchResult {
    MatchEngine::new().rank(query, store, fuzzy)
}
