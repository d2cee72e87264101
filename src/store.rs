//! Immutable candidate storage.
//!
//! The store is filled once before interaction starts. Each candidate keeps
//! its original text, an ASCII-folded copy used for matching, and its
//! insertion index, which is its identity: duplicate texts are distinct
//! candidates.

use crate::config::PickerConfig;
use crate::error::{PickError, Result};

/// One line offered for selection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Candidate {
    text: String,
    lower: String,
    index: usize,
}

impl Candidate {
    fn new(text: String, index: usize) -> Self {
        // ASCII-only fold keeps byte offsets identical between `text` and `lower`.
        let lower = text.to_ascii_lowercase();
        Self { text, lower, index }
    }

    /// The text as supplied.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// The text with ASCII letters folded to lowercase.
    pub fn lower(&self) -> &str {
        &self.lower
    }

    /// Position in the input sequence.
    pub fn index(&self) -> usize {
        self.index
    }
}

/// The full, immutable candidate set.
///
/// # Examples
///
/// ```
/// use linepick::{CandidateStore, PickerConfig};
///
/// let store = CandidateStore::build(["Apple", "banana"], &PickerConfig::default()).unwrap();
/// assert_eq!(store.len(), 2);
/// assert_eq!(store.lowercase_of(0), Some("apple"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CandidateStore {
    candidates: Vec<Candidate>,
}

impl CandidateStore {
    /// Build a store from an ordered sequence of lines.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::CandidateStoreOverflow`] when the input holds more
    /// lines than `config.max_candidates`. The error is advisory; use
    /// [`build_truncated`](Self::build_truncated) to keep the leading lines instead.
    pub fn build<I, S>(items: I, config: &PickerConfig) -> Result<Self>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let candidates: Vec<Candidate> = items
            .into_iter()
            .enumerate()
            .map(|(index, text)| Candidate::new(text.into(), index))
            .collect();

        if let Some(max) = config.max_candidates {
            if candidates.len() > max {
                return Err(PickError::CandidateStoreOverflow {
                    count: candidates.len(),
                    max,
                });
            }
        }

        tracing::debug!(count = candidates.len(), "built candidate store");
        Ok(Self { candidates })
    }

    /// Build a store, dropping every line past `config.max_candidates`.
    ///
    /// Never fails. When lines are dropped a warning is logged.
    pub fn build_truncated<I, S>(items: I, config: &PickerConfig) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let limit = config.max_candidates.unwrap_or(usize::MAX);
        let mut iter = items.into_iter();
        let candidates: Vec<Candidate> = iter
            .by_ref()
            .take(limit)
            .enumerate()
            .map(|(index, text)| Candidate::new(text.into(), index))
            .collect();

        let dropped = iter.count();
        if dropped > 0 {
            tracing::warn!(kept = candidates.len(), dropped, "truncated candidate input");
        }
        tracing::debug!(count = candidates.len(), "built candidate store");
        Self { candidates }
    }

    /// The candidate at `index`, if any.
    pub fn get(&self, index: usize) -> Option<&Candidate> {
        self.candidates.get(index)
    }

    /// The folded text of the candidate at `index`, if any.
    pub fn lowercase_of(&self, index: usize) -> Option<&str> {
        self.candidates.get(index).map(Candidate::lower)
    }

    /// Number of candidates.
    pub fn len(&self) -> usize {
        self.candidates.len()
    }

    /// Returns `true` when the store holds no candidates.
    pub fn is_empty(&self) -> bool {
        self.candidates.is_empty()
    }

    /// All candidates in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, Candidate> {
        self.candidates.iter()
    }
}

impl<'a> IntoIterator for &'a CandidateStore {
    type Item = &'a Candidate;
    type IntoIter = std::slice::Iter<'a, Candidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
