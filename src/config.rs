//! Configuration for the picker.
//!
//! [`PickerConfig`] is built once by the caller and handed to
//! [`CandidateStore::build`](crate::CandidateStore::build) and
//! [`SelectionController::new`](crate::SelectionController::new). Nothing in
//! the crate reads configuration from global state.

use crate::error::{PickError, Result};

/// Options that control matching, pagination and word editing.
///
/// # Defaults
///
/// - `fuzzy`: `true` (subsequence matching ranked by minimal span)
/// - `visible_capacity`: `8` rows per page
/// - `word_delimiters`: `" "` (a single space)
/// - `max_candidates`: `None` (no limit)
///
/// # Examples
///
/// ```
/// use linepick::PickerConfig;
///
/// let config = PickerConfig::default();
/// assert!(config.fuzzy);
/// assert_eq!(config.visible_capacity, 8);
///
/// // Inline layout with exact-substring matching.
/// let config = PickerConfig::default()
///     .with_fuzzy(false)
///     .with_visible_capacity(1);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct PickerConfig {
    /// Selects fuzzy (subsequence) matching instead of exact-substring matching.
    pub fuzzy: bool,
    /// Rows per page. `1` means inline mode (a single visible row).
    pub visible_capacity: usize,
    /// Every `char` in this string ends a word for word-wise editing.
    pub word_delimiters: String,
    /// Upper bound on the number of candidates accepted at build time.
    pub max_candidates: Option<usize>,
}

impl Default for PickerConfig {
    fn default() -> Self {
        Self {
            fuzzy: true,
            visible_capacity: 8,
            word_delimiters: " ".to_owned(),
            max_candidates: None,
        }
    }
}

impl PickerConfig {
    /// Set the matching mode.
    #[must_use]
    pub fn with_fuzzy(mut self, fuzzy: bool) -> Self {
        self.fuzzy = fuzzy;
        self
    }

    /// Set the number of rows per page.
    #[must_use]
    pub fn with_visible_capacity(mut self, rows: usize) -> Self {
        self.visible_capacity = rows;
        self
    }

    /// Set the word delimiter characters, e.g. `" /?\"&[]"`.
    #[must_use]
    pub fn with_word_delimiters(mut self, delimiters: impl Into<String>) -> Self {
        self.word_delimiters = delimiters.into();
        self
    }

    /// Cap the number of candidates [`CandidateStore::build`](crate::CandidateStore::build) accepts.
    #[must_use]
    pub fn with_max_candidates(mut self, max: usize) -> Self {
        self.max_candidates = Some(max);
        self
    }

    /// Check that every value is usable.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::InvalidConfig`] when `visible_capacity` is zero,
    /// since a window that shows nothing can never contain the highlight.
    pub fn validate(&self) -> Result<()> {
        if self.visible_capacity == 0 {
            return Err(PickError::InvalidConfig(
                "visible_capacity must be at least 1".to_owned(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_follow_stock_menu() {
        let config = PickerConfig::default();
        assert!(config.fuzzy);
        assert_eq!(config.visible_capacity, 8);
        assert_eq!(config.word_delimiters, " ");
        assert_eq!(config.max_candidates, None);
    }

    #[test]
    fn builders_set_fields() {
        let config = PickerConfig::default()
            .with_fuzzy(false)
            .with_visible_capacity(3)
            .with_word_delimiters("/ ")
            .with_max_candidates(100);
        assert!(!config.fuzzy);
        assert_eq!(config.visible_capacity, 3);
        assert_eq!(config.word_delimiters, "/ ");
        assert_eq!(config.max_candidates, Some(100));
    }

    #[test]
    fn zero_capacity_is_rejected() {
        let err = PickerConfig::default()
            .with_visible_capacity(0)
            .validate()
            .unwrap_err();
        assert!(matches!(err, PickError::InvalidConfig(_)));
    }

    #[test]
    fn empty_delimiter_set_is_valid() {
        let config = PickerConfig::default().with_word_delimiters("");
        assert!(config.validate().is_ok());
        assert!(config.word_delimiters.is_empty());
    }

    #[cfg(feature = "serde")]
    #[test]
    fn partial_document_fills_defaults() {
        let config: PickerConfig = serde_json::from_str(r#"{"fuzzy": false}"#).unwrap();
        assert!(!config.fuzzy);
        assert_eq!(config.visible_capacity, 8);
        assert_eq!(config.word_delimiters, " ");
    }
}
