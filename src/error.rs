//! Error type for the few fallible operations in the crate.
//!
//! Matching, editing and navigation are total. Only building a candidate
//! store, validating configuration and assembling a scheme table can fail.

use thiserror::Error;

use crate::scheme::Scheme;

/// Result alias used throughout `linepick`.
pub type Result<T> = std::result::Result<T, PickError>;

/// Errors reported by `linepick`.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum PickError {
    /// The input held more candidates than the configured maximum.
    ///
    /// Non-fatal: the caller may retry with
    /// [`CandidateStore::build_truncated`](crate::CandidateStore::build_truncated).
    #[error("candidate store overflow: {count} candidates exceed the maximum of {max}")]
    CandidateStoreOverflow {
        /// Number of candidates supplied.
        count: usize,
        /// Configured maximum.
        max: usize,
    },

    /// A configuration value is out of range.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// A scheme table is missing an entry for one variant.
    #[error("scheme table has no entry for {0:?}")]
    MissingScheme(Scheme),

    /// A scheme table lists the same variant twice.
    #[error("scheme table has more than one entry for {0:?}")]
    DuplicateScheme(Scheme),
}
