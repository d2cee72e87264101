#![warn(missing_docs)]

//! An incremental line-selector engine.
//!
//! `linepick` filters a fixed set of candidate lines against a query typed
//! one keystroke at a time, ranks the survivors in exact-substring or fuzzy
//! mode, pages them into a bounded visible window and tracks highlight and
//! multi-selection until the user confirms or cancels. Reading input,
//! drawing and key decoding are left to the caller.

/// Configuration passed explicitly into the store and the controller.
pub mod config;

/// The crate's error type.
pub mod error;

/// Immutable candidate storage.
pub mod store;

/// Per-candidate scores for exact and fuzzy matching.
pub mod ranking;

/// Result ordering.
pub mod sort;

/// Matching a query against a whole store.
pub mod engine;

/// Query text editing with word-wise operations.
pub mod edit;

/// The interactive selection state machine.
pub mod controller;

/// Row schemes and scheme-keyed tables for renderers.
pub mod scheme;

// Re-export primary public API types and functions at the crate root.
pub use config::PickerConfig;
pub use controller::{Commit, Event, Outcome, PickerState, SelectionController, VisibleEntry};
pub use edit::EditBuffer;
pub use engine::{Match, MatchEngine, MatchResult, match_candidates};
pub use error::{PickError, Result};
pub use ranking::{Score, score_candidate};
pub use scheme::{ColorPair, Palette, Scheme, SchemeMap};
pub use sort::compare_matches;
pub use store::{Candidate, CandidateStore};
