//! Integration tests for the selection controller.
//!
//! These tests play keystroke sequences through [`SelectionController`] and
//! check the visible window and committed output, using only the public API.

use linepick::{
    CandidateStore, Event, Outcome, PickError, PickerConfig, PickerState, Scheme,
    SelectionController,
};

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn picker_with(items: &[&str], config: PickerConfig) -> SelectionController {
    let store = CandidateStore::build(items.iter().copied(), &config).unwrap();
    SelectionController::new(store, config).unwrap()
}

fn picker(items: &[&str], fuzzy: bool) -> SelectionController {
    picker_with(items, PickerConfig::default().with_fuzzy(fuzzy))
}

fn type_str(p: &mut SelectionController, s: &str) {
    for c in s.chars() {
        assert_eq!(p.handle(Event::Insert(c)), Outcome::Pending);
    }
}

fn window_texts(p: &SelectionController) -> Vec<String> {
    p.visible_window()
        .iter()
        .map(|e| e.text.to_owned())
        .collect()
}

fn commit_lines(outcome: Outcome) -> Vec<String> {
    match outcome {
        Outcome::Commit(commit) => commit.into_lines(),
        other => panic!("expected commit, got {other:?}"),
    }
}

// ---------------------------------------------------------------------------
// 1. Filtering and display
// ---------------------------------------------------------------------------

/// Typing narrows the window; erasing widens it again.
#[test]
fn typing_and_erasing_round_trip() {
    let mut p = picker(&["apple", "banana", "application"], false);
    assert_eq!(window_texts(&p), vec!["apple", "banana", "application"]);
    type_str(&mut p, "app");
    assert_eq!(window_texts(&p), vec!["apple", "application"]);
    p.handle(Event::DeleteWordBackward);
    assert_eq!(p.query_text(), "");
    assert_eq!(p.state(), PickerState::Idle);
    assert_eq!(window_texts(&p), vec!["apple", "banana", "application"]);
}

/// The state label tracks query and result emptiness.
#[test]
fn state_labels() {
    let mut p = picker(&["alpha"], true);
    assert_eq!(p.state(), PickerState::Idle);
    type_str(&mut p, "ah");
    assert_eq!(p.state(), PickerState::Filtering);
    type_str(&mut p, "q");
    assert_eq!(p.state(), PickerState::Empty);
}

/// The window is capped at the configured capacity and tags the highlight.
#[test]
fn window_respects_capacity() {
    let items: Vec<String> = (0..30).map(|i| format!("line {i}")).collect();
    let refs: Vec<&str> = items.iter().map(String::as_str).collect();
    let mut p = picker_with(&refs, PickerConfig::default().with_visible_capacity(5));

    assert_eq!(p.visible_window().len(), 5);
    p.handle(Event::PageNext);
    p.handle(Event::PageNext);
    let window = p.visible_window();
    assert_eq!(window.len(), 5);
    let highlighted: Vec<usize> = window
        .iter()
        .filter(|e| e.highlighted)
        .map(|e| e.rank)
        .collect();
    assert_eq!(highlighted, vec![10]);
    assert_eq!(window.last().unwrap().rank, 10);
}

/// Rows report the scheme a renderer should use.
#[test]
fn rows_carry_schemes() {
    let mut p = picker(&["a", "b", "c"], true);
    p.handle(Event::Next);
    p.handle(Event::ToggleSelect);
    p.handle(Event::Next);
    let schemes: Vec<Scheme> = p.visible_window().iter().map(|e| e.scheme()).collect();
    assert_eq!(schemes, vec![Scheme::Normal, Scheme::Out, Scheme::Selected]);
}

// ---------------------------------------------------------------------------
// 2. Selection and output
// ---------------------------------------------------------------------------

/// Toggle at rank 0, filter it out of view, confirm: it is still committed.
#[test]
fn multi_select_persists_across_filtering() {
    let mut p = picker(&["apple", "banana", "application"], false);
    p.handle(Event::ToggleSelect);
    type_str(&mut p, "ban");
    assert_eq!(window_texts(&p), vec!["banana"]);
    assert_eq!(commit_lines(p.handle(Event::Confirm)), vec!["apple"]);
}

/// Selecting, filtering, then selecting more is additive and output follows
/// insertion order rather than toggle order.
#[test]
fn multi_select_is_additive() {
    let mut p = picker(&["one", "two", "three"], true);
    type_str(&mut p, "three");
    p.handle(Event::ToggleSelect);
    p.handle(Event::DeleteToStart);
    p.handle(Event::ToggleSelect);
    assert_eq!(commit_lines(p.handle(Event::Confirm)), vec!["one", "three"]);
}

/// Without a multi-selection, confirm commits the highlighted row.
#[test]
fn confirm_highlighted() {
    let mut p = picker(&["north", "south", "east"], false);
    type_str(&mut p, "th");
    p.handle(Event::Next);
    assert_eq!(commit_lines(p.handle(Event::Confirm)), vec!["south"]);
}

/// Confirm with nothing matched and nothing selected does nothing.
#[test]
fn confirm_without_match_is_noop() {
    let mut p = picker(&["north"], false);
    type_str(&mut p, "west");
    assert_eq!(p.handle(Event::Confirm), Outcome::Pending);
    p.handle(Event::DeleteWordBackward);
    assert_eq!(commit_lines(p.handle(Event::Confirm)), vec!["north"]);
}

/// Cancel ends the session without output.
#[test]
fn cancel_ends_session() {
    let mut p = picker(&["a"], true);
    assert_eq!(p.handle(Event::Cancel), Outcome::Cancelled);
    assert_eq!(p.handle(Event::Confirm), Outcome::Pending);
}

/// The committed lines are written one per line.
#[test]
fn commit_is_written_line_by_line() {
    let mut p = picker(&["x", "y"], true);
    p.handle(Event::ToggleSelect);
    p.handle(Event::Next);
    p.handle(Event::ToggleSelect);
    let Outcome::Commit(commit) = p.handle(Event::Confirm) else {
        panic!("expected commit");
    };
    let mut out = Vec::new();
    commit.write_to(&mut out).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "x\ny\n");
}

// ---------------------------------------------------------------------------
// 3. Query editing through events
// ---------------------------------------------------------------------------

/// Edits in the middle of the query re-rank against the whole text.
#[test]
fn mid_query_edit() {
    let mut p = picker(&["cart", "cat", "chart"], false);
    type_str(&mut p, "ct");
    assert!(p.matches().is_empty());
    p.handle(Event::MoveCursor(-1));
    p.handle(Event::Insert('a'));
    assert_eq!(p.query_text(), "cat");
    assert_eq!(p.cursor_position(), 2);
    assert_eq!(window_texts(&p), vec!["cat"]);
}

/// Custom delimiters drive word erase.
#[test]
fn custom_word_delimiters() {
    let config = PickerConfig::default().with_word_delimiters(" /");
    let mut p = picker_with(&["usr/local/bin"], config);
    p.handle(Event::Paste("usr/local/bin".to_owned()));
    p.handle(Event::DeleteWordBackward);
    assert_eq!(p.query_text(), "usr/local/");
}

/// Tab-style completion copies the highlighted text into the query.
#[test]
fn completion_then_confirm_input() {
    let mut p = picker(&["firefox", "file-roller"], true);
    type_str(&mut p, "fir");
    p.handle(Event::Complete);
    assert_eq!(p.query_text(), "firefox");
    type_str(&mut p, " --private");
    assert_eq!(p.state(), PickerState::Empty);
    assert_eq!(
        commit_lines(p.handle(Event::ConfirmInput)),
        vec!["firefox --private"]
    );
}

// ---------------------------------------------------------------------------
// 4. Construction
// ---------------------------------------------------------------------------

#[test]
fn overflow_is_reported_then_truncated() {
    let config = PickerConfig::default().with_max_candidates(2);
    let err = CandidateStore::build(["a", "b", "c"], &config).unwrap_err();
    assert!(matches!(err, PickError::CandidateStoreOverflow { count: 3, max: 2 }));

    let store = CandidateStore::build_truncated(["a", "b", "c"], &config);
    let p = SelectionController::new(store, config).unwrap();
    assert_eq!(p.matches().len(), 2);
}

#[test]
fn invalid_config_is_rejected() {
    let config = PickerConfig::default().with_visible_capacity(0);
    let err = SelectionController::new(CandidateStore::default(), config).unwrap_err();
    assert!(matches!(err, PickError::InvalidConfig(_)));
}
