//! The interactive selection state machine.
//!
//! [`SelectionController`] owns the candidate store, the query buffer, the
//! current [`MatchResult`] and the navigation state. Each [`Event`] is applied
//! completely, including any re-match, before the call returns.
//!
//! # Invariants
//!
//! 1. `highlighted < result.len()` whenever the result is non-empty, else 0.
//! 2. `scroll_offset <= highlighted < scroll_offset + visible_capacity`.
//! 3. A query change re-ranks from scratch and resets highlight and scroll to 0.
//! 4. The multi-selection survives query changes.

use std::collections::BTreeSet;
use std::io::{self, Write};

use crate::config::PickerConfig;
use crate::edit::EditBuffer;
use crate::engine::{MatchEngine, MatchResult};
use crate::error::Result;
use crate::scheme::Scheme;
use crate::store::{Candidate, CandidateStore};

/// One input event from the keyboard or the windowing layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// Type one codepoint.
    Insert(char),
    /// Insert pasted text.
    Paste(String),
    /// Erase the codepoint before the cursor.
    DeleteBackward,
    /// Erase the codepoint after the cursor.
    DeleteForward,
    /// Erase the word before the cursor.
    DeleteWordBackward,
    /// Erase the word after the cursor.
    DeleteWordForward,
    /// Erase from the start of the query to the cursor.
    DeleteToStart,
    /// Erase from the cursor to the end of the query.
    DeleteToEnd,
    /// Move the query cursor by a signed number of codepoints.
    MoveCursor(isize),
    /// Move the query cursor to the start.
    CursorStart,
    /// Move the query cursor to the end.
    CursorEnd,
    /// Move the query cursor back one word.
    WordBackward,
    /// Move the query cursor forward one word.
    WordForward,
    /// Highlight the next match.
    Next,
    /// Highlight the previous match.
    Previous,
    /// Move the highlight one page down.
    PageNext,
    /// Move the highlight one page up.
    PagePrevious,
    /// Highlight the first match.
    First,
    /// Highlight the last match.
    Last,
    /// Add or remove the highlighted candidate from the multi-selection.
    ToggleSelect,
    /// Replace the query with the highlighted candidate's text.
    Complete,
    /// Commit the multi-selection, or the highlighted candidate.
    Confirm,
    /// Commit the query text itself.
    ConfirmInput,
    /// Quit without output.
    Cancel,
}

/// Lines chosen by the user, in output order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Commit {
    lines: Vec<String>,
}

impl Commit {
    /// The committed lines.
    pub fn lines(&self) -> &[String] {
        &self.lines
    }

    /// Consume the commit, returning its lines.
    pub fn into_lines(self) -> Vec<String> {
        self.lines
    }

    /// Write each line followed by `\n`.
    pub fn write_to<W: Write>(&self, mut writer: W) -> io::Result<()> {
        for line in &self.lines {
            writeln!(writer, "{line}")?;
        }
        writer.flush()
    }
}

/// Result of applying one event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going.
    Pending,
    /// The user committed output. Terminal.
    Commit(Commit),
    /// The user cancelled. Terminal.
    Cancelled,
}

/// Presentation label for the controller's current data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerState {
    /// Empty query; the full list is shown.
    Idle,
    /// Non-empty query with at least one match.
    Filtering,
    /// Non-empty query with no match.
    Empty,
}

/// One row of the visible window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VisibleEntry<'a> {
    /// Candidate text as supplied.
    pub text: &'a str,
    /// Position in the current result.
    pub rank: usize,
    /// Insertion index of the candidate.
    pub index: usize,
    /// Whether this row carries the highlight.
    pub highlighted: bool,
    /// Whether this candidate is in the multi-selection.
    pub selected: bool,
}

impl VisibleEntry<'_> {
    /// Visual role of the row.
    pub fn scheme(&self) -> Scheme {
        Scheme::for_row(self.highlighted, self.selected)
    }
}

/// Drives query editing, ranking, pagination and selection.
///
/// # Examples
///
/// ```
/// use linepick::{CandidateStore, Event, Outcome, PickerConfig, SelectionController};
///
/// let config = PickerConfig::default().with_fuzzy(false);
/// let store = CandidateStore::build(["apple", "banana", "application"], &config).unwrap();
/// let mut picker = SelectionController::new(store, config).unwrap();
///
/// for c in "app".chars() {
///     picker.handle(Event::Insert(c));
/// }
/// picker.handle(Event::Next);
/// match picker.handle(Event::Confirm) {
///     Outcome::Commit(commit) => assert_eq!(commit.lines(), ["application"]),
///     other => panic!("unexpected {other:?}"),
/// }
/// ```
#[derive(Debug)]
pub struct SelectionController {
    config: PickerConfig,
    store: CandidateStore,
    engine: MatchEngine,
    buffer: EditBuffer,
    result: MatchResult,
    highlighted: usize,
    scroll_offset: usize,
    selected: BTreeSet<usize>,
    finished: bool,
}

impl SelectionController {
    /// Create a controller showing every candidate under an empty query.
    ///
    /// # Errors
    ///
    /// Returns [`PickError::InvalidConfig`](crate::PickError::InvalidConfig)
    /// when `config` does not validate.
    pub fn new(store: CandidateStore, config: PickerConfig) -> Result<Self> {
        config.validate()?;
        let buffer = EditBuffer::new(config.word_delimiters.clone());
        let mut controller = Self {
            config,
            store,
            engine: MatchEngine::new(),
            buffer,
            result: MatchResult::default(),
            highlighted: 0,
            scroll_offset: 0,
            selected: BTreeSet::new(),
            finished: false,
        };
        controller.rematch();
        Ok(controller)
    }

    /// Apply one event.
    ///
    /// Once an event has returned [`Outcome::Commit`] or
    /// [`Outcome::Cancelled`], later events are ignored.
    pub fn handle(&mut self, event: Event) -> Outcome {
        if self.finished {
            return Outcome::Pending;
        }

        match event {
            Event::Insert(c) => self.edit(|buf| buf.insert(c)),
            Event::Paste(text) => self.edit(|buf| buf.insert_str(&text)),
            Event::DeleteBackward => self.edit(EditBuffer::delete_backward),
            Event::DeleteForward => self.edit(EditBuffer::delete_forward),
            Event::DeleteWordBackward => self.edit(EditBuffer::delete_word_backward),
            Event::DeleteWordForward => self.edit(EditBuffer::delete_word_forward),
            Event::DeleteToStart => self.edit(EditBuffer::delete_to_start),
            Event::DeleteToEnd => self.edit(EditBuffer::delete_to_end),

            Event::MoveCursor(delta) => self.buffer.move_cursor(delta),
            Event::CursorStart => self.buffer.move_to_start(),
            Event::CursorEnd => self.buffer.move_to_end(),
            Event::WordBackward => self.buffer.move_word_backward(),
            Event::WordForward => self.buffer.move_word_forward(),

            Event::Next => self.move_highlight(1),
            Event::Previous => self.move_highlight(-1),
            Event::PageNext => self.move_highlight(self.page()),
            Event::PagePrevious => self.move_highlight(-self.page()),
            Event::First => self.move_highlight(isize::MIN),
            Event::Last => self.move_highlight(isize::MAX),

            Event::ToggleSelect => self.toggle_selected(),
            Event::Complete => self.complete(),

            Event::Confirm => {
                if let Some(commit) = self.confirm() {
                    return self.finish(Outcome::Commit(commit));
                }
            }
            Event::ConfirmInput => {
                let commit = Commit {
                    lines: vec![self.buffer.text().to_owned()],
                };
                return self.finish(Outcome::Commit(commit));
            }
            Event::Cancel => return self.finish(Outcome::Cancelled),
        }

        Outcome::Pending
    }

    fn finish(&mut self, outcome: Outcome) -> Outcome {
        match &outcome {
            Outcome::Commit(commit) => {
                tracing::debug!(lines = commit.lines.len(), "committed selection");
            }
            Outcome::Cancelled => tracing::debug!("selection cancelled"),
            Outcome::Pending => {}
        }
        self.finished = true;
        outcome
    }

    /// Run a buffer edit and re-rank if the text changed.
    fn edit(&mut self, op: impl FnOnce(&mut EditBuffer)) {
        let before = self.buffer.text().len();
        op(&mut self.buffer);
        // Every single edit that changes the text also changes its byte length.
        if self.buffer.text().len() != before {
            self.rematch();
        }
    }

    fn rematch(&mut self) {
        self.engine.rank_into(
            self.buffer.text(),
            &self.store,
            self.config.fuzzy,
            &mut self.result,
        );
        self.highlighted = 0;
        self.scroll_offset = 0;
    }

    fn page(&self) -> isize {
        isize::try_from(self.config.visible_capacity).unwrap_or(isize::MAX)
    }

    /// Move the highlight by `delta` ranks, clamping at both ends.
    fn move_highlight(&mut self, delta: isize) {
        let Some(last) = self.result.len().checked_sub(1) else {
            return;
        };
        self.highlighted = self.highlighted.saturating_add_signed(delta).min(last);
        self.adjust_scroll();
    }

    /// Shift the window the least amount that keeps the highlight visible.
    fn adjust_scroll(&mut self) {
        let capacity = self.config.visible_capacity;
        if self.highlighted < self.scroll_offset {
            self.scroll_offset = self.highlighted;
        } else if self.highlighted >= self.scroll_offset + capacity {
            self.scroll_offset = self.highlighted + 1 - capacity;
        }
    }

    fn toggle_selected(&mut self) {
        if let Some(m) = self.result.get(self.highlighted) {
            if !self.selected.remove(&m.index) {
                self.selected.insert(m.index);
            }
        }
    }

    fn complete(&mut self) {
        let Some(candidate) = self.highlighted_candidate() else {
            return;
        };
        let text = candidate.text().to_owned();
        self.buffer.set_text(&text);
        self.rematch();
    }

    fn confirm(&self) -> Option<Commit> {
        let lines: Vec<String> = if self.selected.is_empty() {
            vec![self.highlighted_candidate()?.text().to_owned()]
        } else {
            self.selected
                .iter()
                .filter_map(|&index| self.store.get(index))
                .map(|candidate| candidate.text().to_owned())
                .collect()
        };
        Some(Commit { lines })
    }

    /// Rows currently in view, in rank order.
    pub fn visible_window(&self) -> Vec<VisibleEntry<'_>> {
        let end = (self.scroll_offset + self.config.visible_capacity).min(self.result.len());
        let start = self.scroll_offset.min(end);
        self.result.as_slice()[start..end]
            .iter()
            .enumerate()
            .filter_map(|(offset, m)| {
                let rank = start + offset;
                self.store.get(m.index).map(|candidate| VisibleEntry {
                    text: candidate.text(),
                    rank,
                    index: m.index,
                    highlighted: rank == self.highlighted,
                    selected: self.selected.contains(&m.index),
                })
            })
            .collect()
    }

    /// The query text.
    pub fn query_text(&self) -> &str {
        self.buffer.text()
    }

    /// The query cursor, in codepoints.
    pub fn cursor_position(&self) -> usize {
        self.buffer.cursor()
    }

    /// Rank of the highlighted match, or `None` when nothing matches.
    pub fn highlighted_rank(&self) -> Option<usize> {
        (!self.result.is_empty()).then_some(self.highlighted)
    }

    /// The highlighted candidate, if any.
    pub fn highlighted_candidate(&self) -> Option<&Candidate> {
        self.result
            .get(self.highlighted)
            .and_then(|m| self.store.get(m.index))
    }

    /// Rank of the first visible row.
    pub fn scroll_offset(&self) -> usize {
        self.scroll_offset
    }

    /// The current ranked result.
    pub fn matches(&self) -> &MatchResult {
        &self.result
    }

    /// Insertion indexes in the multi-selection, ascending.
    pub fn selected_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.selected.iter().copied()
    }

    /// The candidate store.
    pub fn store(&self) -> &CandidateStore {
        &self.store
    }

    /// The configuration this controller runs with.
    pub fn config(&self) -> &PickerConfig {
        &self.config
    }

    /// Presentation label for the current data.
    pub fn state(&self) -> PickerState {
        if self.buffer.is_empty() {
            PickerState::Idle
        } else if self.result.is_empty() {
            PickerState::Empty
        } else {
            PickerState::Filtering
        }
    }

    /// Whether a terminal event has been handled.
    pub fn is_finished(&self) -> bool {
        self.finished
    }
}
