//! Query text editing.
//!
//! [`EditBuffer`] holds the query and a cursor measured in codepoints
//! (`0..=len`). Word-wise operations use a configurable delimiter set: a word
//! is a maximal run of non-delimiter codepoints, and word erase skips
//! delimiters next to the cursor before removing the word behind them, like a
//! shell's `^W`.

/// Editable query text with a codepoint cursor.
///
/// # Examples
///
/// ```
/// use linepick::EditBuffer;
///
/// let mut buf = EditBuffer::new(" ");
/// buf.insert_str("ab cd ef");
/// buf.delete_word_backward();
/// assert_eq!(buf.text(), "ab cd ");
/// buf.delete_word_backward();
/// assert_eq!(buf.text(), "ab ");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditBuffer {
    text: String,
    /// Codepoint offset, always `<= len()`.
    cursor: usize,
    delimiters: String,
}

impl EditBuffer {
    /// Create an empty buffer. Every `char` in `delimiters` ends a word.
    pub fn new(delimiters: impl Into<String>) -> Self {
        Self {
            text: String::new(),
            cursor: 0,
            delimiters: delimiters.into(),
        }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor offset in codepoints.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Length in codepoints.
    pub fn len(&self) -> usize {
        self.text.chars().count()
    }

    /// Returns `true` when the buffer holds no text.
    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }

    fn is_delimiter(&self, c: char) -> bool {
        self.delimiters.contains(c)
    }

    /// Byte offset of codepoint `pos`, or the text length past the end.
    fn byte_offset(&self, pos: usize) -> usize {
        self.text
            .char_indices()
            .nth(pos)
            .map_or(self.text.len(), |(i, _)| i)
    }

    fn char_at(&self, pos: usize) -> Option<char> {
        self.text.chars().nth(pos)
    }

    fn remove_range(&mut self, start: usize, end: usize) {
        if start < end {
            let byte_start = self.byte_offset(start);
            let byte_end = self.byte_offset(end);
            self.text.drain(byte_start..byte_end);
        }
    }

    /// Insert `c` at the cursor and move past it.
    pub fn insert(&mut self, c: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, c);
        self.cursor += 1;
    }

    /// Insert `s` at the cursor and move past it (paste).
    pub fn insert_str(&mut self, s: &str) {
        let at = self.byte_offset(self.cursor);
        self.text.insert_str(at, s);
        self.cursor += s.chars().count();
    }

    /// Remove the codepoint before the cursor. No-op at the start.
    pub fn delete_backward(&mut self) {
        if self.cursor > 0 {
            self.remove_range(self.cursor - 1, self.cursor);
            self.cursor -= 1;
        }
    }

    /// Remove the codepoint after the cursor. No-op at the end.
    pub fn delete_forward(&mut self) {
        if self.cursor < self.len() {
            self.remove_range(self.cursor, self.cursor + 1);
        }
    }

    /// Offset where a backward word scan from the cursor stops.
    fn word_start_before_cursor(&self) -> usize {
        let mut pos = self.cursor;
        while pos > 0 && self.char_at(pos - 1).is_some_and(|c| self.is_delimiter(c)) {
            pos -= 1;
        }
        while pos > 0 && self.char_at(pos - 1).is_some_and(|c| !self.is_delimiter(c)) {
            pos -= 1;
        }
        pos
    }

    /// Offset where a forward word scan from the cursor stops.
    fn word_end_after_cursor(&self) -> usize {
        let len = self.len();
        let mut pos = self.cursor;
        while pos < len && self.char_at(pos).is_some_and(|c| self.is_delimiter(c)) {
            pos += 1;
        }
        while pos < len && self.char_at(pos).is_some_and(|c| !self.is_delimiter(c)) {
            pos += 1;
        }
        pos
    }

    /// Skip delimiters behind the cursor, then erase back to the previous
    /// delimiter or the start of the buffer.
    pub fn delete_word_backward(&mut self) {
        let start = self.word_start_before_cursor();
        self.remove_range(start, self.cursor);
        self.cursor = start;
    }

    /// Skip delimiters after the cursor, then erase up to the next delimiter
    /// or the end of the buffer.
    pub fn delete_word_forward(&mut self) {
        let end = self.word_end_after_cursor();
        self.remove_range(self.cursor, end);
    }

    /// Erase everything before the cursor.
    pub fn delete_to_start(&mut self) {
        self.remove_range(0, self.cursor);
        self.cursor = 0;
    }

    /// Erase everything after the cursor.
    pub fn delete_to_end(&mut self) {
        let at = self.byte_offset(self.cursor);
        self.text.truncate(at);
    }

    /// Move the cursor by `delta` codepoints, clamped to `0..=len`.
    pub fn move_cursor(&mut self, delta: isize) {
        let target = self.cursor.saturating_add_signed(delta);
        self.cursor = target.min(self.len());
    }

    /// Move the cursor to the start.
    pub fn move_to_start(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor to the end.
    pub fn move_to_end(&mut self) {
        self.cursor = self.len();
    }

    /// Move the cursor to where [`delete_word_backward`](Self::delete_word_backward) would stop.
    pub fn move_word_backward(&mut self) {
        self.cursor = self.word_start_before_cursor();
    }

    /// Move the cursor to where [`delete_word_forward`](Self::delete_word_forward) would stop.
    pub fn move_word_forward(&mut self) {
        self.cursor = self.word_end_after_cursor();
    }

    /// Replace the text and put the cursor at its end.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.cursor = self.len();
    }

    /// Empty the buffer.
    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }
}
