//! Single-line text input (pure state transitions).
//!
//! Backs both the search box and the inline edit fields. The cursor is a
//! char index, so multi-byte input never splits a code point.

/// Editable single-line text with a cursor.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TextInput {
    text: String,
    cursor: usize,
}

impl TextInput {
    /// Create input holding `text` with the cursor at the end.
    pub fn new(text: impl Into<String>) -> Self {
        let text = text.into();
        let cursor = text.chars().count();
        Self { text, cursor }
    }

    /// Current text.
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Cursor position in chars, `0..=len`.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Replace the whole text and move the cursor to the end.
    pub fn set(&mut self, text: impl Into<String>) {
        *self = Self::new(text);
    }

    /// Insert a character at the cursor and advance it.
    pub fn insert_char(&mut self, ch: char) {
        let at = self.byte_offset(self.cursor);
        self.text.insert(at, ch);
        self.cursor += 1;
    }

    /// Delete the character before the cursor. No-op at position 0.
    pub fn backspace(&mut self) {
        if self.cursor == 0 {
            return;
        }
        let at = self.byte_offset(self.cursor - 1);
        self.text.remove(at);
        self.cursor -= 1;
    }

    /// Delete the character under the cursor. No-op at the end.
    pub fn delete(&mut self) {
        if self.cursor >= self.len() {
            return;
        }
        let at = self.byte_offset(self.cursor);
        self.text.remove(at);
    }

    /// Move the cursor one char left.
    pub fn cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move the cursor one char right.
    pub fn cursor_right(&mut self) {
        self.cursor = (self.cursor + 1).min(self.len());
    }

    /// Move the cursor to the start.
    pub fn cursor_home(&mut self) {
        self.cursor = 0;
    }

    /// Move the cursor past the last char.
    pub fn cursor_end(&mut self) {
        self.cursor = self.len();
    }

    /// Text split around the cursor: `(before, after)`.
    pub fn split_at_cursor(&self) -> (&str, &str) {
        self.text.split_at(self.byte_offset(self.cursor))
    }

    fn len(&self) -> usize {
        self.text.chars().count()
    }

    fn byte_offset(&self, char_index: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_index)
            .map(|(offset, _)| offset)
            .unwrap_or(self.text.len())
    }
}
