//! Input mode and the `:` command prompt draft.

use std::mem::take;

use unicode_segmentation::UnicodeSegmentation;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputMode {
    #[default]
    Normal,
    Command,
}

/// Single-line text buffer with a grapheme-based cursor.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DraftInput {
    text: String,
    cursor: usize,
}

impl DraftInput {
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn take_text(&mut self) -> String {
        self.cursor = 0;
        take(&mut self.text)
    }

    pub fn move_cursor_left(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    pub fn move_cursor_right(&mut self) {
        self.cursor = self.cursor.saturating_add(1).min(self.grapheme_count());
    }

    pub fn enter_char(&mut self, new_char: char) {
        let index = self.byte_index_at(self.cursor);
        self.text.insert(index, new_char);
        self.move_cursor_right();
    }

    pub fn delete_char(&mut self) {
        if self.cursor == 0 {
            return;
        }

        let start = self.byte_index_at(self.cursor - 1);
        let end = self.byte_index_at(self.cursor);
        self.text.replace_range(start..end, "");
        self.move_cursor_left();
    }

    pub fn clear(&mut self) {
        self.text.clear();
        self.cursor = 0;
    }

    #[must_use]
    pub fn grapheme_count(&self) -> usize {
        self.text.graphemes(true).count()
    }

    fn byte_index_at(&self, grapheme_index: usize) -> usize {
        self.text
            .grapheme_indices(true)
            .nth(grapheme_index)
            .map_or(self.text.len(), |(i, _)| i)
    }
}

#[cfg(test)]
mod tests {
    use super::DraftInput;

    #[test]
    fn edits_at_cursor() {
        let mut draft = DraftInput::default();
        for c in "stp 3".chars() {
            draft.enter_char(c);
        }
        draft.move_cursor_left();
        draft.move_cursor_left();
        draft.move_cursor_left();
        draft.enter_char('e');
        assert_eq!(draft.text(), "step 3");
        assert_eq!(draft.cursor(), 3);
    }

    #[test]
    fn delete_at_start_is_noop() {
        let mut draft = DraftInput::default();
        draft.delete_char();
        assert_eq!(draft.text(), "");
        draft.enter_char('é');
        draft.delete_char();
        assert_eq!(draft.text(), "");
        assert_eq!(draft.cursor(), 0);
    }

    #[test]
    fn take_text_resets() {
        let mut draft = DraftInput::default();
        draft.enter_char('q');
        assert_eq!(draft.take_text(), "q");
        assert_eq!(draft.cursor(), 0);
        assert_eq!(draft.grapheme_count(), 0);
    }
}
