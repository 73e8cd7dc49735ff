use std::ops::Range;

/// Spaces inserted by the Tab key.
pub const TAB_INSERT: &str = "    ";

/// Text being edited plus the selection, in char offsets.
///
/// A collapsed selection (`start == end`) is the caret.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorBuffer {
    text: String,
    selection: Range<usize>,
}

impl EditorBuffer {
    pub fn new(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            selection: 0..0,
        }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn selection(&self) -> Range<usize> {
        self.selection.clone()
    }

    fn char_len(&self) -> usize {
        self.text.chars().count()
    }

    /// Replace the whole buffer. The selection is clamped to the new text.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
        let len = self.char_len();
        self.selection = self.selection.start.min(len)..self.selection.end.min(len);
    }

    pub fn set_caret(&mut self, offset: usize) {
        let offset = offset.min(self.char_len());
        self.selection = offset..offset;
    }

    pub fn select(&mut self, start: usize, end: usize) {
        let len = self.char_len();
        let (start, end) = if start <= end { (start, end) } else { (end, start) };
        self.selection = start.min(len)..end.min(len);
    }

    fn byte_offset(&self, char_offset: usize) -> usize {
        self.text
            .char_indices()
            .nth(char_offset)
            .map(|(i, _)| i)
            .unwrap_or(self.text.len())
    }

    pub fn line_count(&self) -> usize {
        self.text.split('\n').count()
    }

    /// Gutter text: one number per line, each followed by a newline.
    pub fn line_numbers(&self) -> String {
        (1..=self.line_count()).map(|n| format!("{}\n", n)).collect()
    }

    /// 1-based (line, column) of the selection start.
    pub fn cursor_position(&self) -> (usize, usize) {
        let end = self.byte_offset(self.selection.start);
        let before = &self.text[..end];
        let line = before.split('\n').count();
        let column = before
            .rsplit('\n')
            .next()
            .map(|tail| tail.chars().count())
            .unwrap_or(0)
            + 1;
        (line, column)
    }

    pub fn cursor_label(&self) -> String {
        let (line, column) = self.cursor_position();
        format!("Ln {}, Col {}", line, column)
    }

    /// Replace the selection with four spaces and park the caret after them.
    pub fn insert_tab(&mut self) {
        let start = self.byte_offset(self.selection.start);
        let end = self.byte_offset(self.selection.end);
        self.text.replace_range(start..end, TAB_INSERT);

        let caret = self.selection.start + TAB_INSERT.chars().count();
        self.selection = caret..caret;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_buffer_has_one_line() {
        let buf = EditorBuffer::default();
        assert_eq!(buf.line_count(), 1);
        assert_eq!(buf.line_numbers(), "1\n");
        assert_eq!(buf.cursor_label(), "Ln 1, Col 1");
    }

    #[test]
    fn test_cursor_after_newline() {
        let mut buf = EditorBuffer::new("ab\ncd");
        buf.set_caret(3);
        assert_eq!(buf.cursor_position(), (2, 1));
        buf.set_caret(5);
        assert_eq!(buf.cursor_position(), (2, 3));
    }

    #[test]
    fn test_caret_clamped() {
        let mut buf = EditorBuffer::new("abc");
        buf.set_caret(99);
        assert_eq!(buf.selection(), 3..3);
        buf.set_text("a");
        assert_eq!(buf.selection(), 1..1);
    }

    #[test]
    fn test_tab_replaces_selection() {
        let mut buf = EditorBuffer::new("int x;");
        buf.select(0, 3);
        buf.insert_tab();
        assert_eq!(buf.text(), "     x;");
        assert_eq!(buf.selection(), 4..4);
    }

    #[test]
    fn test_multibyte_columns() {
        let mut buf = EditorBuffer::new("é\nñx");
        buf.set_caret(4);
        assert_eq!(buf.cursor_position(), (2, 3));
    }
}
