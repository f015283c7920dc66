use crate::theme::Theme;
use crossterm::event::KeyEvent;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::Widget;
use tui_textarea::{CursorMove, TextArea};

const PLACEHOLDER: &str = "Search storage systems...";

/// Single-line text box backing the panel's search field.
pub struct SearchBox(TextArea<'static>);

impl SearchBox {
    #[must_use]
    pub fn with_text(text: &str) -> Self {
        let mut area = TextArea::new(vec![text.to_string()]);
        area.set_placeholder_text(PLACEHOLDER);
        area.set_cursor_line_style(Style::default());
        area.move_cursor(CursorMove::End);
        Self(area)
    }

    // Lines are joined so a stray newline can never reach the search term
    #[must_use]
    pub fn text(&self) -> String {
        self.0.lines().join("")
    }

    pub fn input(&mut self, key: KeyEvent) -> bool {
        self.0.input(key)
    }

    /// Inserts pasted text at the cursor. Line breaks are dropped.
    pub fn insert_str(&mut self, text: &str) -> bool {
        let single_line: String = text.chars().filter(|c| !matches!(c, '\n' | '\r')).collect();
        self.0.insert_str(single_line)
    }

    pub fn apply_theme(&mut self, theme: &Theme, focused: bool) {
        self.0.set_style(theme.search_text);
        self.0.set_placeholder_style(theme.search_placeholder);
        self.0.set_cursor_style(if focused {
            theme.search_cursor
        } else {
            theme.search_text
        });
    }
}

impl Default for SearchBox {
    fn default() -> Self {
        Self::with_text("")
    }
}

impl Clone for SearchBox {
    fn clone(&self) -> Self {
        let mut copy = Self::with_text(&self.text());
        let (row, col) = self.0.cursor();
        copy.0.move_cursor(CursorMove::Jump(
            u16::try_from(row).unwrap_or(u16::MAX),
            u16::try_from(col).unwrap_or(u16::MAX),
        ));
        copy
    }
}

impl std::fmt::Debug for SearchBox {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchBox")
            .field("lines", &self.0.lines())
            .field("cursor", &self.0.cursor())
            .finish()
    }
}

impl PartialEq for SearchBox {
    fn eq(&self, other: &Self) -> bool {
        self.0.lines() == other.0.lines() && self.0.cursor() == other.0.cursor()
    }
}

impl Widget for &SearchBox {
    fn render(self, area: Rect, buf: &mut Buffer) {
        Widget::render(&self.0, area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_typing_appends_after_prefilled_text() {
        let mut search = SearchBox::with_text("al");
        assert!(search.input(key(KeyCode::Char('p'))));
        assert_eq!(search.text(), "alp");
        assert!(search.input(key(KeyCode::Backspace)));
        assert_eq!(search.text(), "al");
    }

    #[test]
    fn test_clone_keeps_text_and_cursor() {
        let mut search = SearchBox::with_text("beta");
        search.input(key(KeyCode::Left));
        let copy = search.clone();
        assert_eq!(copy, search);
        assert_eq!(copy.text(), "beta");
    }

    #[test]
    fn test_clone_keeps_cursor_past_u16_columns() {
        let long = "x".repeat(usize::from(u16::MAX) + 10);
        let search = SearchBox::with_text(&long);
        let copy = search.clone();
        assert_eq!(copy.text(), long);
        // Saturates instead of wrapping back to column 9
        assert_eq!(copy.0.cursor(), (0, usize::from(u16::MAX)));
    }

    #[test]
    fn test_insert_str_lands_at_cursor() {
        let mut search = SearchBox::with_text("aha");
        search.input(key(KeyCode::Left));
        search.input(key(KeyCode::Left));
        assert!(search.insert_str("lp\n"));
        assert_eq!(search.text(), "alpha");
        assert_eq!(search.0.cursor(), (0, 3));
    }
}
