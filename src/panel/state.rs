use super::search::SearchBox;
use crossterm::event::KeyEvent;
use ratatui::widgets::ListState;

/// The two layouts the panel can be drawn in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelLayout {
    Expanded,
    Collapsed,
}

/// Transient presentation state of the navigation panel.
///
/// Starts expanded with an empty search term and is never persisted.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PanelState {
    collapsed: bool,
    search_term: String,
    search_box: SearchBox,
    // Keyboard cursor over the filtered list; not a selection
    pub list_state: ListState,
}

impl PanelState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn collapsed(&self) -> bool {
        self.collapsed
    }

    #[must_use]
    pub fn layout(&self) -> PanelLayout {
        if self.collapsed {
            PanelLayout::Collapsed
        } else {
            PanelLayout::Expanded
        }
    }

    #[must_use]
    pub fn search_term(&self) -> &str {
        &self.search_term
    }

    #[must_use]
    pub fn search_box(&self) -> &SearchBox {
        &self.search_box
    }

    pub(crate) fn search_box_mut(&mut self) -> &mut SearchBox {
        &mut self.search_box
    }

    /// Flips between expanded and collapsed. The search term survives.
    pub fn toggle_collapsed(&mut self) {
        self.collapsed = !self.collapsed;
    }

    /// Replaces the search term as-is: no trimming, and "" shows everything.
    pub fn set_search_term(&mut self, text: impl Into<String>) {
        let text = text.into();
        if self.search_box.text() != text {
            self.search_box = SearchBox::with_text(&text);
        }
        self.search_term = text;
    }

    /// Feeds a key to the search box and takes its content as the new term.
    ///
    /// The box is not on screen while collapsed, so input is dropped then.
    /// Returns whether the term changed.
    pub fn apply_search_input(&mut self, key: KeyEvent) -> bool {
        if self.collapsed {
            return false;
        }
        self.search_box.input(key);
        let text = self.search_box.text();
        if text == self.search_term {
            return false;
        }
        self.search_term = text;
        true
    }

    /// Inserts pasted text at the search box cursor. Dropped while
    /// collapsed, like key input. Returns whether the term changed.
    pub fn paste_search_text(&mut self, text: &str) -> bool {
        if self.collapsed {
            return false;
        }
        self.search_box.insert_str(text);
        let text = self.search_box.text();
        if text == self.search_term {
            return false;
        }
        self.search_term = text;
        true
    }

    #[must_use]
    pub fn highlighted(&self) -> Option<usize> {
        self.list_state.selected()
    }

    pub fn highlight_next(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let next = match self.list_state.selected() {
            Some(i) if i + 1 < len => i + 1,
            _ => 0,
        };
        self.list_state.select(Some(next));
    }

    pub fn highlight_prev(&mut self, len: usize) {
        if len == 0 {
            self.list_state.select(None);
            return;
        }
        let prev = match self.list_state.selected() {
            Some(i) if i > 0 && i <= len => i - 1,
            _ => len - 1,
        };
        self.list_state.select(Some(prev));
    }

    /// Keeps the highlight inside a filtered list of `len` entries.
    pub fn clamp_highlight(&mut self, len: usize) {
        match self.list_state.selected() {
            Some(_) if len == 0 => self.list_state.select(None),
            Some(i) if i >= len => self.list_state.select(Some(len - 1)),
            _ => {}
        }
    }
}
