use crate::app::state::{AppMode, AppState};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

pub struct KeyHint {
    pub key: &'static str,
    pub desc: &'static str,
}

const fn hint(key: &'static str, desc: &'static str) -> KeyHint {
    KeyHint { key, desc }
}

/// One-line bar under the console: status segment, filter badge, counts and
/// as many key hints as fit.
pub struct StatusBar<'a> {
    pub state: &'a AppState,
    pub theme: &'a Theme,
}

impl StatusBar<'_> {
    fn hints(&self) -> Vec<KeyHint> {
        match self.state.mode {
            AppMode::Search => vec![
                hint("Enter/Esc", "done"),
                hint("↑/↓", "move"),
                hint("ctrl+c", "quit"),
            ],
            AppMode::Normal if self.state.panel.collapsed() => vec![
                hint("[", "expand"),
                hint("j/k", "move"),
                hint("Enter", "select"),
                hint("q", "quit"),
            ],
            AppMode::Normal => vec![
                hint("[", "collapse"),
                hint("/", "search"),
                hint("j/k", "move"),
                hint("Enter", "select"),
                hint("r", "reload"),
                hint("q", "quit"),
            ],
        }
    }
}

impl Widget for StatusBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let theme = self.theme;
        let state = self.state;

        let status_span = if let Some(err) = &state.last_error {
            Span::styled(format!("  ERROR: {err}  "), theme.bar_error)
        } else if state.is_loading {
            Span::styled("  LOADING  ", theme.bar_warn)
        } else if let Some(msg) = &state.status_message {
            Span::styled(format!("  {msg}  "), theme.bar_info)
        } else {
            Span::styled("  READY  ", theme.bar_ready)
        };

        let mut spans = vec![status_span, Span::raw(" ")];

        let term = state.panel.search_term();
        if !term.is_empty() {
            spans.push(Span::styled(format!(" FILTER: {term} "), theme.key_hint));
            spans.push(Span::raw(" "));
        }
        spans.push(Span::styled(
            format!(
                "{}/{} systems",
                state.visible_systems().len(),
                state.systems.len()
            ),
            theme.bar,
        ));
        spans.push(Span::raw("   "));

        let available_width = usize::from(area.width.saturating_sub(2));
        let mut current_width: usize = spans.iter().map(Span::width).sum();

        for item in self.hints() {
            let key_str = format!(" {} ", item.key);
            let desc_str = format!(" {} ", item.desc);
            let item_width = Span::raw(key_str.as_str()).width() + desc_str.len() + 1;
            if current_width + item_width > available_width {
                break;
            }
            spans.push(Span::styled(key_str, theme.key_hint));
            spans.push(Span::styled(desc_str, theme.bar));
            spans.push(Span::raw(" "));
            current_width += item_width;
        }

        Paragraph::new(Line::from(spans))
            .style(theme.bar)
            .render(area, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::action::Action;
    use crate::app::reducer::update;
    use crate::domain::models::{HealthStatus, StorageSystem};

    fn render(state: &AppState, width: u16) -> String {
        let area = Rect::new(0, 0, width, 1);
        let mut buf = Buffer::empty(area);
        StatusBar {
            state,
            theme: &state.theme,
        }
        .render(area, &mut buf);
        (0..width).map(|x| buf[(x, 0)].symbol()).collect()
    }

    #[test]
    fn test_ready_with_counts_and_filter() {
        let mut state = AppState::default();
        state.systems = vec![
            StorageSystem::new("1", "Alpha", HealthStatus::Healthy),
            StorageSystem::new("2", "Beta", HealthStatus::Critical),
        ];
        let text = render(&state, 120);
        assert!(text.contains("READY"));
        assert!(text.contains("2/2 systems"));
        assert!(text.contains("search"));

        update(&mut state, Action::SetSearchTerm("alp".to_string()));
        let text = render(&state, 120);
        assert!(text.contains("FILTER: alp"));
        assert!(text.contains("1/2 systems"));
    }

    #[test]
    fn test_error_wins_over_status() {
        let mut state = AppState::default();
        state.set_status("Loaded 0 storage systems");
        state.last_error = Some("inventory.toml: bad".to_string());
        let text = render(&state, 120);
        assert!(text.contains("ERROR: inventory.toml: bad"));
        assert!(!text.contains("Loaded"));
    }

    #[test]
    fn test_narrow_bar_drops_hints() {
        let state = AppState::default();
        let text = render(&state, 20);
        assert!(text.contains("READY"));
        assert!(!text.contains("quit"));
    }
}
