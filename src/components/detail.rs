use crate::domain::models::StorageSystem;
use crate::panel::{status_color, Icon};
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, BorderType, Borders, Paragraph, Widget},
};

/// Body of the console. Shows the last selected system, or a short hint when
/// nothing has been picked yet.
pub struct DetailView<'a> {
    pub selected: Option<&'a StorageSystem>,
    pub theme: &'a Theme,
}

impl DetailView<'_> {
    fn system_lines(&self, system: &StorageSystem) -> Vec<Line<'static>> {
        let theme = self.theme;
        let dot_style = theme.status_style(status_color(&system.status));
        let row = |label: &str, value: Span<'static>| {
            Line::from(vec![
                Span::styled(format!("{label:>8}  "), theme.detail_label),
                value,
            ])
        };
        vec![
            Line::from(""),
            row("Name", Span::styled(system.name.clone(), theme.detail_value)),
            row("ID", Span::styled(system.id.to_string(), theme.detail_value)),
            row(
                "Status",
                Span::styled(
                    format!("{} {}", Icon::StatusDot.glyph(), system.status),
                    dot_style,
                ),
            ),
        ]
    }

    fn hint_lines(&self) -> Vec<Line<'static>> {
        let theme = self.theme;
        vec![
            Line::from(""),
            Line::from(Span::styled("No storage system selected", theme.dimmed)),
            Line::from(""),
            Line::from(vec![
                Span::raw("Click an entry or press "),
                Span::styled(" Enter ", theme.key_hint),
                Span::raw(" on the highlighted one"),
            ]),
        ]
    }
}

impl Widget for DetailView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled("SELECTED SYSTEM", self.theme.panel_title),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(self.theme.border);

        let (lines, alignment) = match self.selected {
            Some(system) => (self.system_lines(system), Alignment::Left),
            None => (self.hint_lines(), Alignment::Center),
        };
        Paragraph::new(lines)
            .alignment(alignment)
            .block(block)
            .render(area, buf);
    }
}
