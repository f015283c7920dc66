use super::filter::filter_systems;
use super::icons::{Icon, FOOTER_ACTIONS};
use super::state::{PanelLayout, PanelState};
use super::status::status_color;
use crate::domain::models::StorageSystem;
use crate::theme::Theme;

use ratatui::{
    buffer::Buffer,
    layout::{Alignment, Constraint, Direction, Layout, Position, Rect},
    text::{Line, Span},
    widgets::{
        Block, BorderType, Borders, List, ListItem, ListState, Paragraph, StatefulWidget, Widget,
    },
};

const HEADER_HEIGHT: u16 = 1;
const SEARCH_HEIGHT: u16 = 3;
const SECTION_HEIGHT: u16 = 1;
// Separator line plus one row per action
const FOOTER_HEIGHT: u16 = FOOTER_ACTIONS.len() as u16 + 1;
const TOGGLE_WIDTH: u16 = 2;

/// Screen regions of the panel. Shared by rendering and mouse hit testing so
/// the two can never disagree.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct PanelAreas {
    pub inner: Rect,
    pub header: Rect,
    pub toggle: Rect,
    pub search: Option<Rect>,
    /// Label row above the list, expanded only.
    pub section: Option<Rect>,
    pub list: Rect,
    pub footer: Rect,
    pub footer_rows: Vec<Rect>,
}

impl PanelAreas {
    #[must_use]
    pub fn compute(area: Rect, layout: PanelLayout) -> Self {
        let inner = panel_block().inner(area);
        let expanded = layout == PanelLayout::Expanded;
        let search_height = if expanded { SEARCH_HEIGHT } else { 0 };
        let section_height = if expanded { SECTION_HEIGHT } else { 0 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(HEADER_HEIGHT),
                Constraint::Length(search_height),
                Constraint::Length(section_height),
                Constraint::Min(0),
                Constraint::Length(FOOTER_HEIGHT),
            ])
            .split(inner);

        let header = chunks[0];
        let toggle = if expanded {
            let width = TOGGLE_WIDTH.min(header.width);
            Rect {
                x: header.right().saturating_sub(width),
                y: header.y,
                width,
                height: header.height,
            }
        } else {
            header
        };

        let footer = chunks[4];
        let footer_rows = (0..FOOTER_ACTIONS.len() as u16)
            .map(|i| footer.y.saturating_add(1).saturating_add(i))
            .take_while(|y| *y < footer.bottom())
            .map(|y| Rect::new(footer.x, y, footer.width, 1))
            .collect();

        Self {
            inner,
            header,
            toggle,
            search: expanded.then_some(chunks[1]),
            section: expanded.then_some(chunks[2]),
            list: chunks[3],
            footer,
            footer_rows,
        }
    }
}

/// What a click at a given cell lands on.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelHit {
    Toggle,
    SearchBox,
    /// Index into the filtered list.
    Entry(usize),
    /// Index into `FOOTER_ACTIONS`.
    Footer(usize),
}

#[must_use]
pub fn hit_test(
    area: Rect,
    state: &PanelState,
    visible_len: usize,
    column: u16,
    row: u16,
) -> Option<PanelHit> {
    let pos = Position::new(column, row);
    if !area.contains(pos) {
        return None;
    }
    let areas = PanelAreas::compute(area, state.layout());

    if areas.toggle.contains(pos) {
        return Some(PanelHit::Toggle);
    }
    if areas.search.is_some_and(|search| search.contains(pos)) {
        return Some(PanelHit::SearchBox);
    }
    if areas.list.contains(pos) {
        // One line per entry; the list may be scrolled
        let index = state.list_state.offset() + usize::from(row - areas.list.y);
        return (index < visible_len).then_some(PanelHit::Entry(index));
    }
    areas
        .footer_rows
        .iter()
        .position(|r| r.contains(pos))
        .map(PanelHit::Footer)
}

fn panel_block() -> Block<'static> {
    Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Rounded)
}

/// The storage systems navigation panel.
///
/// The filtered list is derived from `systems` and the state's search term on
/// every render.
pub struct SystemPanel<'a> {
    pub systems: &'a [StorageSystem],
    pub theme: &'a Theme,
    /// Brand text next to the drive icon in the header.
    pub title: &'a str,
    /// Label above the list.
    pub section_label: &'a str,
    pub search_focused: bool,
}

impl SystemPanel<'_> {
    fn render_header(&self, areas: &PanelAreas, layout: PanelLayout, buf: &mut Buffer) {
        if areas.header.width == 0 || areas.header.height == 0 {
            return;
        }
        match layout {
            PanelLayout::Expanded => {
                let title_area = Rect {
                    width: areas.header.width.saturating_sub(areas.toggle.width),
                    ..areas.header
                };
                Paragraph::new(Line::from(vec![
                    Span::styled(Icon::Storage.glyph(), self.theme.panel_title),
                    Span::raw(" "),
                    Span::styled(self.title, self.theme.panel_title),
                ]))
                .render(title_area, buf);
                Paragraph::new(Span::styled(Icon::Collapse.glyph(), self.theme.panel_toggle))
                    .alignment(Alignment::Right)
                    .render(areas.toggle, buf);
            }
            PanelLayout::Collapsed => {
                // Drive icon stays as the brand mark; the whole row toggles
                Paragraph::new(Line::from(vec![
                    Span::styled(Icon::Storage.glyph(), self.theme.panel_title),
                    Span::styled(Icon::Expand.glyph(), self.theme.panel_toggle),
                ]))
                .alignment(Alignment::Center)
                .render(areas.toggle, buf);
            }
        }
    }

    fn render_search(&self, area: Rect, buf: &mut Buffer, state: &mut PanelState) {
        let border = if self.search_focused {
            self.theme.border_focus
        } else {
            self.theme.border
        };
        let block = Block::default()
            .title(Line::from(vec![
                Span::raw(" "),
                Span::styled(Icon::Search.glyph(), border),
                Span::raw(" "),
            ]))
            .borders(Borders::ALL)
            .border_type(BorderType::Rounded)
            .border_style(border);
        let inner = block.inner(area);
        block.render(area, buf);

        if inner.width > 0 && inner.height > 0 {
            let search_box = state.search_box_mut();
            search_box.apply_theme(self.theme, self.search_focused);
            Widget::render(&*search_box, inner, buf);
        }
    }

    fn render_section_label(&self, area: Rect, buf: &mut Buffer) {
        Paragraph::new(Span::styled(
            format!(" {}", self.section_label.to_uppercase()),
            self.theme.section_label,
        ))
        .render(area, buf);
    }

    fn render_list(
        &self,
        area: Rect,
        visible: &[&StorageSystem],
        layout: PanelLayout,
        buf: &mut Buffer,
        list_state: &mut ListState,
    ) {
        let items: Vec<ListItem> = visible
            .iter()
            .map(|system| {
                let dot = Span::styled(
                    Icon::StatusDot.glyph(),
                    self.theme.status_style(status_color(&system.status)),
                );
                let line = match layout {
                    PanelLayout::Expanded => Line::from(vec![
                        Span::raw(" "),
                        dot,
                        Span::raw(" "),
                        Span::styled(system.name.as_str(), self.theme.list_item),
                    ]),
                    PanelLayout::Collapsed => Line::from(dot).alignment(Alignment::Center),
                };
                ListItem::new(line)
            })
            .collect();

        let list = List::new(items).highlight_style(self.theme.list_selected);
        StatefulWidget::render(list, area, buf, list_state);
    }

    fn render_footer(&self, areas: &PanelAreas, layout: PanelLayout, buf: &mut Buffer) {
        if areas.footer.width == 0 || areas.footer.height == 0 {
            return;
        }
        Block::default()
            .borders(Borders::TOP)
            .border_style(self.theme.border)
            .render(areas.footer, buf);

        for (action, row) in FOOTER_ACTIONS.iter().zip(&areas.footer_rows) {
            let icon = Span::styled(action.icon.glyph(), self.theme.footer_icon);
            let line = match layout {
                PanelLayout::Expanded => Line::from(vec![
                    Span::raw(" "),
                    icon,
                    Span::raw(" "),
                    Span::styled(action.label, self.theme.footer_label),
                ]),
                PanelLayout::Collapsed => Line::from(icon).alignment(Alignment::Center),
            };
            Paragraph::new(line).render(*row, buf);
        }
    }
}

impl StatefulWidget for SystemPanel<'_> {
    type State = PanelState;

    fn render(self, area: Rect, buf: &mut Buffer, state: &mut PanelState) {
        if area.width == 0 || area.height == 0 {
            return;
        }
        let layout = state.layout();
        let areas = PanelAreas::compute(area, layout);

        panel_block()
            .border_style(self.theme.border)
            .style(self.theme.panel)
            .render(area, buf);

        self.render_header(&areas, layout, buf);

        if let Some(search) = areas.search {
            if search.width > 0 && search.height > 0 {
                self.render_search(search, buf, state);
            }
        }

        if let Some(section) = areas.section {
            if section.width > 0 && section.height > 0 {
                self.render_section_label(section, buf);
            }
        }

        let visible = filter_systems(self.systems, state.search_term());
        self.render_list(areas.list, &visible, layout, buf, &mut state.list_state);

        self.render_footer(&areas, layout, buf);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::models::HealthStatus;
    use ratatui::{backend::TestBackend, Terminal};

    const TITLE: &str = "Storage Admin";
    const SECTION: &str = "Storage Systems";

    fn alpha_beta() -> Vec<StorageSystem> {
        vec![
            StorageSystem::new("1", "Alpha", HealthStatus::Healthy),
            StorageSystem::new("2", "Beta", HealthStatus::Critical),
        ]
    }

    fn render(systems: &[StorageSystem], state: &mut PanelState, width: u16, height: u16) -> Buffer {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        let theme = Theme::default();
        terminal
            .draw(|f| {
                let panel = SystemPanel {
                    systems,
                    theme: &theme,
                    title: TITLE,
                    section_label: SECTION,
                    search_focused: false,
                };
                f.render_stateful_widget(panel, f.area(), state);
            })
            .unwrap();
        terminal.backend().buffer().clone()
    }

    fn text_in(buf: &Buffer, area: Rect) -> String {
        let mut out = String::new();
        for y in area.top()..area.bottom() {
            for x in area.left()..area.right() {
                out.push_str(buf[(x, y)].symbol());
            }
            out.push('\n');
        }
        out
    }

    fn full_text(buf: &Buffer) -> String {
        text_in(buf, buf.area)
    }

    #[test]
    fn test_expanded_shows_labels() {
        let systems = alpha_beta();
        let mut state = PanelState::new();
        let buf = render(&systems, &mut state, 30, 20);
        let text = full_text(&buf);

        assert!(text.contains(TITLE));
        assert!(text.contains(Icon::Storage.glyph()));
        assert!(text.contains("Alpha"));
        assert!(text.contains("Beta"));
        assert!(text.contains("Search storage systems..."));

        let areas = PanelAreas::compute(buf.area, state.layout());
        let section = areas.section.expect("section label row");
        assert!(text_in(&buf, section).contains("STORAGE SYSTEMS"));
        assert_eq!(section.bottom(), areas.list.y);
        for action in FOOTER_ACTIONS {
            assert!(text.contains(action.label), "missing {}", action.label);
        }
    }

    #[test]
    fn test_collapsed_shows_only_icons() {
        let systems = alpha_beta();
        let mut state = PanelState::new();
        state.toggle_collapsed();
        let buf = render(&systems, &mut state, 5, 20);
        let text = full_text(&buf);

        assert!(!text.contains("Storage"));
        assert!(!text.contains("STORAGE"));
        assert!(!text.contains("Alpha"));
        assert!(!text.contains("Search"));
        assert!(text.contains(Icon::Storage.glyph()));
        assert!(!text.contains("Dashboard"));
        assert!(text.contains(Icon::Expand.glyph()));
        assert_eq!(text.matches(Icon::StatusDot.glyph()).count(), 2);
        for action in FOOTER_ACTIONS {
            assert!(text.contains(action.icon.glyph()));
        }
    }

    #[test]
    fn test_collapsed_wide_area_still_hides_text() {
        let systems = alpha_beta();
        let mut state = PanelState::new();
        state.toggle_collapsed();
        let buf = render(&systems, &mut state, 40, 20);
        let text = full_text(&buf);
        assert!(PanelAreas::compute(buf.area, state.layout()).section.is_none());
        assert!(!text.contains(TITLE));
        assert!(!text.to_uppercase().contains("STORAGE SYSTEMS"));
        assert!(!text.contains("Beta"));
        assert!(!text.contains("Settings"));
    }

    #[test]
    fn test_filtered_rendering() {
        let systems = alpha_beta();
        let mut state = PanelState::new();
        state.set_search_term("alp");
        let buf = render(&systems, &mut state, 30, 20);
        let areas = PanelAreas::compute(buf.area, state.layout());
        let list = text_in(&buf, areas.list);

        assert!(list.contains("Alpha"));
        assert!(!list.contains("Beta"));
    }

    #[test]
    fn test_no_match_renders_empty_list() {
        let systems = alpha_beta();
        let mut state = PanelState::new();
        state.set_search_term("zzz");
        let buf = render(&systems, &mut state, 30, 20);
        let areas = PanelAreas::compute(buf.area, state.layout());
        assert_eq!(text_in(&buf, areas.list).trim(), "");
    }

    #[test]
    fn test_empty_inventory_renders() {
        let mut state = PanelState::new();
        let buf = render(&[], &mut state, 30, 20);
        assert!(full_text(&buf).contains(TITLE));
        assert!(!full_text(&buf).contains(Icon::StatusDot.glyph()));
    }

    #[test]
    fn test_unknown_status_uses_neutral_dot() {
        let systems = vec![StorageSystem::new(
            "9",
            "Mystery",
            HealthStatus::parse("smoldering"),
        )];
        let mut state = PanelState::new();
        let buf = render(&systems, &mut state, 30, 20);
        let areas = PanelAreas::compute(buf.area, state.layout());
        let theme = Theme::default();

        let y = areas.list.y;
        let dot = (areas.list.left()..areas.list.right())
            .map(|x| &buf[(x, y)])
            .find(|cell| cell.symbol() == Icon::StatusDot.glyph())
            .expect("status dot rendered");
        assert_eq!(Some(dot.fg), theme.status_neutral.fg);
    }

    #[test]
    fn test_search_restored_after_collapse_round_trip() {
        let systems = vec![
            StorageSystem::new("1", "Alpha", HealthStatus::Healthy),
            StorageSystem::new("2", "Beta", HealthStatus::Critical),
            StorageSystem::new("3", "Core", HealthStatus::Warning),
        ];
        let mut state = PanelState::new();
        state.set_search_term("a");

        state.toggle_collapsed();
        let collapsed = render(&systems, &mut state, 5, 20);
        let collapsed_areas = PanelAreas::compute(collapsed.area, state.layout());
        // Still filtered while hidden: Core has no "a"
        assert_eq!(
            text_in(&collapsed, collapsed_areas.list)
                .matches(Icon::StatusDot.glyph())
                .count(),
            2
        );

        state.toggle_collapsed();
        let buf = render(&systems, &mut state, 30, 20);
        let areas = PanelAreas::compute(buf.area, state.layout());
        let search = areas.search.expect("search box is back");
        let search_text = text_in(&buf, search);
        assert!(search_text.contains('a'));
        assert!(!search_text.contains("Search storage systems..."));

        let list = text_in(&buf, areas.list);
        assert!(list.contains("Alpha"));
        assert!(list.contains("Beta"));
        assert!(!list.contains("Core"));
    }

    #[test]
    fn test_hit_test_expanded() {
        let area = Rect::new(0, 0, 30, 20);
        let mut state = PanelState::new();
        state.set_search_term("a");
        let areas = PanelAreas::compute(area, state.layout());

        assert_eq!(
            hit_test(area, &state, 2, areas.toggle.x, areas.toggle.y),
            Some(PanelHit::Toggle)
        );
        let search = areas.search.unwrap();
        assert_eq!(
            hit_test(area, &state, 2, search.x + 2, search.y + 1),
            Some(PanelHit::SearchBox)
        );
        assert_eq!(
            hit_test(area, &state, 2, areas.list.x + 3, areas.list.y),
            Some(PanelHit::Entry(0))
        );
        assert_eq!(
            hit_test(area, &state, 2, areas.list.x + 3, areas.list.y + 1),
            Some(PanelHit::Entry(1))
        );
        assert_eq!(
            hit_test(area, &state, 2, areas.list.x + 3, areas.list.y + 2),
            None
        );
        let settings = areas.footer_rows[4];
        assert_eq!(
            hit_test(area, &state, 2, settings.x + 1, settings.y),
            Some(PanelHit::Footer(4))
        );
        // Title text is not the toggle
        assert_eq!(hit_test(area, &state, 2, areas.header.x, areas.header.y), None);
        assert_eq!(hit_test(area, &state, 2, 40, 3), None);
    }

    #[test]
    fn test_hit_test_collapsed() {
        let area = Rect::new(0, 0, 5, 20);
        let mut state = PanelState::new();
        state.toggle_collapsed();
        let areas = PanelAreas::compute(area, state.layout());

        assert!(areas.search.is_none());
        assert_eq!(
            hit_test(area, &state, 2, areas.header.x, areas.header.y),
            Some(PanelHit::Toggle)
        );
        assert_eq!(
            hit_test(area, &state, 2, areas.list.x + 1, areas.list.y + 1),
            Some(PanelHit::Entry(1))
        );
        assert_eq!(
            hit_test(area, &state, 2, areas.footer_rows[0].x, areas.footer_rows[0].y),
            Some(PanelHit::Footer(0))
        );
    }

    #[test]
    fn test_hit_test_follows_scroll_offset() {
        let systems: Vec<StorageSystem> = (0..40)
            .map(|i| StorageSystem::new(i as u64, format!("array-{i:02}"), HealthStatus::Healthy))
            .collect();
        let mut state = PanelState::new();
        state.list_state.select(Some(35));
        let buf = render(&systems, &mut state, 30, 20);
        assert!(state.list_state.offset() > 0);

        let areas = PanelAreas::compute(buf.area, state.layout());
        let hit = hit_test(buf.area, &state, systems.len(), areas.list.x + 3, areas.list.y);
        assert_eq!(hit, Some(PanelHit::Entry(state.list_state.offset())));
        let text = text_in(&buf, Rect { height: 1, ..areas.list });
        assert!(text.contains(&systems[state.list_state.offset()].name));
    }

    #[test]
    fn test_tiny_areas_do_not_panic() {
        let systems = alpha_beta();
        for collapsed in [false, true] {
            let mut state = PanelState::new();
            state.set_search_term("a");
            if collapsed {
                state.toggle_collapsed();
            }
            for width in 0..24 {
                for height in 0..24 {
                    render(&systems, &mut state, width, height);
                    let area = Rect::new(0, 0, width, height);
                    for x in 0..width {
                        for y in 0..height {
                            let _ = hit_test(area, &state, systems.len(), x, y);
                        }
                    }
                }
            }
        }
    }
}
