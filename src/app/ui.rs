use crate::app::state::{AppMode, AppState};
use crate::components::detail::DetailView;
use crate::components::status_bar::StatusBar;
use crate::panel::SystemPanel;

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    Frame,
};

pub struct AppLayout {
    pub panel: Rect,
    pub body: Rect,
    pub status: Rect,
}

pub fn get_layout(area: Rect, app_state: &AppState) -> AppLayout {
    let main = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Min(0),    // Panel + body
            Constraint::Length(1), // Status bar
        ])
        .split(area);

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(app_state.panel_width()),
            Constraint::Min(0),
        ])
        .split(main[0]);

    AppLayout {
        panel: columns[0],
        body: columns[1],
        status: main[1],
    }
}

pub fn draw(f: &mut Frame, app_state: &mut AppState) {
    if f.area().width == 0 || f.area().height == 0 {
        return;
    }

    let layout = get_layout(f.area(), app_state);

    // --- Panel ---
    if layout.panel.width > 0 && layout.panel.height > 0 {
        let AppState {
            systems,
            panel,
            theme,
            panel_config,
            mode,
            ..
        } = app_state;
        let widget = SystemPanel {
            systems,
            theme,
            title: &panel_config.title,
            section_label: &panel_config.section_label,
            search_focused: *mode == AppMode::Search,
        };
        f.render_stateful_widget(widget, layout.panel, panel);
    }

    // --- Body ---
    if layout.body.width > 0 && layout.body.height > 0 {
        let detail = DetailView {
            selected: app_state.last_selected.as_ref(),
            theme: &app_state.theme,
        };
        f.render_widget(detail, layout.body);
    }

    // --- Status bar ---
    if layout.status.width > 0 && layout.status.height > 0 {
        let status_bar = StatusBar {
            state: app_state,
            theme: &app_state.theme,
        };
        f.render_widget(status_bar, layout.status);
    }
}
