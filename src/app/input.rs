use crate::app::{
    action::Action,
    state::{AppMode, AppState},
    ui,
};
use crate::panel::{hit_test, PanelHit};
use crossterm::event::{
    Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::{Position, Rect, Size};

pub fn map_event_to_action(
    event: Event,
    app_state: &AppState,
    terminal_size: Size,
) -> Option<Action> {
    match event {
        Event::Key(key) if key.kind == KeyEventKind::Release => None,
        Event::Key(key) => match app_state.mode {
            AppMode::Search => map_search_key(key),
            AppMode::Normal => app_state.keymap.get_action(key),
        },
        Event::Paste(text) if app_state.mode == AppMode::Search => Some(Action::SearchPaste(text)),
        Event::Mouse(mouse) => map_mouse(mouse, app_state, terminal_size),
        Event::Resize(w, h) => Some(Action::Resize(w, h)),
        _ => None,
    }
}

fn map_search_key(key: KeyEvent) -> Option<Action> {
    match key.code {
        KeyCode::Esc | KeyCode::Enter | KeyCode::Tab => Some(Action::BlurSearch),
        KeyCode::Down => Some(Action::HighlightNext),
        KeyCode::Up => Some(Action::HighlightPrev),
        KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => Some(Action::Quit),
        _ => Some(Action::SearchInput(key)),
    }
}

fn map_mouse(mouse: MouseEvent, app_state: &AppState, terminal_size: Size) -> Option<Action> {
    let area = Rect::new(0, 0, terminal_size.width, terminal_size.height);
    let panel_area = ui::get_layout(area, app_state).panel;
    let over_panel = panel_area.contains(Position::new(mouse.column, mouse.row));

    match mouse.kind {
        MouseEventKind::ScrollUp if over_panel => Some(Action::HighlightPrev),
        MouseEventKind::ScrollDown if over_panel => Some(Action::HighlightNext),
        MouseEventKind::Down(MouseButton::Left) => {
            let visible_len = app_state.visible_systems().len();
            match hit_test(
                panel_area,
                &app_state.panel,
                visible_len,
                mouse.column,
                mouse.row,
            ) {
                Some(PanelHit::Toggle) => Some(Action::ToggleCollapsed),
                Some(PanelHit::SearchBox) => Some(Action::FocusSearch),
                Some(PanelHit::Entry(index)) => Some(Action::SelectSystem(index)),
                Some(PanelHit::Footer(index)) => Some(Action::FooterAction(index)),
                None if app_state.mode == AppMode::Search => Some(Action::BlurSearch),
                None => None,
            }
        }
        _ => None,
    }
}
