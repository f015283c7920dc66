use super::{
    action::Action,
    command::Command,
    state::{AppMode, AppState},
};
use crate::panel::FOOTER_ACTIONS;
use std::time::Instant;

pub fn update(state: &mut AppState, action: Action) -> Option<Command> {
    match action {
        Action::Quit => {
            state.should_quit = true;
        }
        Action::Tick => {
            if state
                .status_clear_time
                .is_some_and(|deadline| Instant::now() >= deadline)
            {
                state.status_message = None;
                state.status_clear_time = None;
            }
        }
        Action::Resize(..) => {}

        // --- Panel ---
        Action::ToggleCollapsed => {
            state.panel.toggle_collapsed();
            // The search box is gone while collapsed, so is its focus
            if state.panel.collapsed() && state.mode == AppMode::Search {
                state.mode = AppMode::Normal;
            }
            tracing::debug!(collapsed = state.panel.collapsed(), "panel toggled");
        }
        Action::FocusSearch => {
            if !state.panel.collapsed() {
                state.mode = AppMode::Search;
            }
        }
        Action::BlurSearch => {
            state.mode = AppMode::Normal;
        }
        Action::SearchInput(key) => {
            if state.mode == AppMode::Search && state.panel.apply_search_input(key) {
                clamp_highlight(state);
            }
        }
        Action::SearchPaste(text) => {
            if state.mode == AppMode::Search && state.panel.paste_search_text(&text) {
                clamp_highlight(state);
            }
        }
        // The term is hidden while collapsed, so it can't be replaced then
        Action::SetSearchTerm(text) => {
            if !state.panel.collapsed() {
                state.panel.set_search_term(text);
                clamp_highlight(state);
            }
        }
        Action::ClearSearch => {
            state.mode = AppMode::Normal;
            if !state.panel.collapsed() {
                state.panel.set_search_term("");
                clamp_highlight(state);
            }
        }
        Action::HighlightNext => {
            let len = state.visible_systems().len();
            state.panel.highlight_next(len);
        }
        Action::HighlightPrev => {
            let len = state.visible_systems().len();
            state.panel.highlight_prev(len);
        }
        Action::ChooseHighlighted => {
            if let Some(index) = state.panel.highlighted() {
                return select(state, index);
            }
        }
        Action::SelectSystem(index) => {
            return select(state, index);
        }
        Action::FooterAction(index) => {
            if let Some(action) = FOOTER_ACTIONS.get(index) {
                tracing::debug!(action = action.label, "footer action has no handler");
            }
        }

        // --- Inventory ---
        Action::ReloadInventory => {
            state.is_loading = true;
            return Some(Command::LoadInventory);
        }
        Action::SystemsLoaded(systems) => {
            state.is_loading = false;
            state.last_error = None;
            state.systems = systems;
            clamp_highlight(state);
            let message = format!("Loaded {} storage systems", state.systems.len());
            state.set_status(message);
        }
        Action::ErrorOccurred(err) => {
            state.is_loading = false;
            state.last_error = Some(err);
        }
    }
    None
}

fn clamp_highlight(state: &mut AppState) {
    let len = state.visible_systems().len();
    state.panel.clamp_highlight(len);
}

fn select(state: &mut AppState, index: usize) -> Option<Command> {
    let system = (*state.visible_systems().get(index)?).clone();
    state.panel.list_state.select(Some(index));
    state.set_status(format!("Selected {}", system.name));
    state.last_selected = Some(system.clone());
    Some(Command::Select(system))
}
