use super::action::Action;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// User overrides from the `[keys]` table, e.g. `toggle-panel = "ctrl+b"`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
#[serde(default)]
pub struct KeyConfig {
    pub custom: HashMap<String, String>,
}

/// Normal-mode bindings. Search mode is handled in `input` since almost every
/// key there goes to the search box.
pub struct KeyMap {
    pub global: HashMap<KeyEvent, Action>,
}

impl KeyMap {
    pub fn from_config(config: &KeyConfig) -> Self {
        let mut global = HashMap::new();

        global.insert(key(KeyCode::Char('q')), Action::Quit);
        global.insert(ctrl('c'), Action::Quit);
        global.insert(key(KeyCode::Char('[')), Action::ToggleCollapsed);
        global.insert(ctrl('b'), Action::ToggleCollapsed);
        global.insert(key(KeyCode::Char('/')), Action::FocusSearch);
        global.insert(key(KeyCode::Char('j')), Action::HighlightNext);
        global.insert(key(KeyCode::Down), Action::HighlightNext);
        global.insert(key(KeyCode::Char('k')), Action::HighlightPrev);
        global.insert(key(KeyCode::Up), Action::HighlightPrev);
        global.insert(key(KeyCode::Enter), Action::ChooseHighlighted);
        global.insert(key(KeyCode::Esc), Action::ClearSearch);
        global.insert(key(KeyCode::Char('r')), Action::ReloadInventory);

        let mut names: Vec<_> = config.custom.keys().collect();
        names.sort();
        for name in names {
            let spec = &config.custom[name];
            match (binding_action(name), parse_key_spec(spec)) {
                (Some(action), Some(event)) => {
                    global.insert(event, action);
                }
                (None, _) => tracing::warn!(binding = %name, "unknown key binding name, ignored"),
                (_, None) => tracing::warn!(binding = %name, key = %spec, "unparsable key, ignored"),
            }
        }

        Self { global }
    }

    pub fn get_action(&self, event: KeyEvent) -> Option<Action> {
        // Drop kind/state so terminals reporting extra flags still match
        let normalized = KeyEvent::new(event.code, event.modifiers);
        self.global.get(&normalized).cloned()
    }
}

fn binding_action(name: &str) -> Option<Action> {
    Some(match name {
        "quit" => Action::Quit,
        "toggle-panel" => Action::ToggleCollapsed,
        "search" => Action::FocusSearch,
        "next" => Action::HighlightNext,
        "prev" => Action::HighlightPrev,
        "choose" => Action::ChooseHighlighted,
        "clear-search" => Action::ClearSearch,
        "reload" => Action::ReloadInventory,
        _ => return None,
    })
}

/// Parses `"ctrl+b"`, `"enter"`, `"/"` and similar into a key event.
pub fn parse_key_spec(spec: &str) -> Option<KeyEvent> {
    let mut modifiers = KeyModifiers::empty();
    let mut parts: Vec<&str> = spec.split('+').collect();
    // "ctrl++" binds the plus key
    if spec.ends_with("++") {
        parts.truncate(parts.len().saturating_sub(2));
        parts.push("+");
    }
    let (last, mods) = parts.split_last()?;

    for m in mods {
        match m.trim().to_ascii_lowercase().as_str() {
            "ctrl" | "control" => modifiers.insert(KeyModifiers::CONTROL),
            "alt" => modifiers.insert(KeyModifiers::ALT),
            "shift" => modifiers.insert(KeyModifiers::SHIFT),
            _ => return None,
        }
    }

    let code = match last.to_ascii_lowercase().as_str() {
        "enter" | "return" => KeyCode::Enter,
        "esc" | "escape" => KeyCode::Esc,
        "tab" => KeyCode::Tab,
        "backspace" => KeyCode::Backspace,
        "up" => KeyCode::Up,
        "down" => KeyCode::Down,
        "left" => KeyCode::Left,
        "right" => KeyCode::Right,
        "home" => KeyCode::Home,
        "end" => KeyCode::End,
        "pageup" => KeyCode::PageUp,
        "pagedown" => KeyCode::PageDown,
        "space" => KeyCode::Char(' '),
        _ => {
            let mut chars = last.chars();
            match (chars.next(), chars.next()) {
                (Some(c), None) => KeyCode::Char(c),
                _ => return None,
            }
        }
    };

    Some(KeyEvent::new(code, modifiers))
}

fn key(code: KeyCode) -> KeyEvent {
    KeyEvent::new(code, KeyModifiers::empty())
}

fn ctrl(c: char) -> KeyEvent {
    KeyEvent::new(KeyCode::Char(c), KeyModifiers::CONTROL)
}
