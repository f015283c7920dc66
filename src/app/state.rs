use super::keymap::KeyMap;
use crate::config::{AppConfig, PanelConfig};
use crate::domain::models::StorageSystem;
use crate::panel::{filter_systems, PanelState};
use crate::theme::Theme;
use std::sync::Arc;
use std::time::{Duration, Instant};

pub const STATUS_TIMEOUT: Duration = Duration::from_secs(4);

#[derive(Debug, Copy, Clone, PartialEq)]
pub enum AppMode {
    Normal, // Keys go through the keymap
    Search, // Keys go to the panel's search box
}

pub struct AppState {
    pub should_quit: bool,
    pub mode: AppMode,

    // --- Inventory (owned by the host, read by the panel) ---
    pub systems: Vec<StorageSystem>,
    pub is_loading: bool,

    // --- Panel ---
    pub panel: PanelState,
    pub last_selected: Option<StorageSystem>,

    // --- Status bar ---
    pub status_message: Option<String>,
    pub status_clear_time: Option<Instant>,
    pub last_error: Option<String>,

    // --- Config ---
    pub keymap: Arc<KeyMap>,
    pub theme: Theme,
    pub panel_config: PanelConfig,
}

impl AppState {
    #[must_use]
    pub fn new(config: &AppConfig) -> Self {
        Self {
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme: Theme::from_palette_type(config.theme),
            panel_config: config.panel.clone(),
            ..Default::default()
        }
    }

    /// The systems the panel currently shows, recomputed on every call.
    #[must_use]
    pub fn visible_systems(&self) -> Vec<&StorageSystem> {
        filter_systems(&self.systems, self.panel.search_term())
    }

    pub fn set_status(&mut self, message: impl Into<String>) {
        self.status_message = Some(message.into());
        self.status_clear_time = Some(Instant::now() + STATUS_TIMEOUT);
    }

    #[must_use]
    pub fn panel_width(&self) -> u16 {
        if self.panel.collapsed() {
            self.panel_config.collapsed_width
        } else {
            self.panel_config.expanded_width
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        let config = AppConfig::default();
        Self {
            should_quit: false,
            mode: AppMode::Normal,
            systems: Vec::new(),
            is_loading: false,
            panel: PanelState::new(),
            last_selected: None,
            status_message: None,
            status_clear_time: None,
            last_error: None,
            keymap: Arc::new(KeyMap::from_config(&config.keys)),
            theme: Theme::from_palette_type(config.theme),
            panel_config: config.panel,
        }
    }
}
