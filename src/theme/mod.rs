use crate::panel::status::StatusColor;
use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};

pub mod catppuccin;
pub mod nord;
pub mod palette;

pub use palette::{dim_color, Palette};

#[derive(Debug, Clone, PartialEq)]
pub struct Theme {
    pub border: Style,
    pub border_focus: Style,

    pub panel: Style,
    pub panel_title: Style,
    pub panel_toggle: Style,
    pub section_label: Style,

    pub search_text: Style,
    pub search_placeholder: Style,
    pub search_cursor: Style,

    pub list_item: Style,
    pub list_selected: Style,

    pub footer_icon: Style,
    pub footer_label: Style,

    pub status_green: Style,
    pub status_yellow: Style,
    pub status_red: Style,
    pub status_neutral: Style,

    pub detail_label: Style,
    pub detail_value: Style,
    pub key_hint: Style,
    pub dimmed: Style,

    pub bar: Style,
    pub bar_ready: Style,
    pub bar_info: Style,
    pub bar_warn: Style,
    pub bar_error: Style,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum PaletteType {
    #[default]
    CatppuccinMocha,
    Nord,
}

impl PaletteType {
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            PaletteType::CatppuccinMocha => "Catppuccin (Mocha)",
            PaletteType::Nord => "Nord",
        }
    }

    #[must_use]
    pub fn all() -> &'static [PaletteType] {
        &[PaletteType::CatppuccinMocha, PaletteType::Nord]
    }
}

impl Theme {
    #[must_use]
    pub fn from_palette_type(t: PaletteType) -> Self {
        match t {
            PaletteType::CatppuccinMocha => Self::from_palette(&catppuccin::CATPPUCCIN_MOCHA),
            PaletteType::Nord => Self::from_palette(&nord::NORD),
        }
    }

    #[must_use]
    pub fn from_palette(p: &Palette) -> Self {
        Self {
            border: Style::default().fg(p.surface2),
            border_focus: Style::default().fg(p.blue),

            panel: Style::default().bg(p.mantle).fg(p.text),
            panel_title: Style::default().fg(p.blue).add_modifier(Modifier::BOLD),
            panel_toggle: Style::default().fg(p.subtext1).add_modifier(Modifier::BOLD),
            section_label: Style::default().fg(p.overlay1).add_modifier(Modifier::BOLD),

            search_text: Style::default().fg(p.text),
            search_placeholder: Style::default().fg(p.overlay0).add_modifier(Modifier::ITALIC),
            search_cursor: Style::default().add_modifier(Modifier::REVERSED),

            list_item: Style::default().fg(p.text),
            list_selected: Style::default()
                .bg(dim_color(p.blue, 0.35))
                .add_modifier(Modifier::BOLD),

            footer_icon: Style::default().fg(p.mauve),
            footer_label: Style::default().fg(p.subtext0),

            status_green: Style::default().fg(p.green),
            status_yellow: Style::default().fg(p.yellow),
            status_red: Style::default().fg(p.red),
            status_neutral: Style::default().fg(p.overlay0),

            detail_label: Style::default().fg(p.subtext0),
            detail_value: Style::default().fg(p.text).add_modifier(Modifier::BOLD),
            key_hint: Style::default()
                .bg(p.surface0)
                .fg(p.blue)
                .add_modifier(Modifier::BOLD),
            dimmed: Style::default().fg(p.overlay1).add_modifier(Modifier::DIM),

            bar: Style::default().bg(p.crust).fg(p.subtext0),
            bar_ready: Style::default()
                .bg(p.green)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            bar_info: Style::default()
                .bg(p.teal)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            bar_warn: Style::default()
                .bg(p.peach)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
            bar_error: Style::default()
                .bg(p.red)
                .fg(p.crust)
                .add_modifier(Modifier::BOLD),
        }
    }

    /// Resolves a status indicator token to the style used for the dot.
    #[must_use]
    pub fn status_style(&self, color: StatusColor) -> Style {
        match color {
            StatusColor::Green => self.status_green,
            StatusColor::Yellow => self.status_yellow,
            StatusColor::Red => self.status_red,
            StatusColor::Neutral => self.status_neutral,
        }
    }
}

impl Default for Theme {
    fn default() -> Self {
        Self::from_palette_type(PaletteType::CatppuccinMocha)
    }
}
