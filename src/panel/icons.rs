/// Every glyph the panel draws. The set is fixed, so it is a plain enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Icon {
    StatusDot,
    Collapse,
    Expand,
    Search,
    Storage,
    Dashboard,
    Alerts,
    Security,
    Users,
    Settings,
}

impl Icon {
    #[must_use]
    pub const fn glyph(self) -> &'static str {
        match self {
            Icon::StatusDot => "●",
            Icon::Collapse => "«",
            Icon::Expand => "»",
            Icon::Search => "⌕",
            Icon::Storage => "▤",
            Icon::Dashboard => "▦",
            Icon::Alerts => "△",
            Icon::Security => "◈",
            Icon::Users => "☺",
            Icon::Settings => "⚙",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FooterAction {
    pub icon: Icon,
    pub label: &'static str,
}

// Placeholders: clicking them is logged and otherwise ignored.
pub const FOOTER_ACTIONS: [FooterAction; 5] = [
    FooterAction {
        icon: Icon::Dashboard,
        label: "Dashboard",
    },
    FooterAction {
        icon: Icon::Alerts,
        label: "Alerts",
    },
    FooterAction {
        icon: Icon::Security,
        label: "Security",
    },
    FooterAction {
        icon: Icon::Users,
        label: "Users",
    },
    FooterAction {
        icon: Icon::Settings,
        label: "Settings",
    },
];
