//! The storage systems navigation panel: presentation state, name filter,
//! status dot mapping and the ratatui widget that draws it.

pub mod filter;
pub mod icons;
pub mod search;
pub mod state;
pub mod status;
pub mod widget;

pub use filter::filter_systems;
pub use icons::{FooterAction, Icon, FOOTER_ACTIONS};
pub use search::SearchBox;
pub use state::{PanelLayout, PanelState};
pub use status::{status_color, StatusColor};
pub use widget::{hit_test, PanelAreas, PanelHit, SystemPanel};
