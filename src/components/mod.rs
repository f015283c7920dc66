pub mod detail;
pub mod status_bar;
