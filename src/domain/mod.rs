pub mod inventory;
pub mod models;
pub mod selection;
