use crate::domain::models::StorageSystem;

/// Side effects the reducer asks the loop to perform.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    /// Hand the chosen system to the selection handler.
    Select(StorageSystem),
    LoadInventory,
}
