use crate::domain::models::StorageSystem;

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    // --- System / Terminal ---
    Tick,
    Resize(u16, u16),
    Quit,

    // --- Panel ---
    ToggleCollapsed,             // Collapse or expand the panel
    FocusSearch,                 // Move keyboard focus into the search box
    BlurSearch,                  // Leave the search box, keeping its text
    SearchInput(crossterm::event::KeyEvent), // Key typed into the search box
    SearchPaste(String),         // Text pasted into the search box
    SetSearchTerm(String),       // Replace the search term
    ClearSearch,                 // Reset the search term to ""
    HighlightNext,               // Move the keyboard cursor down
    HighlightPrev,               // Move the keyboard cursor up
    ChooseHighlighted,           // Select the entry under the cursor
    SelectSystem(usize),         // Select by index into the filtered list
    FooterAction(usize),         // Footer placeholder clicked

    // --- Inventory ---
    ReloadInventory,
    SystemsLoaded(Vec<StorageSystem>), // Replaces the list the panel filters
    ErrorOccurred(String),
}
