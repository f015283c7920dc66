pub mod toml_inventory;
