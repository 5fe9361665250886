// Inventory system module
//
// This module provides the inventory surface for menukit, including:
// - Generic slot container with the menu marker capability
// - Border/fill layout helper for menu windows

pub mod error;
pub mod inventory;
pub mod layout;

// Re-export main types
pub use error::InventoryError;
pub use inventory::{Inventory, InventoryKind, ROW_WIDTH};
pub use layout::{fill, fill_border};
