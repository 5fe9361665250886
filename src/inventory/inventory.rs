use serde::{Serialize, Deserialize};

use crate::item::ItemStack;
use super::error::InventoryError;

/// Slots per inventory row in the host engine's grid layout
pub const ROW_WIDTH: usize = 9;

/// What an inventory belongs to
///
/// The menu variant is the capability marker the click router queries:
/// an inventory created through [`Inventory::menu`] exists purely as a
/// clickable surface, and clicks inside it never move real items.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum InventoryKind {
    /// A menu surface created by this library, with its window title
    Menu { title: String },

    /// A player's own inventory
    Player,

    /// A world container (chest, barrel, ...)
    Container,
}

impl InventoryKind {
    pub fn is_menu(&self) -> bool {
        matches!(self, InventoryKind::Menu { .. })
    }
}

/// Slot container backing both menus and regular inventories
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Inventory {
    /// Slots that can hold item stacks (None = empty)
    pub slots: Vec<Option<ItemStack>>,

    kind: InventoryKind,
}

impl Inventory {
    /// Creates an empty container inventory with the given capacity
    pub fn new(size: usize) -> Self {
        Inventory {
            slots: vec![None; size],
            kind: InventoryKind::Container,
        }
    }

    /// Creates an empty player inventory
    pub fn player(size: usize) -> Self {
        Inventory {
            slots: vec![None; size],
            kind: InventoryKind::Player,
        }
    }

    /// Creates a menu surface carrying the GUI marker capability
    pub fn menu(title: impl Into<String>, size: usize) -> Self {
        Inventory {
            slots: vec![None; size],
            kind: InventoryKind::Menu { title: title.into() },
        }
    }

    pub fn size(&self) -> usize {
        self.slots.len()
    }

    pub fn kind(&self) -> &InventoryKind {
        &self.kind
    }

    pub fn is_menu(&self) -> bool {
        self.kind.is_menu()
    }

    /// The window title, for menu inventories
    pub fn title(&self) -> Option<&str> {
        match &self.kind {
            InventoryKind::Menu { title } => Some(title),
            _ => None,
        }
    }

    /// Gets the item in a slot (None when empty or out of range)
    pub fn item(&self, index: usize) -> Option<&ItemStack> {
        self.slots.get(index).and_then(|slot| slot.as_ref())
    }

    /// Puts an item into a slot, replacing any previous content
    pub fn set_item(&mut self, index: usize, stack: ItemStack) -> Result<(), InventoryError> {
        if index >= self.slots.len() {
            return Err(InventoryError::InvalidSlot(index));
        }

        self.slots[index] = Some(stack);
        Ok(())
    }

    /// Returns an iterator over all non-empty item stacks
    pub fn iter_items(&self) -> impl Iterator<Item = &ItemStack> {
        self.slots.iter().filter_map(|slot| slot.as_ref())
    }
}
