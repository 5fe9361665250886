use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::{Rc, Weak};

use uuid::Uuid;

use crate::item::{InteractiveItem, TagValue};

/// Namespaced tag key carrying the identifier on interactive stacks.
pub const ID_TAG: &str = "menukit:id";

/// Central registry mapping identifiers to interactive items
///
/// This is the single source of truth for which rendered stacks have
/// behavior attached. The router recognizes a clicked stack purely by
/// the identifier tag embedded at registration and looks the behavior
/// up here; the stack itself can round-trip through the engine's own
/// storage in between.
///
/// Entries hold weak references tied to the descriptor handed back by
/// [`register`](MenuRegistry::register). Dropping every strong handle
/// orphans the entry: lookups then miss, which readers treat as "not an
/// interactive item", and [`prune`](MenuRegistry::prune) reclaims the
/// slot. The table is shared on the host's single event thread, so
/// registration works through `&self` even inside a click callback.
pub struct MenuRegistry {
    entries: RefCell<HashMap<Uuid, Weak<InteractiveItem>>>,
}

impl MenuRegistry {
    /// Creates a new empty registry
    pub fn new() -> Self {
        MenuRegistry {
            entries: RefCell::new(HashMap::new()),
        }
    }

    /// Registers an interactive item under a fresh identifier
    ///
    /// Generates a random 128-bit identifier, embeds it into the item's
    /// stack under [`ID_TAG`] (leaving unrelated tags alone), and
    /// inserts the mapping. Registration consumes the builder, so the
    /// identifier is assigned exactly once. The returned handle owns
    /// the descriptor; its tagged stack is what gets placed in menus.
    pub fn register(&self, mut item: InteractiveItem) -> Rc<InteractiveItem> {
        let id = Uuid::new_v4();
        item.stack_mut().set_tag(ID_TAG, TagValue::Uuid(id));

        let item = Rc::new(item);
        self.entries
            .borrow_mut()
            .insert(id, Rc::downgrade(&item));

        item
    }

    /// Gets the interactive item registered under an identifier
    ///
    /// Returns None for unknown identifiers and for entries whose
    /// descriptor has been dropped. Neither is an error; both mean the
    /// clicked stack no longer maps to behavior.
    pub fn lookup(&self, id: Uuid) -> Option<Rc<InteractiveItem>> {
        self.entries.borrow().get(&id).and_then(Weak::upgrade)
    }

    /// Returns true if a live item is registered under the identifier
    pub fn exists(&self, id: Uuid) -> bool {
        self.lookup(id).is_some()
    }

    /// Removes entries whose descriptor has been dropped
    ///
    /// Returns how many entries were reclaimed.
    pub fn prune(&self) -> usize {
        let mut entries = self.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|_, entry| entry.strong_count() > 0);
        before - entries.len()
    }

    /// Counts live entries
    pub fn len(&self) -> usize {
        self.entries
            .borrow()
            .values()
            .filter(|entry| entry.strong_count() > 0)
            .count()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for MenuRegistry {
    fn default() -> Self {
        Self::new()
    }
}
