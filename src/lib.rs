//! Inventory-menu toolkit for game server plugins
//!
//! menukit turns virtual inventories into clickable menus. A plugin
//! builds [`InteractiveItem`]s with callbacks, registers them in a
//! [`MenuRegistry`] (which embeds an identifier tag into each rendered
//! stack), and places the tagged stacks into inventories. A single
//! [`ClickRouter`], attached at startup, consumes the host engine's
//! input events, correlates clicked stacks back to their registered
//! behavior through the embedded tag, and fires the callbacks.
//!
//! The host engine stays external: it owns the event loop, renders the
//! inventories, and round-trips item stacks through its own storage.
//! Everything the router cannot correlate degrades to the engine's
//! default handling.
//!
//! ```
//! use std::rc::Rc;
//! use menukit::{
//!     ClickRouter, ClickType, InteractiveItem, Inventory, InventoryClickEvent, MenuRegistry,
//!     Player,
//! };
//!
//! let registry = Rc::new(MenuRegistry::new());
//! let router = ClickRouter::attach(Rc::clone(&registry));
//!
//! let mut menu = Inventory::menu("Warp", 27);
//! let compass = registry.register(
//!     InteractiveItem::with_slot("compass", 13)
//!         .display_name("Spawn")
//!         .on_left_click(|player| println!("{} warps home", player.name)),
//! );
//! menu.slots[13] = Some(compass.stack().clone());
//!
//! // The engine integration forwards its input events:
//! let mut player = Player::new("Alex");
//! let mut event = InventoryClickEvent::new(&mut player, &menu, 13, ClickType::Left);
//! router.handle_inventory_click(&mut event);
//! assert!(event.is_cancelled());
//! ```

pub mod events;
pub mod inventory;
pub mod item;
pub mod player;
pub mod registry;
pub mod router;

pub use events::{
    AnimationEvent, AnimationType, ClickType, EntityDeathEvent, GameEvent, InteractAction,
    InteractEvent, InventoryClickEvent, ItemDropEvent,
};
pub use inventory::{fill, fill_border, Inventory, InventoryError, InventoryKind, ROW_WIDTH};
pub use item::{InteractiveItem, ItemFlag, ItemStack, TagValue};
pub use player::{GameMode, Player};
pub use registry::{MenuRegistry, ID_TAG};
pub use router::{ClickRouter, DEFAULT_DEBOUNCE_WINDOW};
