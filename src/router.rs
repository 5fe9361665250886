use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{Duration, Instant};

use log::{debug, error};
use uuid::Uuid;

use crate::events::{
    AnimationEvent, AnimationType, EntityDeathEvent, GameEvent, InteractAction, InteractEvent,
    InventoryClickEvent, ItemDropEvent,
};
use crate::registry::{MenuRegistry, ID_TAG};

/// Default anti-double-fire window for physical interacts
///
/// Several engine event kinds fire for one physical click; within this
/// window a second interact from the same player is ignored. The value
/// is tuned against engine event ordering, so it stays configurable via
/// [`ClickRouter::with_debounce_window`].
pub const DEFAULT_DEBOUNCE_WINDOW: Duration = Duration::from_millis(100);

// Flipped by the first router constructed in this process.
static ATTACHED: AtomicBool = AtomicBool::new(false);

/// The single subscriber for all menu-relevant input events
///
/// An engine integration attaches one router at plugin startup and
/// feeds every incoming event through [`dispatch`] (or the per-shape
/// handlers). The router decides whether the event is suppressed and
/// whether a registered callback fires; everything it cannot correlate
/// degrades to the engine's default handling.
///
/// # Event routing
///
/// Routing happens in phases, per event:
/// 1. Extract the identifier tag from the event's item payload
/// 2. Decide suppression (menu capability or tag presence)
/// 3. Look the identifier up in the registry
/// 4. For physical interacts, check the per-player debounce window
/// 5. Invoke the item's callbacks
///
/// Handlers run inline on the engine's delivery thread and never
/// block.
///
/// [`dispatch`]: ClickRouter::dispatch
pub struct ClickRouter {
    registry: Rc<MenuRegistry>,
    debounce: RefCell<HashMap<Uuid, Instant>>,
    window: Duration,
}

impl ClickRouter {
    /// Attaches a router to the given registry
    ///
    /// Call once during plugin startup. A second attachment in the same
    /// process is logged as a severe warning, since two routers on one
    /// event stream dispatch every callback twice; it is not fatal.
    pub fn attach(registry: Rc<MenuRegistry>) -> Self {
        Self::with_debounce_window(registry, DEFAULT_DEBOUNCE_WINDOW)
    }

    /// Attaches a router with a custom interact debounce window
    pub fn with_debounce_window(registry: Rc<MenuRegistry>, window: Duration) -> Self {
        if ATTACHED.swap(true, Ordering::Relaxed) {
            error!(
                "click router attached more than once in this process; \
                 callbacks for shared events will fire once per router"
            );
        }

        ClickRouter {
            registry,
            debounce: RefCell::new(HashMap::new()),
            window,
        }
    }

    /// Routes one event from the host stream to its handler
    pub fn dispatch(&self, event: &mut GameEvent<'_>) {
        match event {
            GameEvent::InventoryClick(event) => self.handle_inventory_click(event),
            GameEvent::Interact(event) => self.handle_interact(event),
            GameEvent::Animation(event) => self.handle_animation(event),
            GameEvent::ItemDrop(event) => self.handle_item_drop(event),
            GameEvent::EntityDeath(event) => self.handle_entity_death(event),
        }
    }

    /// Handles a click inside an open inventory window
    ///
    /// Suppresses the click whenever the inventory is a menu surface or
    /// the clicked stack carries the identifier tag, refreshes the
    /// player's displayed inventory, and dispatches if the identifier
    /// maps to a live registered item.
    pub fn handle_inventory_click(&self, event: &mut InventoryClickEvent<'_>) {
        let menu_surface = event.inventory.is_menu();
        let id = event.item().and_then(|stack| stack.tag_uuid(ID_TAG));

        if !menu_surface && id.is_none() {
            return;
        }

        event.cancel();
        event.player.request_inventory_refresh();

        let Some(id) = id else { return };
        let Some(item) = self.registry.lookup(id) else {
            debug!("inventory click matched no live interactive item: {}", id);
            return;
        };

        item.handle_click(event.player, event.click);
    }

    /// Handles a physical interaction with the held item
    ///
    /// Always suppresses the engine's default use of a tagged item.
    /// Dispatches only when the identifier maps to a live registered
    /// item and the player's debounce window has elapsed; the window is
    /// re-armed on dispatch.
    pub fn handle_interact(&self, event: &mut InteractEvent<'_>) {
        let Some(id) = event.item.and_then(|stack| stack.tag_uuid(ID_TAG)) else {
            return;
        };

        if let Some(item) = self.registry.lookup(id) {
            if self.debounce_elapsed(event.player.id()) {
                item.handle_interact(event.player, event.action);
                self.arm_debounce(event.player.id());
            } else {
                debug!("interact debounced for player {}", event.player.id());
            }
        }

        event.cancel();
    }

    /// Handles an arm-swing animation as a right-click stand-in
    ///
    /// In the restricted game mode the engine swallows the interact
    /// event, so an arm swing aimed at a real block while holding a
    /// tagged item is treated as a right click on that block. Shares
    /// the interact debounce window.
    pub fn handle_animation(&self, event: &mut AnimationEvent<'_>) {
        if event.animation != AnimationType::ArmSwing
            || event.aim_target.is_none()
            || !event.player.game_mode().is_restricted()
        {
            return;
        }

        let Some(id) = event
            .player
            .held_item()
            .and_then(|stack| stack.tag_uuid(ID_TAG))
        else {
            return;
        };

        if self.debounce_elapsed(event.player.id()) {
            if let Some(item) = self.registry.lookup(id) {
                item.handle_interact(event.player, InteractAction::RightClickBlock);
                self.arm_debounce(event.player.id());
            }
        }

        event.cancel();
    }

    /// Suppresses dropping a tagged item
    pub fn handle_item_drop(&self, event: &mut ItemDropEvent<'_>) {
        if event.item.has_tag(ID_TAG) {
            event.cancel();
        }
    }

    /// Strips tagged items out of an entity's death drops
    pub fn handle_entity_death(&self, event: &mut EntityDeathEvent<'_>) {
        event.drops.retain(|stack| !stack.has_tag(ID_TAG));
    }

    fn debounce_elapsed(&self, actor: Uuid) -> bool {
        match self.debounce.borrow().get(&actor) {
            Some(deadline) => Instant::now() >= *deadline,
            None => true,
        }
    }

    fn arm_debounce(&self, actor: Uuid) {
        let now = Instant::now();
        let mut debounce = self.debounce.borrow_mut();

        // Deadlines in the past can never suppress anything again.
        debounce.retain(|_, deadline| *deadline > now);
        debounce.insert(actor, now + self.window);
    }
}
