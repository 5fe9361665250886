use uuid::Uuid;

use crate::inventory::Inventory;
use crate::item::ItemStack;
use crate::player::Player;

/// Button classification the host engine reports for inventory clicks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickType {
    Left,
    ShiftLeft,
    Right,
    ShiftRight,
    Middle,
}

impl ClickType {
    /// Plain or shift-modified left button
    pub fn is_left_family(&self) -> bool {
        matches!(self, ClickType::Left | ClickType::ShiftLeft)
    }

    /// Plain or shift-modified right button
    pub fn is_right_family(&self) -> bool {
        matches!(self, ClickType::Right | ClickType::ShiftRight)
    }
}

/// What a physical interact event was aimed at
///
/// Interacts only distinguish air from block per button; modifier keys
/// do not exist for them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InteractAction {
    LeftClickAir,
    LeftClickBlock,
    RightClickAir,
    RightClickBlock,
}

impl InteractAction {
    pub fn is_left(&self) -> bool {
        matches!(self, InteractAction::LeftClickAir | InteractAction::LeftClickBlock)
    }

    pub fn is_right(&self) -> bool {
        !self.is_left()
    }

    /// Collapses the action into the click classification callbacks see
    pub fn click_type(&self) -> ClickType {
        if self.is_left() {
            ClickType::Left
        } else {
            ClickType::Right
        }
    }
}

/// Player animation kinds the host engine reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AnimationType {
    ArmSwing,
    OffhandSwing,
}

/// A click inside an open inventory window
pub struct InventoryClickEvent<'a> {
    pub player: &'a mut Player,
    pub inventory: &'a Inventory,
    pub slot: usize,
    pub click: ClickType,
    cancelled: bool,
}

impl<'a> InventoryClickEvent<'a> {
    pub fn new(
        player: &'a mut Player,
        inventory: &'a Inventory,
        slot: usize,
        click: ClickType,
    ) -> Self {
        InventoryClickEvent {
            player,
            inventory,
            slot,
            click,
            cancelled: false,
        }
    }

    /// The item in the clicked slot, if any
    pub fn item(&self) -> Option<&ItemStack> {
        self.inventory.item(self.slot)
    }

    /// Suppresses the engine's default handling of this click
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A physical interaction with the held item
pub struct InteractEvent<'a> {
    pub player: &'a mut Player,
    pub item: Option<&'a ItemStack>,
    pub action: InteractAction,
    cancelled: bool,
}

impl<'a> InteractEvent<'a> {
    pub fn new(player: &'a mut Player, item: Option<&'a ItemStack>, action: InteractAction) -> Self {
        InteractEvent {
            player,
            item,
            action,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A player animation, with what the player is aiming at
///
/// The held item is read from the player, matching how the engine
/// reports this event without an item payload of its own.
pub struct AnimationEvent<'a> {
    pub player: &'a mut Player,
    pub animation: AnimationType,
    /// Block id in the player's crosshair; None means aiming at air
    pub aim_target: Option<&'a str>,
    cancelled: bool,
}

impl<'a> AnimationEvent<'a> {
    pub fn new(player: &'a mut Player, animation: AnimationType, aim_target: Option<&'a str>) -> Self {
        AnimationEvent {
            player,
            animation,
            aim_target,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// A player tossing an item out of their inventory
pub struct ItemDropEvent<'a> {
    pub player: &'a mut Player,
    pub item: &'a ItemStack,
    cancelled: bool,
}

impl<'a> ItemDropEvent<'a> {
    pub fn new(player: &'a mut Player, item: &'a ItemStack) -> Self {
        ItemDropEvent {
            player,
            item,
            cancelled: false,
        }
    }

    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

/// An entity dying with a list of pending item drops
///
/// There is nothing to cancel here; handlers edit the drop list in
/// place and the engine spawns whatever remains.
pub struct EntityDeathEvent<'a> {
    pub entity: Uuid,
    pub drops: &'a mut Vec<ItemStack>,
}

impl<'a> EntityDeathEvent<'a> {
    pub fn new(entity: Uuid, drops: &'a mut Vec<ItemStack>) -> Self {
        EntityDeathEvent { entity, drops }
    }
}

/// The input-event stream a single subscriber consumes
///
/// An engine integration wraps each incoming event in the matching
/// variant and feeds it to the router's `dispatch`.
pub enum GameEvent<'a> {
    InventoryClick(InventoryClickEvent<'a>),
    Interact(InteractEvent<'a>),
    Animation(AnimationEvent<'a>),
    ItemDrop(ItemDropEvent<'a>),
    EntityDeath(EntityDeathEvent<'a>),
}
