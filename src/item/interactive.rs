use uuid::Uuid;

use crate::events::{ClickType, InteractAction};
use crate::player::Player;
use crate::registry::ID_TAG;
use super::stack::ItemStack;

/// Callback receiving the acting player and the click classification
pub type ClickCallback = Box<dyn Fn(&mut Player, ClickType)>;

/// Callback receiving only the acting player
pub type InteractCallback = Box<dyn Fn(&mut Player)>;

/// A menu item with behavior attached
///
/// Pairs a plain [`ItemStack`] appearance with the record the router
/// needs: an advisory display slot and up to three callbacks. The two
/// halves stay associated through the identifier tag the registry embeds
/// into the stack, never through the stack itself.
///
/// Build one fluently, then hand it to
/// [`MenuRegistry::register`](crate::registry::MenuRegistry::register):
///
/// ```
/// use menukit::{InteractiveItem, MenuRegistry};
///
/// let registry = MenuRegistry::new();
/// let item = registry.register(
///     InteractiveItem::with_slot("compass", 13)
///         .display_name("Spawn")
///         .on_left_click(|player| println!("{} warps home", player.name)),
/// );
/// assert!(item.id().is_some());
/// ```
pub struct InteractiveItem {
    stack: ItemStack,
    slot: Option<usize>,
    click_callback: Option<ClickCallback>,
    left_click_callback: Option<InteractCallback>,
    right_click_callback: Option<InteractCallback>,
}

impl InteractiveItem {
    /// Creates an interactive item of the given material, with no slot
    pub fn new(material: impl Into<String>) -> Self {
        Self::from_stack(ItemStack::new(material))
    }

    /// Creates an interactive item with an advisory display slot
    pub fn with_slot(material: impl Into<String>, slot: usize) -> Self {
        Self::new(material).slot(slot)
    }

    /// Wraps an existing stack, keeping its appearance and metadata
    pub fn from_stack(stack: ItemStack) -> Self {
        InteractiveItem {
            stack,
            slot: None,
            click_callback: None,
            left_click_callback: None,
            right_click_callback: None,
        }
    }

    /// Sets the advisory display slot
    ///
    /// Purely a hint for the plugin placing the item; nothing checks it
    /// against where the stack actually ends up.
    pub fn slot(mut self, slot: usize) -> Self {
        self.slot = Some(slot);
        self
    }

    pub fn display_name(mut self, name: impl Into<String>) -> Self {
        self.stack.set_display_name(name);
        self
    }

    pub fn lore(mut self, lines: &[&str]) -> Self {
        self.stack.set_lore_lines(lines);
        self
    }

    /// Attaches the generic click callback
    ///
    /// Fires after any directional callback, for every click, and
    /// receives the click classification.
    pub fn on_click(mut self, callback: impl Fn(&mut Player, ClickType) + 'static) -> Self {
        self.click_callback = Some(Box::new(callback));
        self
    }

    pub fn on_left_click(mut self, callback: impl Fn(&mut Player) + 'static) -> Self {
        self.left_click_callback = Some(Box::new(callback));
        self
    }

    pub fn on_right_click(mut self, callback: impl Fn(&mut Player) + 'static) -> Self {
        self.right_click_callback = Some(Box::new(callback));
        self
    }

    /// The renderable stack; tagged with the identifier once registered
    pub fn stack(&self) -> &ItemStack {
        &self.stack
    }

    /// Mutable access to the stack for cosmetic tweaks before placement
    pub fn stack_mut(&mut self) -> &mut ItemStack {
        &mut self.stack
    }

    pub fn display_slot(&self) -> Option<usize> {
        self.slot
    }

    /// The registered identifier, read back from the embedded tag
    pub fn id(&self) -> Option<Uuid> {
        self.stack.tag_uuid(ID_TAG)
    }

    /// Routes an inventory click to the attached callbacks
    ///
    /// Left-family clicks fire the left callback, right-family clicks
    /// the right one; the generic callback fires afterwards regardless
    /// of direction.
    pub fn handle_click(&self, player: &mut Player, click: ClickType) {
        if click.is_left_family() {
            if let Some(callback) = &self.left_click_callback {
                callback(player);
            }
        } else if click.is_right_family() {
            if let Some(callback) = &self.right_click_callback {
                callback(player);
            }
        }

        if let Some(callback) = &self.click_callback {
            callback(player, click);
        }
    }

    /// Routes a physical interact, collapsing air/block to left/right
    pub fn handle_interact(&self, player: &mut Player, action: InteractAction) {
        if action.is_left() {
            if let Some(callback) = &self.left_click_callback {
                callback(player);
            }
        } else if let Some(callback) = &self.right_click_callback {
            callback(player);
        }

        if let Some(callback) = &self.click_callback {
            callback(player, action.click_type());
        }
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;

    fn recording_item(calls: &Rc<RefCell<Vec<String>>>) -> InteractiveItem {
        let left_log = Rc::clone(calls);
        let right_log = Rc::clone(calls);
        let click_log = Rc::clone(calls);

        InteractiveItem::new("compass")
            .on_left_click(move |_| left_log.borrow_mut().push("left".to_string()))
            .on_right_click(move |_| right_log.borrow_mut().push("right".to_string()))
            .on_click(move |_, click| click_log.borrow_mut().push(format!("generic:{:?}", click)))
    }

    #[test]
    fn test_left_click_fires_left_then_generic() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let item = recording_item(&calls);
        let mut player = Player::new("Alex");

        item.handle_click(&mut player, ClickType::Left);

        assert_eq!(*calls.borrow(), ["left", "generic:Left"]);
    }

    #[test]
    fn test_shift_clicks_follow_their_family() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let item = recording_item(&calls);
        let mut player = Player::new("Alex");

        item.handle_click(&mut player, ClickType::ShiftRight);

        assert_eq!(*calls.borrow(), ["right", "generic:ShiftRight"]);
    }

    #[test]
    fn test_middle_click_fires_only_the_generic_callback() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let item = recording_item(&calls);
        let mut player = Player::new("Alex");

        item.handle_click(&mut player, ClickType::Middle);

        assert_eq!(*calls.borrow(), ["generic:Middle"]);
    }

    #[test]
    fn test_interact_collapses_air_and_block_to_a_direction() {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let item = recording_item(&calls);
        let mut player = Player::new("Alex");

        item.handle_interact(&mut player, InteractAction::LeftClickAir);
        item.handle_interact(&mut player, InteractAction::RightClickBlock);

        assert_eq!(
            *calls.borrow(),
            ["left", "generic:Left", "right", "generic:Right"]
        );
    }

    #[test]
    fn test_missing_callbacks_are_skipped() {
        let mut player = Player::new("Alex");
        let item = InteractiveItem::new("compass");

        item.handle_click(&mut player, ClickType::Left);
        item.handle_interact(&mut player, InteractAction::RightClickAir);
    }

    #[test]
    fn test_builder_sets_appearance_and_slot() {
        let item = InteractiveItem::with_slot("compass", 13)
            .display_name("Spawn")
            .lore(&["Warp home\nInstantly"]);

        assert_eq!(item.stack().material, "compass");
        assert_eq!(item.stack().display_name(), Some("Spawn"));
        assert_eq!(item.stack().lore(), ["Warp home", "Instantly"]);
        assert_eq!(item.display_slot(), Some(13));
        assert!(item.id().is_none());
    }
}
