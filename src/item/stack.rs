use std::collections::{HashMap, HashSet};

use serde::{Serialize, Deserialize};
use uuid::Uuid;

/// Appearance id of the one material whose stacks carry a skull owner.
pub const PLAYER_HEAD: &str = "player_head";

/// A typed metadata value stored on an item under a namespaced key
///
/// The host engine persists these alongside the rest of the stack, so a
/// value written here survives the engine serializing the item into its
/// own storage and handing it back later.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum TagValue {
    /// 128-bit identifier (correlation keys)
    Uuid(Uuid),

    /// Free-form text
    Text(String),

    /// Integer payload
    Int(i64),
}

impl TagValue {
    pub fn as_uuid(&self) -> Option<Uuid> {
        match self {
            TagValue::Uuid(id) => Some(*id),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            TagValue::Text(text) => Some(text),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            TagValue::Int(value) => Some(*value),
            _ => None,
        }
    }
}

/// Display flags that hide parts of an item's tooltip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ItemFlag {
    HideEnchants,
    HideAttributes,
    HideUnbreakable,
}

/// An item as the host engine renders and stores it
///
/// This is a plain appearance/payload value. Behavior never lives here;
/// interactive items associate behavior with a stack through a tag (see
/// the registry module). All metadata accessors return empty defaults
/// rather than failing when a field was never set.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ItemStack {
    /// Appearance id understood by the host engine (e.g. "compass")
    pub material: String,

    /// How many of this item the stack holds
    pub quantity: u32,

    display_name: Option<String>,
    lore: Vec<String>,
    flags: HashSet<ItemFlag>,
    glint: bool,
    skull_owner: Option<String>,
    tags: HashMap<String, TagValue>,
}

impl ItemStack {
    /// Creates a single item of the given material
    pub fn new(material: impl Into<String>) -> Self {
        ItemStack {
            material: material.into(),
            quantity: 1,
            display_name: None,
            lore: Vec::new(),
            flags: HashSet::new(),
            glint: false,
            skull_owner: None,
            tags: HashMap::new(),
        }
    }

    pub fn display_name(&self) -> Option<&str> {
        self.display_name.as_deref()
    }

    pub fn set_display_name(&mut self, name: impl Into<String>) {
        self.display_name = Some(name.into());
    }

    pub fn lore(&self) -> &[String] {
        &self.lore
    }

    /// Replaces the lore with the given lines as-is
    pub fn set_lore(&mut self, lore: Vec<String>) {
        self.lore = lore;
    }

    /// Replaces the lore from text lines, splitting embedded newlines
    ///
    /// Each entry may contain `\n` and is expanded into one lore line per
    /// segment. An empty slice clears the lore entirely.
    pub fn set_lore_lines(&mut self, lines: &[&str]) {
        self.lore.clear();

        for line in lines {
            self.lore.extend(line.split('\n').map(String::from));
        }
    }

    pub fn add_flags(&mut self, flags: &[ItemFlag]) {
        self.flags.extend(flags.iter().copied());
    }

    pub fn remove_flags(&mut self, flags: &[ItemFlag]) {
        for flag in flags {
            self.flags.remove(flag);
        }
    }

    pub fn has_flag(&self, flag: ItemFlag) -> bool {
        self.flags.contains(&flag)
    }

    pub fn flags(&self) -> &HashSet<ItemFlag> {
        &self.flags
    }

    /// Toggles the enchant glint without showing an enchant line
    ///
    /// Enabling adds the glint plus `HideEnchants`; disabling removes
    /// both again.
    pub fn set_glow(&mut self, active: bool) {
        self.glint = active;

        if active {
            self.add_flags(&[ItemFlag::HideEnchants]);
        } else {
            self.remove_flags(&[ItemFlag::HideEnchants]);
        }
    }

    pub fn has_glow(&self) -> bool {
        self.glint
    }

    /// Sets the skull owner; ignored unless this is a player-head stack
    pub fn set_skull_owner(&mut self, owner: impl Into<String>) {
        if self.material == PLAYER_HEAD {
            self.skull_owner = Some(owner.into());
        }
    }

    pub fn skull_owner(&self) -> Option<&str> {
        self.skull_owner.as_deref()
    }

    /// Stores a tag under a namespaced key, overwriting only that key
    pub fn set_tag(&mut self, key: impl Into<String>, value: TagValue) {
        self.tags.insert(key.into(), value);
    }

    pub fn tag(&self, key: &str) -> Option<&TagValue> {
        self.tags.get(key)
    }

    pub fn has_tag(&self, key: &str) -> bool {
        self.tags.contains_key(key)
    }

    pub fn remove_tag(&mut self, key: &str) -> Option<TagValue> {
        self.tags.remove(key)
    }

    /// Reads a 128-bit identifier tag, if one is stored under the key
    pub fn tag_uuid(&self, key: &str) -> Option<Uuid> {
        self.tag(key).and_then(TagValue::as_uuid)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metadata_defaults_are_empty() {
        let stack = ItemStack::new("compass");

        assert_eq!(stack.material, "compass");
        assert_eq!(stack.quantity, 1);
        assert_eq!(stack.display_name(), None);
        assert!(stack.lore().is_empty());
        assert!(stack.flags().is_empty());
        assert!(!stack.has_glow());
        assert_eq!(stack.skull_owner(), None);
    }

    #[test]
    fn test_lore_lines_split_embedded_newlines() {
        let mut stack = ItemStack::new("paper");

        stack.set_lore_lines(&["First", "Second\nThird"]);
        assert_eq!(stack.lore(), ["First", "Second", "Third"]);

        stack.set_lore_lines(&[]);
        assert!(stack.lore().is_empty());
    }

    #[test]
    fn test_glow_couples_glint_and_hide_flag() {
        let mut stack = ItemStack::new("emerald");

        stack.set_glow(true);
        assert!(stack.has_glow());
        assert!(stack.has_flag(ItemFlag::HideEnchants));

        stack.set_glow(false);
        assert!(!stack.has_glow());
        assert!(!stack.has_flag(ItemFlag::HideEnchants));
    }

    #[test]
    fn test_skull_owner_only_applies_to_player_heads() {
        let mut head = ItemStack::new(PLAYER_HEAD);
        head.set_skull_owner("Alex");
        assert_eq!(head.skull_owner(), Some("Alex"));

        let mut stone = ItemStack::new("stone");
        stone.set_skull_owner("Alex");
        assert_eq!(stone.skull_owner(), None);
    }

    #[test]
    fn test_tag_overwrites_only_its_own_key() {
        let mut stack = ItemStack::new("compass");
        stack.set_tag("menukit:id", TagValue::Uuid(Uuid::new_v4()));
        stack.set_tag("shop:price", TagValue::Int(40));

        let id = Uuid::new_v4();
        stack.set_tag("menukit:id", TagValue::Uuid(id));

        assert_eq!(stack.tag_uuid("menukit:id"), Some(id));
        assert_eq!(stack.tag("shop:price").and_then(TagValue::as_int), Some(40));
        assert_eq!(stack.tag_uuid("shop:price"), None);
        assert!(!stack.has_tag("unrelated"));
    }

    #[test]
    fn test_identifier_tag_survives_serialization_round_trip() {
        let id = Uuid::new_v4();
        let mut stack = ItemStack::new("compass");
        stack.set_display_name("Warp");
        stack.set_tag("menukit:id", TagValue::Uuid(id));

        let stored = serde_json::to_string(&stack).unwrap();
        let restored: ItemStack = serde_json::from_str(&stored).unwrap();

        assert_eq!(restored.tag_uuid("menukit:id"), Some(id));
        assert_eq!(restored.display_name(), Some("Warp"));
        assert_eq!(restored, stack);
    }
}
