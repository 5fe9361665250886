use serde::{Serialize, Deserialize};
use uuid::Uuid;

use crate::item::ItemStack;

/// Host engine game modes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum GameMode {
    Survival,
    Creative,
    Adventure,
    Spectator,
}

impl GameMode {
    /// True for the mode in which the engine suppresses the normal
    /// interact event, leaving only the arm-swing animation to observe.
    pub fn is_restricted(&self) -> bool {
        matches!(self, GameMode::Adventure)
    }
}

/// The acting entity behind every input event
///
/// A thin handle over the host engine's player object: identity, game
/// mode, the currently held item, and a pending-refresh flag standing in
/// for the engine's "re-send the displayed inventory" operation. The
/// engine integration polls the flag with [`take_refresh_request`] after
/// delivering each event.
///
/// [`take_refresh_request`]: Player::take_refresh_request
pub struct Player {
    id: Uuid,
    pub name: String,
    game_mode: GameMode,
    held_item: Option<ItemStack>,
    pending_refresh: bool,
}

impl Player {
    pub fn new(name: impl Into<String>) -> Self {
        Player {
            id: Uuid::new_v4(),
            name: name.into(),
            game_mode: GameMode::Survival,
            held_item: None,
            pending_refresh: false,
        }
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn game_mode(&self) -> GameMode {
        self.game_mode
    }

    pub fn set_game_mode(&mut self, mode: GameMode) {
        self.game_mode = mode;
    }

    pub fn held_item(&self) -> Option<&ItemStack> {
        self.held_item.as_ref()
    }

    pub fn set_held_item(&mut self, item: Option<ItemStack>) {
        self.held_item = item;
    }

    /// Asks the engine to re-send this player's displayed inventory
    pub fn request_inventory_refresh(&mut self) {
        self.pending_refresh = true;
    }

    /// Consumes the pending refresh request, if any
    pub fn take_refresh_request(&mut self) -> bool {
        std::mem::take(&mut self.pending_refresh)
    }
}
