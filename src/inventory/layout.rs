//! Border and fill layout for menu inventories
//!
//! Overwrites slots by position in the 9-wide grid so a menu reads as a
//! framed window: border panels along the edges, filler behind the rest.

use crate::item::ItemStack;
use super::inventory::{Inventory, ROW_WIDTH};

/// Fills the inventory, drawing a border around it
///
/// Slots in the leftmost or rightmost column always receive the border
/// panel when one is given. With `full` set, the top and bottom rows
/// receive it as well. Every remaining slot receives the filler panel
/// when one is given. A `None` panel leaves its slots untouched, so
/// existing contents survive.
pub fn fill_border(
    inventory: &mut Inventory,
    filler: Option<&ItemStack>,
    border: Option<&ItemStack>,
    full: bool,
) {
    let size = inventory.size();

    for i in 0..size {
        let column = i % ROW_WIDTH;

        if (column == 0 || column == ROW_WIDTH - 1) && border.is_some() {
            inventory.slots[i] = border.cloned();
        } else if full && (i < ROW_WIDTH || i + ROW_WIDTH >= size) && border.is_some() {
            inventory.slots[i] = border.cloned();
        } else if filler.is_some() {
            inventory.slots[i] = filler.cloned();
        }
    }
}

/// Fills the inventory with a full rectangular border
pub fn fill(inventory: &mut Inventory, filler: Option<&ItemStack>, border: Option<&ItemStack>) {
    fill_border(inventory, filler, border, true);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn material_at(inventory: &Inventory, index: usize) -> Option<&str> {
        inventory.item(index).map(|stack| stack.material.as_str())
    }

    #[test]
    fn test_full_border_frames_a_six_row_inventory() {
        let mut inventory = Inventory::menu("Shop", 54);
        let filler = ItemStack::new("gray_pane");
        let border = ItemStack::new("black_pane");

        fill(&mut inventory, Some(&filler), Some(&border));

        for i in 0..54 {
            let top_or_bottom_row = i < 9 || i >= 45;
            let side_column = i % 9 == 0 || i % 9 == 8;

            if top_or_bottom_row || side_column {
                assert_eq!(material_at(&inventory, i), Some("black_pane"), "slot {}", i);
            } else {
                assert_eq!(material_at(&inventory, i), Some("gray_pane"), "slot {}", i);
            }
        }
    }

    #[test]
    fn test_frame_mode_borders_only_the_side_columns() {
        let mut inventory = Inventory::menu("Shop", 54);
        let filler = ItemStack::new("gray_pane");
        let border = ItemStack::new("black_pane");

        fill_border(&mut inventory, Some(&filler), Some(&border), false);

        for i in 0..54 {
            if i % 9 == 0 || i % 9 == 8 {
                assert_eq!(material_at(&inventory, i), Some("black_pane"), "slot {}", i);
            } else {
                assert_eq!(material_at(&inventory, i), Some("gray_pane"), "slot {}", i);
            }
        }
    }

    #[test]
    fn test_missing_border_panel_leaves_filler_everywhere() {
        let mut inventory = Inventory::menu("Shop", 27);
        let filler = ItemStack::new("gray_pane");

        fill(&mut inventory, Some(&filler), None);

        for i in 0..27 {
            assert_eq!(material_at(&inventory, i), Some("gray_pane"), "slot {}", i);
        }
    }

    #[test]
    fn test_missing_filler_leaves_interior_untouched() {
        let mut inventory = Inventory::menu("Shop", 27);
        inventory.set_item(13, ItemStack::new("compass")).unwrap();
        let border = ItemStack::new("black_pane");

        fill(&mut inventory, None, Some(&border));

        assert_eq!(material_at(&inventory, 13), Some("compass"));
        assert_eq!(material_at(&inventory, 0), Some("black_pane"));
        assert!(inventory.item(12).is_none());
    }
}
