//! Static item catalog.

use super::types::{Item, ItemCategory};

pub const STICK: &str = "stick";
pub const KNIFE: &str = "knife";
pub const GUN: &str = "gun";
pub const APPLE: &str = "apple";
pub const PIE: &str = "pie";
pub const BASIC_ARMOR: &str = "armor_1";
pub const IRON_ARMOR: &str = "armor_2";

pub fn wooden_stick() -> Item {
    Item::new(STICK, "Wooden Stick", ItemCategory::Weapon, 5, 0, "Better than nothing.")
}

pub fn toy_knife() -> Item {
    Item::new(KNIFE, "Toy Knife", ItemCategory::Weapon, 12, 100, "A classic starting weapon.")
}

pub fn yellow_gun() -> Item {
    Item::new(GUN, "Yellow Gun", ItemCategory::Weapon, 25, 500, "Shoots pellets of justice.")
}

pub fn apple() -> Item {
    Item::new(APPLE, "Apple", ItemCategory::Heal, 20, 10, "Heals 20 HP.")
}

pub fn butterscotch_pie() -> Item {
    Item::new(PIE, "Butterscotch Pie", ItemCategory::Heal, 100, 150, "Full heal.")
}

pub fn leather_vest() -> Item {
    Item::new(BASIC_ARMOR, "Leather Vest", ItemCategory::Armor, 20, 200, "+20 Max HP")
}

pub fn iron_plate() -> Item {
    Item::new(IRON_ARMOR, "Iron Plate", ItemCategory::Armor, 50, 1000, "+50 Max HP")
}

/// Returns every catalog item in display order.
pub fn get_all_items() -> Vec<Item> {
    vec![
        wooden_stick(),
        toy_knife(),
        yellow_gun(),
        apple(),
        butterscotch_pie(),
        leather_vest(),
        iron_plate(),
    ]
}

/// Items offered by the shop (everything with a price).
pub fn shop_items() -> Vec<Item> {
    get_all_items()
        .into_iter()
        .filter(|item| item.price > 0)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_are_unique() {
        let items = get_all_items();
        let ids: HashSet<_> = items.iter().map(|i| i.id.as_str()).collect();
        assert_eq!(ids.len(), items.len());
    }

    #[test]
    fn test_shop_excludes_free_items() {
        let shop = shop_items();
        assert!(!shop.iter().any(|i| i.id == STICK));
        assert_eq!(shop.len(), get_all_items().len() - 1);
    }
}
