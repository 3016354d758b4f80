use serde::{Deserialize, Serialize};

/// What an item does; decides how `Item::value` is read.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum ItemCategory {
    /// `value` is the amount of HP restored.
    Heal,
    /// `value` is the weapon's base damage.
    Weapon,
    /// `value` is the armor rating; a tenth of it is subtracted from enemy hits.
    Armor,
}

impl ItemCategory {
    pub fn name(&self) -> &'static str {
        match self {
            ItemCategory::Heal => "Heal",
            ItemCategory::Weapon => "Weapon",
            ItemCategory::Armor => "Armor",
        }
    }

    pub fn is_equippable(&self) -> bool {
        matches!(self, ItemCategory::Weapon | ItemCategory::Armor)
    }
}

/// An immutable catalog item. Inventories hold clones.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Item {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub category: ItemCategory,
    pub value: u32,
    pub price: u64,
    pub description: String,
}

impl Item {
    pub fn new(
        id: &str,
        name: &str,
        category: ItemCategory,
        value: u32,
        price: u64,
        description: &str,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            value,
            price,
            description: description.to_string(),
        }
    }

    pub fn is_heal(&self) -> bool {
        self.category == ItemCategory::Heal
    }

    /// Short stat summary for list views, e.g. "+20 HP" or "12 DMG".
    pub fn stat_summary(&self) -> String {
        match self.category {
            ItemCategory::Heal => format!("+{} HP", self.value),
            ItemCategory::Weapon => format!("{} DMG", self.value),
            ItemCategory::Armor => format!("{} ARM", self.value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_serializes_uppercase() {
        let json = serde_json::to_string(&ItemCategory::Heal).unwrap();
        assert_eq!(json, "\"HEAL\"");
        let back: ItemCategory = serde_json::from_str("\"ARMOR\"").unwrap();
        assert_eq!(back, ItemCategory::Armor);
    }

    #[test]
    fn test_item_uses_type_key() {
        let item = Item::new("apple", "Apple", ItemCategory::Heal, 20, 10, "Heals 20 HP.");
        let value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["type"], "HEAL");
        assert!(value.get("category").is_none());
    }

    #[test]
    fn test_stat_summary() {
        let knife = Item::new("knife", "Toy Knife", ItemCategory::Weapon, 12, 100, "");
        assert_eq!(knife.stat_summary(), "12 DMG");
        assert!(ItemCategory::Weapon.is_equippable());
        assert!(!ItemCategory::Heal.is_equippable());
    }
}
