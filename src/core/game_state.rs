use super::constants::*;
use super::progression::add_xp;
use crate::auras::Aura;
use crate::items::catalog::{apple, wooden_stick};
use crate::items::Item;
use serde::{Deserialize, Serialize};

/// Top-level screen the game is on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GameMode {
    #[default]
    Roaming,
    Combat,
    Shop,
    Inventory,
    Gamepass,
}

/// All player progress. This is the aggregate that gets saved.
///
/// Field names are camelCase on disk. When adding fields, give them a
/// sensible value in `Default`; older saves pick that value up through the
/// snapshot merge in `persistence`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PlayerState {
    pub name: String,
    pub hp: u32,
    pub max_hp: u32,
    pub xp: u64,
    pub level: u32,
    pub gold: u64,
    pub current_zone: usize,
    pub drop_rate_multiplier: f64,
    pub inventory: Vec<Item>,
    pub auras: Vec<Aura>,
    pub equipped_weapon: Option<Item>,
    pub equipped_armor: Option<Item>,
}

impl Default for PlayerState {
    fn default() -> Self {
        Self {
            name: DEFAULT_PLAYER_NAME.to_string(),
            hp: STARTING_HP,
            max_hp: STARTING_HP,
            xp: 0,
            level: 1,
            gold: 0,
            current_zone: 0,
            drop_rate_multiplier: DEFAULT_DROP_RATE_MULTIPLIER,
            inventory: vec![wooden_stick(), apple()],
            auras: Vec::new(),
            equipped_weapon: Some(wooden_stick()),
            equipped_armor: None,
        }
    }
}

impl PlayerState {
    pub fn is_alive(&self) -> bool {
        self.hp > 0
    }

    /// Base damage of the equipped weapon, or bare hands.
    pub fn weapon_damage(&self) -> u32 {
        self.equipped_weapon
            .as_ref()
            .map(|w| w.value)
            .unwrap_or(BARE_HANDED_DAMAGE)
    }

    /// Rating of the equipped armor, 0 without armor.
    pub fn armor_value(&self) -> u32 {
        self.equipped_armor.as_ref().map(|a| a.value).unwrap_or(0)
    }

    /// Restores HP without exceeding max. Returns the amount actually healed.
    pub fn heal(&mut self, amount: u32) -> u32 {
        let before = self.hp;
        self.hp = self.hp.saturating_add(amount).min(self.max_hp);
        self.hp - before
    }

    pub fn take_damage(&mut self, amount: u32) {
        self.hp = self.hp.saturating_sub(amount);
    }

    pub fn inventory_is_full(&self) -> bool {
        self.inventory.len() >= MAX_INVENTORY_SLOTS
    }

    /// Inventory slots holding healing items, with their slot index.
    pub fn heal_items(&self) -> Vec<(usize, &Item)> {
        self.inventory
            .iter()
            .enumerate()
            .filter(|(_, item)| item.is_heal())
            .collect()
    }

    /// Restores the invariants a hand-edited or old snapshot may break.
    /// Returns true if anything changed.
    pub fn sanitize(&mut self, zone_count: usize) -> bool {
        let before = self.clone();

        self.level = self.level.max(1);
        self.max_hp = self.max_hp.max(1);
        // Banked XP past the current requirement pays out its level-ups now
        add_xp(self, 0);
        if self.hp == 0 {
            self.hp = self.max_hp;
        }
        if zone_count > 0 && self.current_zone >= zone_count {
            self.current_zone = zone_count - 1;
        }
        self.inventory.truncate(MAX_INVENTORY_SLOTS);
        if !self.drop_rate_multiplier.is_finite() || self.drop_rate_multiplier < 0.0 {
            self.drop_rate_multiplier = DEFAULT_DROP_RATE_MULTIPLIER;
        }

        *self != before
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog::{iron_plate, toy_knife};

    #[test]
    fn test_default_player() {
        let player = PlayerState::default();
        assert_eq!(player.name, "Ben_Usgar");
        assert_eq!((player.hp, player.max_hp), (100, 100));
        assert_eq!(player.level, 1);
        assert_eq!(player.inventory.len(), 2);
        assert_eq!(player.inventory[0].name, "Wooden Stick");
        assert_eq!(player.inventory[1].name, "Apple");
        assert_eq!(player.equipped_weapon.as_ref().map(|w| w.id.as_str()), Some("stick"));
        assert!(player.equipped_armor.is_none());
        assert_eq!(player.drop_rate_multiplier, 1.0);
    }

    #[test]
    fn test_weapon_and_armor_values() {
        let mut player = PlayerState::default();
        assert_eq!(player.weapon_damage(), 5);
        player.equipped_weapon = None;
        assert_eq!(player.weapon_damage(), BARE_HANDED_DAMAGE);
        player.equipped_weapon = Some(toy_knife());
        assert_eq!(player.weapon_damage(), 12);

        assert_eq!(player.armor_value(), 0);
        player.equipped_armor = Some(iron_plate());
        assert_eq!(player.armor_value(), 50);
    }

    #[test]
    fn test_heal_clamps() {
        let mut player = PlayerState {
            hp: 90,
            ..PlayerState::default()
        };
        assert_eq!(player.heal(20), 10);
        assert_eq!(player.hp, 100);
    }

    #[test]
    fn test_take_damage_floors_at_zero() {
        let mut player = PlayerState::default();
        player.take_damage(500);
        assert_eq!(player.hp, 0);
        assert!(!player.is_alive());
    }

    #[test]
    fn test_heal_items_keep_slot_index() {
        let player = PlayerState::default();
        let heals = player.heal_items();
        assert_eq!(heals.len(), 1);
        assert_eq!(heals[0].0, 1);
        assert_eq!(heals[0].1.name, "Apple");
    }

    #[test]
    fn test_sanitize_restores_invariants() {
        let mut player = PlayerState {
            hp: 500,
            level: 0,
            current_zone: 42,
            drop_rate_multiplier: f64::NAN,
            inventory: vec![apple(); MAX_INVENTORY_SLOTS + 3],
            ..PlayerState::default()
        };
        assert!(player.sanitize(2));
        assert_eq!(player.hp, player.max_hp);
        assert_eq!(player.level, 1);
        assert_eq!(player.current_zone, 1);
        assert_eq!(player.inventory.len(), MAX_INVENTORY_SLOTS);
        assert_eq!(player.drop_rate_multiplier, 1.0);
    }

    #[test]
    fn test_sanitize_pays_out_banked_xp() {
        let mut player = PlayerState {
            xp: 250,
            hp: 40,
            ..PlayerState::default()
        };
        assert!(player.sanitize(2));
        // 250 - 100 (level 1) - 120 (level 2) = 30
        assert_eq!(player.level, 3);
        assert_eq!(player.xp, 30);
        assert_eq!(player.max_hp, 120);
        assert_eq!(player.hp, 120);
    }

    #[test]
    fn test_sanitize_revives_knocked_out_player() {
        let mut player = PlayerState {
            hp: 0,
            ..PlayerState::default()
        };
        assert!(player.sanitize(2));
        assert_eq!(player.hp, player.max_hp);
    }

    #[test]
    fn test_sanitize_leaves_valid_state_alone() {
        let mut player = PlayerState::default();
        assert!(!player.sanitize(2));
    }

    #[test]
    fn test_serializes_camel_case() {
        let value = serde_json::to_value(PlayerState::default()).unwrap();
        assert!(value.get("maxHp").is_some());
        assert!(value.get("currentZone").is_some());
        assert!(value.get("equippedWeapon").is_some());
        assert!(value.get("dropRateMultiplier").is_some());
    }
}
