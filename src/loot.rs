//! Victory rewards: item drops and the aura roll.

use crate::auras::{try_roll_aura, Aura, FlavorSource};
use crate::combat::types::EnemyTemplate;
use crate::core::game_state::PlayerState;
use crate::core::progression::add_item;
use crate::items::{roll_item_drops, Item};
use rand::Rng;

/// What a single victory produced.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct LootReport {
    /// Items added to the inventory.
    pub items: Vec<Item>,
    /// Items that dropped but did not fit.
    pub discarded: Vec<Item>,
    pub aura: Option<Aura>,
}

/// Rolls the defeated enemy's drop table and the aura chance, then applies
/// both to `player`. Call exactly once per victory.
pub fn roll_victory_loot(
    player: &mut PlayerState,
    template: &EnemyTemplate,
    zone_name: &str,
    flavor: &dyn FlavorSource,
    rng: &mut impl Rng,
) -> LootReport {
    let mut report = LootReport::default();

    for item in roll_item_drops(&template.drop_table, player.drop_rate_multiplier, rng) {
        match add_item(player, item.clone()) {
            Ok(()) => report.items.push(item),
            Err(err) => {
                tracing::debug!(item = %item.name, error = %err, "drop discarded");
                report.discarded.push(item);
            }
        }
    }

    if let Some(aura) = try_roll_aura(zone_name, flavor, rng) {
        player.auras.push(aura.clone());
        report.aura = Some(aura);
    }

    report
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auras::TemplateFlavor;
    use crate::core::constants::MAX_INVENTORY_SLOTS;
    use crate::items::catalog::{apple, toy_knife};
    use crate::items::DropEntry;
    use rand::rngs::mock::StepRng;

    fn boss() -> EnemyTemplate {
        EnemyTemplate {
            id: "z1_boss".into(),
            name: "King Slime".into(),
            max_hp: 200,
            damage: 10,
            xp_reward: 100,
            gold_reward: 50,
            is_boss: true,
            color: "#166534".into(),
            drop_table: vec![DropEntry::new(1.0, toy_knife())],
        }
    }

    #[test]
    fn test_guaranteed_drop_added() {
        let mut player = PlayerState::default();
        let mut rng = StepRng::new(u64::MAX, 0);
        let report = roll_victory_loot(&mut player, &boss(), "Green Fields", &TemplateFlavor, &mut rng);
        assert_eq!(report.items, vec![toy_knife()]);
        assert!(report.aura.is_none());
        assert_eq!(player.inventory.last(), Some(&toy_knife()));
    }

    #[test]
    fn test_full_inventory_discards_drop() {
        let mut player = PlayerState {
            inventory: vec![apple(); MAX_INVENTORY_SLOTS],
            ..PlayerState::default()
        };
        let mut rng = StepRng::new(u64::MAX, 0);
        let report = roll_victory_loot(&mut player, &boss(), "Green Fields", &TemplateFlavor, &mut rng);
        assert!(report.items.is_empty());
        assert_eq!(report.discarded, vec![toy_knife()]);
        assert_eq!(player.inventory.len(), MAX_INVENTORY_SLOTS);
    }

    #[test]
    fn test_low_rolls_grant_aura() {
        let mut player = PlayerState::default();
        let mut rng = StepRng::new(0, 0);
        let report = roll_victory_loot(&mut player, &boss(), "Green Fields", &TemplateFlavor, &mut rng);
        let aura = report.aura.expect("aura should drop on a zero roll");
        assert_eq!(player.auras, vec![aura]);
    }

    #[test]
    fn test_auras_never_deduplicated() {
        let mut player = PlayerState::default();
        let mut rng = StepRng::new(0, 0);
        for _ in 0..3 {
            roll_victory_loot(&mut player, &boss(), "Green Fields", &TemplateFlavor, &mut rng);
        }
        assert_eq!(player.auras.len(), 3);
        assert!(player.auras.iter().all(|a| a.name == "Common Aura of Green"));
    }
}
