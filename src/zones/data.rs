//! Zone definitions and their enemy rosters.

use crate::combat::types::EnemyTemplate;
use crate::items::catalog::{apple, butterscotch_pie, toy_knife, yellow_gun};
use crate::items::DropEntry;

/// A zone in the linear zone chain.
#[derive(Debug, Clone, PartialEq)]
pub struct Zone {
    pub id: usize,
    pub name: &'static str,
    /// Total aura power needed to travel here from the previous zone.
    pub required_total_power: f64,
    /// Distinct aura names needed to travel here from the previous zone.
    pub required_unique_auras: usize,
    pub enemies: Vec<EnemyTemplate>,
    pub boss: EnemyTemplate,
    /// Hex color for the zone's environment.
    pub environment_color: &'static str,
}

#[allow(clippy::too_many_arguments)]
fn enemy(
    id: &str,
    name: &str,
    hp: u32,
    damage: u32,
    xp_reward: u64,
    gold_reward: u64,
    is_boss: bool,
    color: &str,
    drop_table: Vec<DropEntry>,
) -> EnemyTemplate {
    EnemyTemplate {
        id: id.to_string(),
        name: name.to_string(),
        max_hp: hp,
        damage,
        xp_reward,
        gold_reward,
        is_boss,
        color: color.to_string(),
        drop_table,
    }
}

/// Returns all zones in travel order. Index equals `Zone::id`.
pub fn get_all_zones() -> Vec<Zone> {
    vec![
        Zone {
            id: 0,
            name: "Green Fields",
            required_total_power: 0.0,
            required_unique_auras: 0,
            enemies: vec![
                enemy(
                    "slime",
                    "Green Slime",
                    30,
                    3,
                    10,
                    5,
                    false,
                    "#4ade80",
                    vec![DropEntry::new(0.3, apple())],
                ),
                enemy(
                    "wolf",
                    "Block Wolf",
                    50,
                    5,
                    15,
                    8,
                    false,
                    "#94a3b8",
                    vec![DropEntry::new(0.1, apple())],
                ),
            ],
            boss: enemy(
                "z1_boss",
                "King Slime",
                200,
                10,
                100,
                50,
                true,
                "#166534",
                vec![DropEntry::new(1.0, toy_knife())],
            ),
            environment_color: "#86efac",
        },
        Zone {
            id: 1,
            name: "Dusty Dunes",
            required_total_power: 100.0,
            required_unique_auras: 3,
            enemies: vec![
                enemy(
                    "dummy",
                    "Mad Dummy",
                    100,
                    8,
                    30,
                    15,
                    false,
                    "#fca5a5",
                    vec![DropEntry::new(0.2, apple())],
                ),
                enemy(
                    "guard",
                    "Royal Guard",
                    150,
                    12,
                    45,
                    25,
                    false,
                    "#fde047",
                    vec![DropEntry::new(0.05, butterscotch_pie())],
                ),
            ],
            boss: enemy(
                "z2_boss",
                "Undying Hero",
                500,
                20,
                300,
                200,
                true,
                "#2563eb",
                vec![DropEntry::new(1.0, yellow_gun())],
            ),
            environment_color: "#fdba74",
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_match_indices() {
        for (index, zone) in get_all_zones().iter().enumerate() {
            assert_eq!(zone.id, index);
        }
    }

    #[test]
    fn test_first_zone_is_open() {
        let zones = get_all_zones();
        let zone = &zones[0];
        assert_eq!(zone.required_total_power, 0.0);
        assert_eq!(zone.required_unique_auras, 0);
    }

    #[test]
    fn test_second_zone_requirements() {
        let zones = get_all_zones();
        let zone = &zones[1];
        assert_eq!(zone.name, "Dusty Dunes");
        assert_eq!(zone.required_total_power, 100.0);
        assert_eq!(zone.required_unique_auras, 3);
    }

    #[test]
    fn test_green_fields_roster() {
        let zones = get_all_zones();
        let slime = &zones[0].enemies[0];
        assert_eq!(slime.name, "Green Slime");
        assert_eq!((slime.max_hp, slime.damage), (30, 3));
        assert_eq!((slime.xp_reward, slime.gold_reward), (10, 5));
        assert_eq!(slime.drop_table[0].chance, 0.3);
        assert_eq!(zones[0].boss.name, "King Slime");
        assert_eq!(zones[1].enemies[1].drop_table[0].chance, 0.05);
    }

    #[test]
    fn test_every_zone_has_roster_and_boss() {
        for zone in get_all_zones() {
            assert!(!zone.enemies.is_empty());
            assert!(zone.boss.is_boss);
            assert!(zone.enemies.iter().all(|e| !e.is_boss));
        }
    }

    #[test]
    fn test_bosses_guarantee_their_weapon() {
        for zone in get_all_zones() {
            assert!(zone.boss.drop_table.iter().any(|d| d.chance >= 1.0));
        }
    }
}
