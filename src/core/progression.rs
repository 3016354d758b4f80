//! Leveling and inventory capacity.

use super::constants::*;
use super::error::{GameError, GameResult};
use super::game_state::PlayerState;
use crate::items::Item;

/// XP needed to advance past `level`: `floor(100 * 1.2^(level-1))`.
pub fn required_xp(level: u32) -> u64 {
    let exponent = level.saturating_sub(1) as f64;
    (LEVEL_UP_BASE * XP_GROWTH_FACTOR.powf(exponent)).floor() as u64
}

/// Outcome of an XP grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LevelUpReport {
    pub levels_gained: u32,
    pub new_level: u32,
}

impl LevelUpReport {
    pub fn leveled_up(&self) -> bool {
        self.levels_gained > 0
    }
}

/// Adds XP and processes every level-up it pays for.
///
/// Each level costs its own requirement and grants `MAX_HP_PER_LEVEL`.
/// Any level-up heals fully; otherwise HP is only clamped to max.
pub fn add_xp(player: &mut PlayerState, amount: u64) -> LevelUpReport {
    player.xp = player.xp.saturating_add(amount);

    let mut levels_gained = 0;
    loop {
        let needed = required_xp(player.level);
        if player.xp < needed {
            break;
        }
        player.xp -= needed;
        player.level += 1;
        player.max_hp += MAX_HP_PER_LEVEL;
        levels_gained += 1;
    }

    if levels_gained > 0 {
        player.hp = player.max_hp;
        tracing::info!(level = player.level, levels_gained, "level up");
    } else {
        player.hp = player.hp.min(player.max_hp);
    }

    LevelUpReport {
        levels_gained,
        new_level: player.level,
    }
}

/// Appends an item if there is room. A full inventory is left unchanged.
pub fn add_item(player: &mut PlayerState, item: Item) -> GameResult<()> {
    if player.inventory_is_full() {
        return Err(GameError::CapacityExceeded {
            capacity: MAX_INVENTORY_SLOTS,
        });
    }
    player.inventory.push(item);
    Ok(())
}

/// Death penalty: keep 80% of current XP, rounded down.
pub fn xp_after_death(xp: u64) -> u64 {
    (xp as f64 * DEATH_XP_RETENTION).floor() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::items::catalog::apple;

    #[test]
    fn test_required_xp_base() {
        assert_eq!(required_xp(1), 100);
        assert_eq!(required_xp(2), 120);
    }

    #[test]
    fn test_required_xp_strictly_increasing() {
        for level in 1..60 {
            assert!(
                required_xp(level + 1) > required_xp(level),
                "required_xp({}) should exceed required_xp({})",
                level + 1,
                level
            );
        }
    }

    #[test]
    fn test_small_grant_no_level() {
        let mut player = PlayerState {
            hp: 40,
            ..PlayerState::default()
        };
        let report = add_xp(&mut player, 10);
        assert!(!report.leveled_up());
        assert_eq!(player.xp, 10);
        assert_eq!(player.level, 1);
        assert_eq!(player.hp, 40);
    }

    #[test]
    fn test_level_up_heals_and_grows_hp() {
        let mut player = PlayerState {
            hp: 1,
            ..PlayerState::default()
        };
        let report = add_xp(&mut player, 100);
        assert_eq!(report.levels_gained, 1);
        assert_eq!(player.level, 2);
        assert_eq!(player.xp, 0);
        assert_eq!(player.max_hp, 110);
        assert_eq!(player.hp, 110);
    }

    #[test]
    fn test_multi_level_jump() {
        let mut player = PlayerState::default();
        let report = add_xp(&mut player, 250);
        assert_eq!(report.levels_gained, 2);
        assert_eq!(player.level, 3);
        assert_eq!(player.xp, 30);
        assert_eq!(player.max_hp, 120);
    }

    #[test]
    fn test_split_grant_matches_single_grant() {
        let mut once = PlayerState::default();
        add_xp(&mut once, 250);

        let mut split = PlayerState::default();
        add_xp(&mut split, 100);
        add_xp(&mut split, 150);

        assert_eq!(once, split);
    }

    #[test]
    fn test_xp_below_requirement_after_leveling() {
        let mut player = PlayerState::default();
        add_xp(&mut player, 12_345);
        assert!(player.xp < required_xp(player.level));
    }

    #[test]
    fn test_add_item_until_full() {
        let mut player = PlayerState::default();
        while !player.inventory_is_full() {
            add_item(&mut player, apple()).unwrap();
        }
        let before = player.inventory.clone();
        assert_eq!(
            add_item(&mut player, apple()),
            Err(GameError::CapacityExceeded {
                capacity: MAX_INVENTORY_SLOTS
            })
        );
        assert_eq!(player.inventory, before);
    }

    #[test]
    fn test_xp_after_death() {
        assert_eq!(xp_after_death(100), 80);
        assert_eq!(xp_after_death(99), 79);
        assert_eq!(xp_after_death(0), 0);
    }
}
