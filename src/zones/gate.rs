//! Zone gate: decides whether the player may travel along the zone chain.
//!
//! Backward travel is always allowed (except from the first zone). Forward
//! travel checks the target zone's requirements against the aura
//! collection: summed power first, then the count of distinct aura names.
//! Two auras with the same display name count once.

use super::data::Zone;
use crate::auras::Aura;
use crate::core::game_state::PlayerState;
use std::collections::HashSet;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Next,
    Prev,
}

/// Why a zone transition was refused.
#[derive(Debug, Clone, PartialEq)]
pub enum GateDenial {
    /// There is no zone in that direction.
    AtBoundary,
    InsufficientPower { current: f64, needed: f64 },
    InsufficientUniqueAuras { current: usize, needed: usize },
}

impl fmt::Display for GateDenial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GateDenial::AtBoundary => write!(f, "No zone in that direction."),
            GateDenial::InsufficientPower { current, needed } => {
                write!(f, "Need {} Total Aura Power! (Current: {:.0})", needed, current)
            }
            GateDenial::InsufficientUniqueAuras { current, needed } => {
                write!(f, "Need {} Unique Auras! (Current: {})", needed, current)
            }
        }
    }
}

/// Sum of every aura's power. Duplicates all count.
/// Folds from `0.0` so an empty collection reports 0, not -0.
pub fn total_aura_power(auras: &[Aura]) -> f64 {
    auras.iter().fold(0.0, |total, a| total + a.power)
}

/// Number of distinct aura names.
pub fn unique_aura_count(auras: &[Aura]) -> usize {
    auras
        .iter()
        .map(|a| a.name.as_str())
        .collect::<HashSet<_>>()
        .len()
}

/// Checks an aura collection against a zone's entry requirements.
pub fn check_requirements(auras: &[Aura], target: &Zone) -> Result<(), GateDenial> {
    let power = total_aura_power(auras);
    if power < target.required_total_power {
        return Err(GateDenial::InsufficientPower {
            current: power,
            needed: target.required_total_power,
        });
    }

    let unique = unique_aura_count(auras);
    if unique < target.required_unique_auras {
        return Err(GateDenial::InsufficientUniqueAuras {
            current: unique,
            needed: target.required_unique_auras,
        });
    }

    Ok(())
}

/// Index of the neighbouring zone, if it exists.
pub fn target_index(current: usize, direction: Direction, zone_count: usize) -> Option<usize> {
    let target = match direction {
        Direction::Next => current.checked_add(1)?,
        Direction::Prev => current.checked_sub(1)?,
    };
    (target < zone_count).then_some(target)
}

/// Moves the player one zone along the chain.
///
/// On success the zone index is updated and returned. On denial the
/// player is untouched.
pub fn try_enter(
    player: &mut PlayerState,
    zones: &[Zone],
    direction: Direction,
) -> Result<usize, GateDenial> {
    let target = target_index(player.current_zone, direction, zones.len())
        .ok_or(GateDenial::AtBoundary)?;

    if direction == Direction::Next {
        check_requirements(&player.auras, &zones[target])?;
    }

    player.current_zone = target;
    tracing::info!(zone = zones[target].name, "entered zone");
    Ok(target)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::auras::Rarity;
    use crate::zones::data::get_all_zones;

    fn aura(name: &str, power: f64) -> Aura {
        Aura {
            id: format!("{name}-{power}"),
            name: name.to_string(),
            description: String::new(),
            power,
            rarity: Rarity::Rare,
            color: "cyan".to_string(),
        }
    }

    #[test]
    fn test_total_power_counts_duplicates() {
        let auras = vec![aura("A", 10.0), aura("A", 15.5)];
        assert_eq!(total_aura_power(&auras), 25.5);
        assert_eq!(unique_aura_count(&auras), 1);
    }

    #[test]
    fn test_empty_collection() {
        assert_eq!(total_aura_power(&[]), 0.0);
        assert_eq!(unique_aura_count(&[]), 0);
    }

    #[test]
    fn test_empty_collection_reports_positive_zero() {
        assert!(total_aura_power(&[]).is_sign_positive());

        let zones = get_all_zones();
        let denial = check_requirements(&[], &zones[1]).unwrap_err();
        assert_eq!(denial.to_string(), "Need 100 Total Aura Power! (Current: 0)");
    }

    #[test]
    fn test_target_index_bounds() {
        assert_eq!(target_index(0, Direction::Prev, 2), None);
        assert_eq!(target_index(0, Direction::Next, 2), Some(1));
        assert_eq!(target_index(1, Direction::Next, 2), None);
        assert_eq!(target_index(1, Direction::Prev, 2), Some(0));
    }

    #[test]
    fn test_power_checked_before_uniqueness() {
        let zones = get_all_zones();
        let auras = vec![aura("A", 99.0)];
        assert_eq!(
            check_requirements(&auras, &zones[1]),
            Err(GateDenial::InsufficientPower {
                current: 99.0,
                needed: 100.0
            })
        );
    }

    #[test]
    fn test_denial_messages() {
        let power = GateDenial::InsufficientPower {
            current: 99.4,
            needed: 100.0,
        };
        assert_eq!(power.to_string(), "Need 100 Total Aura Power! (Current: 99)");
    }

    #[test]
    fn test_prev_from_first_zone_is_boundary() {
        let zones = get_all_zones();
        let mut player = PlayerState::default();
        assert_eq!(
            try_enter(&mut player, &zones, Direction::Prev),
            Err(GateDenial::AtBoundary)
        );
        assert_eq!(player.current_zone, 0);
    }

    #[test]
    fn test_prev_ignores_requirements() {
        let zones = get_all_zones();
        let mut player = PlayerState {
            current_zone: 1,
            ..PlayerState::default()
        };
        assert_eq!(try_enter(&mut player, &zones, Direction::Prev), Ok(0));
        assert_eq!(player.current_zone, 0);
    }
}
