use super::flavor::FlavorSource;
use super::types::{Aura, Rarity};
use crate::core::constants::{AURA_POWER_VARIANCE_MAX, AURA_POWER_VARIANCE_MIN, AURA_ROLL_CHANCE};
use rand::Rng;

/// Scales a tier's base power by a variance factor in [0.75, 1.25].
/// Out-of-range factors are clamped so power never leaves the band.
pub fn aura_power(rarity: Rarity, variance: f64) -> f64 {
    rarity.base_power() * variance.clamp(AURA_POWER_VARIANCE_MIN, AURA_POWER_VARIANCE_MAX)
}

pub fn roll_rarity(rng: &mut impl Rng) -> Rarity {
    Rarity::from_roll(rng.gen::<f64>())
}

pub fn roll_power(rarity: Rarity, rng: &mut impl Rng) -> f64 {
    let spread = AURA_POWER_VARIANCE_MAX - AURA_POWER_VARIANCE_MIN;
    aura_power(rarity, AURA_POWER_VARIANCE_MIN + rng.gen::<f64>() * spread)
}

/// Builds a new aura: rolls rarity and power, then asks `flavor` for text.
pub fn synthesize_aura(
    zone_name: &str,
    flavor: &dyn FlavorSource,
    rng: &mut impl Rng,
) -> Aura {
    let rarity = roll_rarity(rng);
    let power = roll_power(rarity, rng);
    let text = flavor.describe(rarity, zone_name);

    tracing::debug!(rarity = rarity.name(), power, name = %text.name, "aura synthesized");

    Aura {
        id: uuid::Uuid::new_v4().to_string(),
        name: text.name,
        description: text.description,
        power,
        rarity,
        color: rarity.color_tag().to_string(),
    }
}

/// Rolls the 10% aura chance after a victory and synthesizes on a hit.
pub fn try_roll_aura(
    zone_name: &str,
    flavor: &dyn FlavorSource,
    rng: &mut impl Rng,
) -> Option<Aura> {
    if rng.gen::<f64>() < AURA_ROLL_CHANCE {
        Some(synthesize_aura(zone_name, flavor, rng))
    } else {
        None
    }
}
