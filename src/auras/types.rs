use serde::{Deserialize, Serialize};

/// Aura rarity tiers, ordered from most to least common.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    Common = 0,
    Uncommon = 1,
    Rare = 2,
    Legendary = 3,
    Mythical = 4,
}

/// Cumulative rarity ladder, checked top-down. A roll strictly above the
/// threshold lands in that tier; anything at or below 0.50 is Common.
pub const RARITY_LADDER: [(f64, Rarity); 4] = [
    (0.98, Rarity::Mythical),
    (0.90, Rarity::Legendary),
    (0.75, Rarity::Rare),
    (0.50, Rarity::Uncommon),
];

pub const HIGHLIGHT_AURA_COLOR: &str = "gold";
pub const DEFAULT_AURA_COLOR: &str = "cyan";

impl Rarity {
    pub fn all() -> [Rarity; 5] {
        [
            Rarity::Common,
            Rarity::Uncommon,
            Rarity::Rare,
            Rarity::Legendary,
            Rarity::Mythical,
        ]
    }

    /// Returns the display name for this rarity tier.
    pub fn name(&self) -> &'static str {
        match self {
            Rarity::Common => "Common",
            Rarity::Uncommon => "Uncommon",
            Rarity::Rare => "Rare",
            Rarity::Legendary => "Legendary",
            Rarity::Mythical => "Mythical",
        }
    }

    /// Power before the ±25% variance roll.
    pub fn base_power(&self) -> f64 {
        match self {
            Rarity::Common => 10.0,
            Rarity::Uncommon => 50.0,
            Rarity::Rare => 100.0,
            Rarity::Legendary => 1000.0,
            Rarity::Mythical => 10000.0,
        }
    }

    /// Visual tag. Legendary is the only highlighted tier.
    pub fn color_tag(&self) -> &'static str {
        match self {
            Rarity::Legendary => HIGHLIGHT_AURA_COLOR,
            _ => DEFAULT_AURA_COLOR,
        }
    }

    /// Maps a uniform draw in [0, 1) onto a tier using [`RARITY_LADDER`].
    pub fn from_roll(roll: f64) -> Rarity {
        RARITY_LADDER
            .iter()
            .find(|(threshold, _)| roll > *threshold)
            .map(|(_, rarity)| *rarity)
            .unwrap_or(Rarity::Common)
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A collected aura. Never mutated after creation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Aura {
    pub id: String,
    pub name: String,
    pub description: String,
    pub power: f64,
    pub rarity: Rarity,
    pub color: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rarity_ordering() {
        assert!(Rarity::Common < Rarity::Uncommon);
        assert!(Rarity::Uncommon < Rarity::Rare);
        assert!(Rarity::Rare < Rarity::Legendary);
        assert!(Rarity::Legendary < Rarity::Mythical);
    }

    #[test]
    fn test_from_roll_examples() {
        assert_eq!(Rarity::from_roll(0.99), Rarity::Mythical);
        assert_eq!(Rarity::from_roll(0.95), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(0.80), Rarity::Rare);
        assert_eq!(Rarity::from_roll(0.60), Rarity::Uncommon);
        assert_eq!(Rarity::from_roll(0.10), Rarity::Common);
    }

    #[test]
    fn test_from_roll_boundaries_fall_to_lower_tier() {
        assert_eq!(Rarity::from_roll(0.98), Rarity::Legendary);
        assert_eq!(Rarity::from_roll(0.90), Rarity::Rare);
        assert_eq!(Rarity::from_roll(0.75), Rarity::Uncommon);
        assert_eq!(Rarity::from_roll(0.50), Rarity::Common);
        assert_eq!(Rarity::from_roll(0.0), Rarity::Common);
    }

    #[test]
    fn test_base_power_increases_with_tier() {
        let powers: Vec<f64> = Rarity::all().iter().map(|r| r.base_power()).collect();
        assert!(powers.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn test_color_tag_highlights_legendary_only() {
        for rarity in Rarity::all() {
            let expected = if rarity == Rarity::Legendary {
                "gold"
            } else {
                "cyan"
            };
            assert_eq!(rarity.color_tag(), expected);
        }
    }

    #[test]
    fn test_rarity_serializes_by_name() {
        assert_eq!(
            serde_json::to_string(&Rarity::Mythical).unwrap(),
            "\"Mythical\""
        );
    }
}
