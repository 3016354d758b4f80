use super::types::Item;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// One independent row of an enemy's drop table.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DropEntry {
    /// Base probability in [0, 1] before the drop-rate multiplier.
    pub chance: f64,
    /// Item granted on a hit. A row without an item never drops anything.
    #[serde(default)]
    pub item: Option<Item>,
}

impl DropEntry {
    pub fn new(chance: f64, item: Item) -> Self {
        Self {
            chance,
            item: Some(item),
        }
    }

    /// True if `roll` (uniform in [0, 1)) lands under the scaled chance.
    pub fn hits(&self, roll: f64, drop_rate_multiplier: f64) -> bool {
        self.item.is_some() && roll < self.chance * drop_rate_multiplier
    }
}

/// Rolls every row of a drop table independently.
///
/// Each row consumes exactly one draw, even rows without an item, so the
/// number of draws depends only on the table length.
pub fn roll_item_drops(
    table: &[DropEntry],
    drop_rate_multiplier: f64,
    rng: &mut impl Rng,
) -> Vec<Item> {
    table
        .iter()
        .filter_map(|entry| {
            let roll = rng.gen::<f64>();
            if entry.hits(roll, drop_rate_multiplier) {
                entry.item.clone()
            } else {
                None
            }
        })
        .collect()
}
