//! Auras: rarity tiers, power rolls, and flavor text.

pub mod flavor;
pub mod generation;
pub mod types;

pub use flavor::{flavor_source_for, AuraFlavor, FlavorSource, RemoteFlavor, TemplateFlavor};
pub use generation::*;
pub use types::*;
