//! Aura Chronicles - turn-based RPG core
//!
//! Progression, loot and aura rolls, the combat state machine and the zone
//! gate. The terminal front end lives in the binary.

pub mod auras;
pub mod build_info;
pub mod combat;
pub mod core;
pub mod items;
pub mod loot;
pub mod persistence;
pub mod zones;
