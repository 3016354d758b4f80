//! Error types for the game core.
//!
//! None of these end a session. Each one maps to a blocked action plus a
//! notification, or to a silent local recovery (flavor text, corrupt saves).

use crate::zones::GateDenial;

/// Errors produced by game operations.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum GameError {
    /// The inventory is already at capacity; the item was not added.
    #[error("Inventory Full! ({capacity} slots)")]
    CapacityExceeded { capacity: usize },

    /// The remote flavor-text service could not produce a name.
    #[error("aura flavor text unavailable: {0}")]
    GenerationUnavailable(String),

    /// The saved snapshot could not be parsed.
    #[error("save data is corrupt: {0}")]
    PersistenceCorrupt(String),

    /// A zone transition was refused.
    #[error("{0}")]
    GateDenied(GateDenial),

    /// A purchase was refused for lack of gold.
    #[error("Not enough Gold! (need {needed}, have {current})")]
    InsufficientGold { needed: u64, current: u64 },

    /// The action is not allowed in the current mode, menu or turn.
    #[error("action unavailable: {0}")]
    ActionUnavailable(&'static str),

    /// No catalog or inventory entry matches.
    #[error("unknown item: {0}")]
    UnknownItem(String),

    /// The backing store failed to read or write.
    #[error("storage error: {0}")]
    Storage(String),
}

impl From<GateDenial> for GameError {
    fn from(denial: GateDenial) -> Self {
        GameError::GateDenied(denial)
    }
}

impl From<std::io::Error> for GameError {
    fn from(err: std::io::Error) -> Self {
        GameError::Storage(err.to_string())
    }
}

/// Convenience result type for game operations.
pub type GameResult<T> = Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_message() {
        let err = GameError::CapacityExceeded { capacity: 20 };
        assert_eq!(err.to_string(), "Inventory Full! (20 slots)");
    }

    #[test]
    fn test_gate_denial_converts() {
        let err: GameError = GateDenial::InsufficientUniqueAuras {
            current: 1,
            needed: 3,
        }
        .into();
        assert_eq!(err.to_string(), "Need 3 Unique Auras! (Current: 1)");
    }

    #[test]
    fn test_io_error_becomes_storage() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "nope");
        assert!(matches!(GameError::from(io), GameError::Storage(_)));
    }
}
