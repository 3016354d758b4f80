//! Core game state and logic.

pub mod config;
pub mod constants;
pub mod error;
pub mod game_state;
pub mod progression;
pub mod session;

pub use config::GameConfig;
pub use constants::*;
pub use error::{GameError, GameResult};
pub use game_state::*;
pub use progression::*;
pub use session::*;
