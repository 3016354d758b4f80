//! Turn-based encounters: enemy instances, the attack wave and turn timers.

pub mod logic;
pub mod types;

pub use logic::*;
pub use types::*;
