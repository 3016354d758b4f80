//! Item system: types, the static catalog, and drop tables.

pub mod catalog;
pub mod drops;
pub mod types;

pub use drops::*;
pub use types::*;
