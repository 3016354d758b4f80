//! Saving and loading player progress.

pub mod save_manager;
pub mod store;

pub use save_manager::{parse_snapshot, SaveManager};
pub use store::{default_save_dir, FileStore, KeyValueStore, MemoryStore};
