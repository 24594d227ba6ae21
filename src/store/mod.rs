//! Persistence boundary.
//!
//! The engine only fixes the JSON shape of what it saves. Where the bytes go
//! is up to the `SnapshotStore` the host plugs in.
//!
//! ## Key Types
//!
//! - `SnapshotStore`: String key/value backend with batched writes
//! - `MemoryStore`: Hash-map backend
//! - `Repository`: Typed load/save of `Player` and `WorldState`

pub mod memory;
pub mod repository;

pub use memory::MemoryStore;
pub use repository::{Repository, INITIALIZED_KEY, PLAYER_KEY, REGIONS_KEY, WORLD_STATS_KEY};

use crate::core::PersistenceError;

/// Opaque key/value storage for JSON snapshots.
pub trait SnapshotStore {
    fn get(&self, key: &str) -> Result<Option<String>, PersistenceError>;

    fn set(&mut self, key: &str, value: String) -> Result<(), PersistenceError>;

    fn remove(&mut self, key: &str) -> Result<(), PersistenceError>;

    /// Write several keys as one unit: all land or none do.
    fn set_batch(&mut self, entries: Vec<(String, String)>) -> Result<(), PersistenceError>;
}
