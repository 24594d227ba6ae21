//! Typed JSON snapshots of the player and the world over a `SnapshotStore`.

use serde::de::DeserializeOwned;
use serde::Serialize;
use tracing::{debug, warn};

use super::SnapshotStore;
use crate::core::PersistenceError;
use crate::players::Player;
use crate::world::{Region, WorldState, WorldStats};

pub const PLAYER_KEY: &str = "player";
pub const REGIONS_KEY: &str = "regions";
pub const WORLD_STATS_KEY: &str = "worldStats";
pub const INITIALIZED_KEY: &str = "gameInitialized";

/// Reads and writes whole-object snapshots.
///
/// Failures are logged and returned; nothing in memory is touched by them.
#[derive(Clone, Debug, Default)]
pub struct Repository<S> {
    store: S,
}

impl<S: SnapshotStore> Repository<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn into_inner(self) -> S {
        self.store
    }

    pub fn load_player(&self) -> Result<Option<Player>, PersistenceError> {
        self.read(PLAYER_KEY)
    }

    pub fn save_player(&mut self, player: &Player) -> Result<(), PersistenceError> {
        let json = encode(PLAYER_KEY, player)?;
        self.store
            .set(PLAYER_KEY, json)
            .inspect_err(|e| warn!(key = PLAYER_KEY, error = %e, "snapshot write failed"))
    }

    /// Load the world. `None` when no region list was ever saved; missing
    /// stats default to zero.
    pub fn load_world(&self) -> Result<Option<WorldState>, PersistenceError> {
        let Some(regions) = self.read::<Vec<Region>>(REGIONS_KEY)? else {
            return Ok(None);
        };
        let stats = self.read::<WorldStats>(WORLD_STATS_KEY)?.unwrap_or_default();
        Ok(Some(WorldState::from_parts(regions, stats)))
    }

    /// Write regions and stats as one batch.
    pub fn save_world(&mut self, world: &WorldState) -> Result<(), PersistenceError> {
        let batch = vec![
            (REGIONS_KEY.to_string(), encode(REGIONS_KEY, &world.regions)?),
            (WORLD_STATS_KEY.to_string(), encode(WORLD_STATS_KEY, &world.stats)?),
        ];
        self.store
            .set_batch(batch)
            .inspect_err(|e| warn!(error = %e, "world snapshot write failed"))
    }

    /// Seed the initial map unless that already happened. Returns whether it
    /// seeded.
    pub fn initialize_world(&mut self) -> Result<bool, PersistenceError> {
        if self.store.get(INITIALIZED_KEY)?.is_some() {
            return Ok(false);
        }
        self.save_world(&WorldState::initial())?;
        self.store.set(INITIALIZED_KEY, "true".to_string())?;
        debug!("initial world seeded");
        Ok(true)
    }

    fn read<T: DeserializeOwned>(&self, key: &str) -> Result<Option<T>, PersistenceError> {
        let raw = self
            .store
            .get(key)
            .inspect_err(|e| warn!(key, error = %e, "snapshot read failed"))?;
        let Some(raw) = raw else {
            return Ok(None);
        };
        serde_json::from_str(&raw)
            .map(Some)
            .map_err(|e| {
                warn!(key, error = %e, "malformed snapshot");
                PersistenceError::from(e)
            })
    }
}

fn encode<T: Serialize + ?Sized>(key: &str, value: &T) -> Result<String, PersistenceError> {
    serde_json::to_string(value).map_err(|e| {
        warn!(key, error = %e, "snapshot encode failed");
        PersistenceError::from(e)
    })
}
