//! Core building blocks: RNG, configuration, error taxonomy.
//!
//! These are shared by the card model, the battle engine and the world map.

pub mod config;
pub mod error;
pub mod rng;

pub use config::{BattleConfig, DeckRules, GameConfig, ProgressionConfig, WorldConfig};
pub use error::{ActionError, DeckError, ErrorKind, PersistenceError, WorldError};
pub use rng::{GameRng, GameRngState};
