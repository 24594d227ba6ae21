//! # purge-ccg
//!
//! Battle and world-control engine for a two-faction (angels vs demons)
//! card battler.
//!
//! ## Design Principles
//!
//! 1. **Deterministic**: Every shuffle and bot choice draws from an injected
//!    `GameRng`. Same seed, same match.
//!
//! 2. **Explicit Phases**: The opponent's reply is a separate call
//!    (`resolve_opponent_turn`), never a timer.
//!
//! 3. **Reject, Don't Corrupt**: Illegal actions return an error and leave
//!    state exactly as it was.
//!
//! ## Architecture
//!
//! - **Persistent Data Structures**: Hands, decks and logs are `im` vectors,
//!   so match snapshots are cheap.
//!
//! - **Single World Aggregate**: Regions and world stats change together
//!   through `WorldState`; a victory either lands completely (including any
//!   purge) or not at all.
//!
//! ## Modules
//!
//! - `core`: RNG, configuration, error types
//! - `cards`: Card definitions, starter decks, shuffle/draw, deck editing
//! - `battle`: The match state machine and opponent policies
//! - `players`: Player profile, progression, bot generation
//! - `world`: Regions, control scores, purges
//! - `store`: Snapshot persistence boundary

pub mod core;
pub mod cards;
pub mod battle;
pub mod players;
pub mod world;
pub mod store;

// Re-export commonly used types
pub use crate::core::{
    GameRng, GameRngState,
    BattleConfig, DeckRules, GameConfig, ProgressionConfig, WorldConfig,
    ActionError, DeckError, ErrorKind, PersistenceError, WorldError,
};

pub use crate::cards::{
    Ability, AbilityKind, Card, CardId, CardKind, ClassType, Faction, Pile, Rarity,
    create_starter_deck, draw_card, shuffle_deck, DrawResult,
    DeckEditor, DeckStats,
};

pub use crate::battle::{
    Battle, BattleBuilder, MatchOutcome, MatchState, Phase, PlayReport, Side,
    OpponentPolicy, RandomAffordable,
};

pub use crate::players::{BotPlayer, Player, Settlement};

pub use crate::world::{PurgeEvent, Region, RegionDelta, RegionId, WorldState, WorldStats};

pub use crate::store::{MemoryStore, Repository, SnapshotStore};
