//! One-on-one card battles between a human seat and a scripted opponent.
//!
//! ## Key Types
//!
//! - `Battle`: The match state machine (play, pass, opponent turn, surrender)
//! - `BattleBuilder`: Seats, decks, config and seed for a new match
//! - `MatchState`: Plain match data with the human-readable log and structured history
//! - `OpponentPolicy`: How the scripted seat picks a card
//! - `MatchOutcome`: Result handed to progression and world control

pub mod effect;
pub mod engine;
pub mod policy;
pub mod state;

pub use effect::{apply_card_effect, CardEffect, DEFAULT_SPELL_AMOUNT};
pub use engine::{Battle, BattleBuilder, MatchOutcome, PlayReport};
pub use policy::{OpponentPolicy, RandomAffordable};
pub use state::{ActionRecord, BattleAction, Combatant, MatchState, Phase, Side};
