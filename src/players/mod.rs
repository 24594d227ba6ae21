//! Player profiles, progression, and bot opponents.
//!
//! ## Key Types
//!
//! - `Player`: The persisted human profile (level, experience, record, decks)
//! - `Settlement`: What a match payout changed, including the region credit
//! - `BotPlayer`: A generated scripted opponent

pub mod bot;
pub mod profile;

pub use bot::{BotPlayer, MAX_BOT_LEVEL};
pub use profile::{level_for_experience, Player, Settlement};
