//! Card model: definitions, starter catalog, deck primitives and deck editing.
//!
//! ## Key Types
//!
//! - `Card`: Immutable card value (id, faction, type, rarity, cost, stats, abilities)
//! - `Pile`: Ordered card sequence used for decks, hands and graveyards
//! - `DrawResult`: Outcome of `draw_card`, including graveyard recycling
//! - `DeckEditor`: Copy-limit and size-bound enforcement for deck building

pub mod catalog;
pub mod deck;
pub mod definition;
pub mod editor;

pub use catalog::{class_card, create_starter_deck, create_starter_deck_with, faction_templates};
pub use deck::{draw_card, shuffle_deck, DrawResult, Pile};
pub use definition::{
    Ability, AbilityKind, Card, CardId, CardKind, ClassBonus, ClassType, Faction, Rarity,
};
pub use editor::{filter_cards, CardFilter, DeckEditor, DeckStats, SortKey};
