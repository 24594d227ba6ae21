//! Error types for rejected actions and collaborator failures.
//!
//! Nothing here is fatal: every rejection leaves the state it was aimed at
//! untouched, and callers may retry with a different action.

use thiserror::Error;

use crate::battle::Side;
use crate::cards::CardId;
use crate::world::RegionId;

/// Broad classification of a rejected battle action.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ErrorKind {
    /// Out of turn, after game-over, or referencing a card that isn't there.
    InvalidAction,
    /// Not enough mana for the card.
    InsufficientResource,
}

/// A battle action that was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ActionError {
    #[error("the match is already over")]
    GameOver,
    #[error("it is not the {side} side's turn")]
    NotYourTurn { side: Side },
    #[error("card {card} is not in hand")]
    CardNotInHand { card: CardId },
    #[error("insufficient mana: card costs {required}, {available} available")]
    InsufficientMana { required: u32, available: u32 },
    #[error("no opponent turn is pending")]
    NoOpponentTurnPending,
}

impl ActionError {
    /// Map onto the two-way rejection taxonomy.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            ActionError::InsufficientMana { .. } => ErrorKind::InsufficientResource,
            _ => ErrorKind::InvalidAction,
        }
    }
}

/// A deck edit that was refused.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DeckError {
    #[error("deck already holds the maximum of {max} cards")]
    DeckFull { max: usize },
    #[error("deck already holds {max} copies of {name}")]
    TooManyCopies { name: String, max: usize },
    #[error("deck needs at least {min} cards, has {actual}")]
    TooFewCards { min: usize, actual: usize },
    #[error("card {card} is not in the deck")]
    CardNotInDeck { card: CardId },
}

/// A world-map operation that was refused.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum WorldError {
    #[error("unknown region {0}")]
    UnknownRegion(RegionId),
    #[error("region {0} is locked")]
    RegionLocked(RegionId),
    #[error("region points must be finite and non-negative, got {0}")]
    InvalidPoints(f64),
}

/// Failure at the persistence boundary.
///
/// In-memory state is never considered corrupted by one of these; retry
/// policy belongs to the caller.
#[derive(Debug, Error)]
pub enum PersistenceError {
    #[error("storage backend failed: {0}")]
    Backend(String),
    #[error("malformed snapshot: {0}")]
    Json(#[from] serde_json::Error),
    #[error("checkpoint encoding failed: {0}")]
    Encoding(#[from] bincode::Error),
}
