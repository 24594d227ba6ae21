//! Deck, hand and graveyard primitives.
//!
//! Piles are `im::Vector`s so a match can hand out whole-state snapshots
//! without deep copies. The front of a deck is the next card drawn.
//!
//! Both operations here are pure: they take piles by reference and return
//! new ones. Cards are never destroyed; recycling moves the whole graveyard
//! back into the deck.

use im::Vector;
use tracing::debug;

use super::definition::Card;
use crate::core::GameRng;

/// An ordered sequence of cards.
pub type Pile = Vector<Card>;

/// Return a uniformly shuffled copy of `deck`.
#[must_use]
pub fn shuffle_deck(deck: &Pile, rng: &mut GameRng) -> Pile {
    let mut cards: Vec<Card> = deck.iter().cloned().collect();
    rng.shuffle(&mut cards);
    cards.into_iter().collect()
}

/// Piles after a draw attempt.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DrawResult {
    pub hand: Pile,
    pub deck: Pile,
    pub graveyard: Pile,
    /// The card moved into the hand, `None` when the hand was full or
    /// there was nothing left to draw.
    pub drawn_card: Option<Card>,
    /// The graveyard was shuffled back into the empty deck.
    pub recycled: bool,
}

impl DrawResult {
    fn unchanged(hand: &Pile, deck: &Pile, graveyard: &Pile, recycled: bool) -> Self {
        Self {
            hand: hand.clone(),
            deck: deck.clone(),
            graveyard: graveyard.clone(),
            drawn_card: None,
            recycled,
        }
    }
}

/// Draw the front card of `deck` into `hand`.
///
/// - Hand at `hand_cap`: nothing moves, no recycle.
/// - Deck empty, graveyard not: the graveyard is shuffled into a new deck first.
/// - Deck and graveyard empty: nothing moves.
#[must_use]
pub fn draw_card(
    hand: &Pile,
    deck: &Pile,
    graveyard: &Pile,
    hand_cap: usize,
    rng: &mut GameRng,
) -> DrawResult {
    if hand.len() >= hand_cap {
        return DrawResult::unchanged(hand, deck, graveyard, false);
    }

    let mut deck = deck.clone();
    let mut graveyard = graveyard.clone();
    let mut recycled = false;

    if deck.is_empty() && !graveyard.is_empty() {
        debug!(cards = graveyard.len(), "recycling graveyard into deck");
        deck = shuffle_deck(&graveyard, rng);
        graveyard = Vector::new();
        recycled = true;
    }

    let Some(card) = deck.pop_front() else {
        return DrawResult::unchanged(hand, &deck, &graveyard, recycled);
    };

    let mut hand = hand.clone();
    hand.push_back(card.clone());

    DrawResult {
        hand,
        deck,
        graveyard,
        drawn_card: Some(card),
        recycled,
    }
}
