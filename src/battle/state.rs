//! Match state: two combatants, the phase marker, and the append-only logs.
//!
//! Everything here is plain data. `Battle` owns the transitions; this module
//! only offers lookups and the few invariant-preserving mutators they share.

use im::Vector;
use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, Faction, Pile};
use crate::world::RegionId;

/// One of the two seats in a match.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Side {
    /// The human-controlled seat.
    Player,
    /// The scripted opponent.
    Opponent,
}

impl Side {
    /// The other seat.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Side::Player => Side::Opponent,
            Side::Opponent => Side::Player,
        }
    }

    /// Both seats, player first.
    pub const BOTH: [Side; 2] = [Side::Player, Side::Opponent];
}

impl std::fmt::Display for Side {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Side::Player => f.write_str("player"),
            Side::Opponent => f.write_str("opponent"),
        }
    }
}

/// Where the match is in its turn cycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// Waiting for the human to play or pass.
    PlayerTurn,
    /// The human has acted; `resolve_opponent_turn` must run next.
    OpponentPending,
    /// Terminal.
    GameOver { winner: Side },
}

/// Per-seat state.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub faction: Faction,
    pub health: u32,
    pub mana: u32,
    pub hand: Pile,
    pub deck: Pile,
    pub graveyard: Pile,
}

impl Combatant {
    /// Position of a card in hand, by id.
    #[must_use]
    pub fn hand_position(&self, id: &CardId) -> Option<usize> {
        self.hand.iter().position(|c| &c.id == id)
    }

    /// Cards this side could afford right now.
    pub fn affordable(&self) -> impl Iterator<Item = &Card> {
        self.hand.iter().filter(move |c| c.cost <= self.mana)
    }

    /// Cards across hand, deck and graveyard.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.hand.len() + self.deck.len() + self.graveyard.len()
    }

    #[must_use]
    pub fn is_defeated(&self) -> bool {
        self.health == 0
    }

    /// Subtract damage, flooring at zero.
    pub fn take_damage(&mut self, amount: u32) {
        self.health = self.health.saturating_sub(amount);
    }

    /// Add healing, capped at `max_health`.
    pub fn heal(&mut self, amount: u32, max_health: u32) {
        self.health = self.health.saturating_add(amount).min(max_health);
    }
}

/// A resolved action, as recorded in the match history.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum BattleAction {
    PlayCard { card: CardId },
    Pass,
    Surrender,
}

/// A history entry with ordering metadata.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActionRecord {
    pub side: Side,
    pub action: BattleAction,
    pub turn: u32,
    /// Global sequence number within the match.
    pub sequence: u32,
}

/// Complete match state.
///
/// `log` is the human-readable event stream shown to players; `history`
/// is the same sequence in structured form.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchState {
    pub region: RegionId,
    pub player: Combatant,
    pub opponent: Combatant,
    pub phase: Phase,
    /// Starts at 1.
    pub turn_number: u32,
    pub log: Vector<String>,
    pub history: Vector<ActionRecord>,
    next_sequence: u32,
    outcome_claimed: bool,
}

impl MatchState {
    pub(crate) fn new(region: RegionId, player: Combatant, opponent: Combatant) -> Self {
        Self {
            region,
            player,
            opponent,
            phase: Phase::PlayerTurn,
            turn_number: 1,
            log: Vector::new(),
            history: Vector::new(),
            next_sequence: 0,
            outcome_claimed: false,
        }
    }

    #[must_use]
    pub fn combatant(&self, side: Side) -> &Combatant {
        match side {
            Side::Player => &self.player,
            Side::Opponent => &self.opponent,
        }
    }

    pub fn combatant_mut(&mut self, side: Side) -> &mut Combatant {
        match side {
            Side::Player => &mut self.player,
            Side::Opponent => &mut self.opponent,
        }
    }

    /// Seat expected to act next, `None` once the match is over.
    #[must_use]
    pub fn active_side(&self) -> Option<Side> {
        match self.phase {
            Phase::PlayerTurn => Some(Side::Player),
            Phase::OpponentPending => Some(Side::Opponent),
            Phase::GameOver { .. } => None,
        }
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        matches!(self.phase, Phase::GameOver { .. })
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        match self.phase {
            Phase::GameOver { winner } => Some(winner),
            _ => None,
        }
    }

    pub(crate) fn push_log(&mut self, line: impl Into<String>) {
        self.log.push_back(line.into());
    }

    pub(crate) fn record(&mut self, side: Side, action: BattleAction) {
        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.history.push_back(ActionRecord {
            side,
            action,
            turn: self.turn_number,
            sequence,
        });
    }

    /// Mark the outcome as handed out. Returns `false` if it already was.
    pub(crate) fn claim_outcome(&mut self) -> bool {
        !std::mem::replace(&mut self.outcome_claimed, true)
    }
}
