//! The match state machine.
//!
//! ```text
//!              play_card / pass_turn
//!  PlayerTurn ───────────────────────▶ OpponentPending
//!      ▲                                     │ resolve_opponent_turn
//!      └──────────── turn advance ◀──────────┘
//!
//!  any lethal play / surrender ──▶ GameOver { winner }
//! ```
//!
//! The opponent's response is an explicit second call rather than a timer,
//! so presentation delays never affect ordering or outcome.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::effect::{apply_card_effect, CardEffect};
use super::policy::{OpponentPolicy, RandomAffordable};
use super::state::{BattleAction, Combatant, MatchState, Phase, Side};
use crate::cards::{draw_card, shuffle_deck, Card, CardId, Faction};
use crate::core::{ActionError, BattleConfig, GameRng, GameRngState, PersistenceError};
use crate::world::RegionId;

/// Result handed to progression and world control once a match ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchOutcome {
    pub winner: Side,
    /// The region the match was fought over.
    pub region: RegionId,
    pub player_faction: Faction,
    pub turn_number: u32,
}

impl MatchOutcome {
    #[must_use]
    pub fn player_won(&self) -> bool {
        self.winner == Side::Player
    }
}

/// What a single card play did.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PlayReport {
    pub side: Side,
    pub card: Card,
    pub effect: CardEffect,
    /// This play ended the match.
    pub lethal: bool,
}

/// Seat description used by `BattleBuilder`.
#[derive(Clone, Debug)]
struct Seat {
    name: String,
    faction: Faction,
    deck: Vec<Card>,
}

/// Builder for a `Battle`.
///
/// The region is required: the match result credits exactly that region.
///
/// ```
/// use purge_ccg::battle::BattleBuilder;
/// use purge_ccg::cards::{create_starter_deck, ClassType, Faction};
///
/// let battle = BattleBuilder::new("neutral_plains")
///     .player("Aria", Faction::Angel, create_starter_deck(Faction::Angel, ClassType::Paladin))
///     .opponent("Baal", Faction::Demon, create_starter_deck(Faction::Demon, ClassType::Mage))
///     .build(42);
///
/// assert_eq!(battle.state().player.hand.len(), 4);
/// assert_eq!(battle.state().turn_number, 1);
/// ```
#[derive(Clone, Debug)]
pub struct BattleBuilder {
    region: RegionId,
    config: BattleConfig,
    player: Seat,
    opponent: Seat,
}

impl BattleBuilder {
    pub fn new(region: impl Into<RegionId>) -> Self {
        Self {
            region: region.into(),
            config: BattleConfig::default(),
            player: Seat {
                name: "Player".into(),
                faction: Faction::Angel,
                deck: Vec::new(),
            },
            opponent: Seat {
                name: "Opponent".into(),
                faction: Faction::Demon,
                deck: Vec::new(),
            },
        }
    }

    #[must_use]
    pub fn config(mut self, config: BattleConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn player(mut self, name: impl Into<String>, faction: Faction, deck: Vec<Card>) -> Self {
        self.player = Seat {
            name: name.into(),
            faction,
            deck,
        };
        self
    }

    #[must_use]
    pub fn opponent(mut self, name: impl Into<String>, faction: Faction, deck: Vec<Card>) -> Self {
        self.opponent = Seat {
            name: name.into(),
            faction,
            deck,
        };
        self
    }

    /// Build with a seeded RNG and the uniform random opponent.
    #[must_use]
    pub fn build(self, seed: u64) -> Battle<RandomAffordable> {
        self.build_with(GameRng::new(seed), RandomAffordable)
    }

    /// Build with an explicit RNG and opponent policy.
    #[must_use]
    pub fn build_with<P: OpponentPolicy>(self, rng: GameRng, policy: P) -> Battle<P> {
        let player = self.seat_up(self.player.clone(), &mut rng.for_context("player_deck"));
        let opponent = self.seat_up(self.opponent.clone(), &mut rng.for_context("opponent_deck"));

        let mut state = MatchState::new(self.region, player, opponent);
        let opening = format!(
            "The battle begins! {} vs {}",
            state.player.name, state.opponent.name
        );
        state.push_log(opening);

        debug!(region = %state.region, "match started");

        Battle {
            config: self.config,
            state,
            rng,
            policy,
        }
    }

    fn seat_up(&self, seat: Seat, rng: &mut GameRng) -> Combatant {
        let deck: Vector<Card> = seat.deck.into_iter().collect();
        let mut deck = shuffle_deck(&deck, rng);
        let split = self.config.initial_hand_size.min(deck.len());
        let rest = deck.split_off(split);

        Combatant {
            name: seat.name,
            faction: seat.faction,
            health: self.config.starting_health,
            mana: self.config.starting_mana,
            hand: deck,
            deck: rest,
            graveyard: Vector::new(),
        }
    }
}

/// A single match between the human seat and the scripted opponent.
#[derive(Clone, Debug)]
pub struct Battle<P = RandomAffordable> {
    config: BattleConfig,
    state: MatchState,
    rng: GameRng,
    policy: P,
}

impl<P: OpponentPolicy> Battle<P> {
    /// Current match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    #[must_use]
    pub fn config(&self) -> &BattleConfig {
        &self.config
    }

    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state.is_game_over()
    }

    #[must_use]
    pub fn winner(&self) -> Option<Side> {
        self.state.winner()
    }

    /// The human plays a card from hand.
    ///
    /// On success, unless the play was lethal, the opponent's turn is pending
    /// and `resolve_opponent_turn` must be called next.
    pub fn play_card(&mut self, card: &CardId) -> Result<PlayReport, ActionError> {
        self.ensure_player_turn()?;
        let report = self.play(Side::Player, card)?;
        if !report.lethal {
            self.state.phase = Phase::OpponentPending;
        }
        Ok(report)
    }

    /// The human passes; the opponent's turn becomes pending.
    pub fn pass_turn(&mut self) -> Result<(), ActionError> {
        self.ensure_player_turn()?;
        let line = format!("{} passes the turn.", self.state.player.name);
        self.state.push_log(line);
        self.state.record(Side::Player, BattleAction::Pass);
        self.state.phase = Phase::OpponentPending;
        Ok(())
    }

    /// Run the scripted opponent's turn, then advance to the next turn.
    ///
    /// Returns the card the opponent played, if any.
    pub fn resolve_opponent_turn(&mut self) -> Result<Option<PlayReport>, ActionError> {
        match self.state.phase {
            Phase::GameOver { .. } => return Err(ActionError::GameOver),
            Phase::PlayerTurn => return Err(ActionError::NoOpponentTurnPending),
            Phase::OpponentPending => {}
        }

        let choice = {
            let opponent = &self.state.opponent;
            self.policy
                .choose_card(&opponent.hand, opponent.mana, &mut self.rng)
        };

        // An illegal pick counts as holding back so the match can move on.
        let report = match choice.map(|card| self.play(Side::Opponent, &card)) {
            Some(Ok(report)) => Some(report),
            Some(Err(error)) => {
                warn!(%error, "opponent policy chose an illegal play");
                self.hold_back();
                None
            }
            None => {
                self.hold_back();
                None
            }
        };

        if !self.state.is_game_over() {
            self.advance_turn();
        }
        Ok(report)
    }

    fn hold_back(&mut self) {
        let line = format!("{} holds back this turn.", self.state.opponent.name);
        self.state.push_log(line);
        self.state.record(Side::Opponent, BattleAction::Pass);
    }

    /// `side` concedes. Legal any time before game-over.
    pub fn surrender(&mut self, side: Side) -> Result<(), ActionError> {
        if self.state.is_game_over() {
            return Err(ActionError::GameOver);
        }
        let line = format!("{} surrenders.", self.state.combatant(side).name);
        self.state.push_log(line);
        self.state.record(side, BattleAction::Surrender);
        self.finish(side.opponent());
        Ok(())
    }

    /// Hand out the match outcome. Yields `Some` exactly once, after game-over.
    pub fn take_outcome(&mut self) -> Option<MatchOutcome> {
        let winner = self.state.winner()?;
        if !self.state.claim_outcome() {
            return None;
        }
        Some(MatchOutcome {
            winner,
            region: self.state.region.clone(),
            player_faction: self.state.player.faction,
            turn_number: self.state.turn_number,
        })
    }

    fn ensure_player_turn(&self) -> Result<(), ActionError> {
        match self.state.phase {
            Phase::PlayerTurn => Ok(()),
            Phase::OpponentPending => Err(ActionError::NotYourTurn { side: Side::Player }),
            Phase::GameOver { .. } => Err(ActionError::GameOver),
        }
    }

    /// Validate and resolve one card play. No mutation happens on rejection.
    fn play(&mut self, side: Side, card_id: &CardId) -> Result<PlayReport, ActionError> {
        let actor = self.state.combatant(side);
        let index = actor
            .hand_position(card_id)
            .ok_or_else(|| ActionError::CardNotInHand { card: card_id.clone() })?;
        let cost = actor.hand[index].cost;
        if cost > actor.mana {
            return Err(ActionError::InsufficientMana {
                required: cost,
                available: actor.mana,
            });
        }

        let max_health = self.config.starting_health;
        let actor = self.state.combatant_mut(side);
        let card = actor.hand.remove(index);
        actor.mana -= cost;
        actor.graveyard.push_back(card.clone());

        let effect = apply_card_effect(&card);
        actor.heal(effect.healing, max_health);
        let line = effect.describe(&actor.name, &card);

        let target = self.state.combatant_mut(side.opponent());
        target.take_damage(effect.damage);
        let lethal = target.is_defeated();

        debug!(%side, card = %card.id, damage = effect.damage, healing = effect.healing, "card resolved");
        self.state.push_log(line);
        self.state.record(side, BattleAction::PlayCard { card: card.id.clone() });

        if lethal {
            self.finish(side);
        }

        Ok(PlayReport {
            side,
            card,
            effect,
            lethal,
        })
    }

    /// Start the next turn: refill mana, draw for both seats.
    fn advance_turn(&mut self) {
        if self.state.player.is_defeated() {
            self.finish(Side::Opponent);
            return;
        }
        if self.state.opponent.is_defeated() {
            self.finish(Side::Player);
            return;
        }

        self.state.phase = Phase::PlayerTurn;
        self.state.turn_number += 1;
        let mana = self.config.mana_for_turn(self.state.turn_number);

        for side in Side::BOTH {
            self.state.combatant_mut(side).mana = mana;
            for _ in 0..self.config.cards_per_turn {
                self.draw(side);
            }
        }
    }

    fn draw(&mut self, side: Side) {
        let hand_cap = self.config.hand_cap;
        let seat = self.state.combatant_mut(side);
        let result = draw_card(&seat.hand, &seat.deck, &seat.graveyard, hand_cap, &mut self.rng);

        seat.hand = result.hand;
        seat.deck = result.deck;
        seat.graveyard = result.graveyard;

        if result.recycled {
            let line = format!("{} shuffles their graveyard back into their deck.", seat.name);
            self.state.push_log(line);
        }
    }

    fn finish(&mut self, winner: Side) {
        self.state.phase = Phase::GameOver { winner };
        let line = format!("{} wins the battle!", self.state.combatant(winner).name);
        self.state.push_log(line);
        info!(%winner, turn = self.state.turn_number, region = %self.state.region, "match over");
    }

    // === Checkpoints ===

    /// Encode the match (state, config and RNG position) as an explicit save point.
    pub fn checkpoint(&self) -> Result<Vec<u8>, PersistenceError> {
        let checkpoint = Checkpoint {
            config: self.config.clone(),
            state: self.state.clone(),
            rng: self.rng.state(),
        };
        Ok(bincode::serialize(&checkpoint)?)
    }

    /// Rebuild a match from `checkpoint` bytes.
    pub fn restore(bytes: &[u8], policy: P) -> Result<Self, PersistenceError> {
        let checkpoint: Checkpoint = bincode::deserialize(bytes)?;
        Ok(Self {
            config: checkpoint.config,
            state: checkpoint.state,
            rng: GameRng::from_state(&checkpoint.rng),
            policy,
        })
    }
}

#[derive(Serialize, Deserialize)]
struct Checkpoint {
    config: BattleConfig,
    state: MatchState,
    rng: GameRngState,
}
