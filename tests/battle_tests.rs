//! Battle scenario tests.
//!
//! Full matches driven through the public API:
//! - Scripted lethal races
//! - Seeded random matches always terminate with a consistent state
//! - Replays from the same seed are identical

use purge_ccg::battle::{Battle, BattleBuilder, OpponentPolicy, Phase, RandomAffordable, Side};
use purge_ccg::cards::{create_starter_deck, Card, CardId, CardKind, ClassType, Faction, Pile, Rarity};
use purge_ccg::core::{ActionError, BattleConfig, GameRng};

fn attackers(prefix: &str, faction: Faction, attack: u32) -> Vec<Card> {
    (0..20)
        .map(|i| {
            Card::new(format!("{prefix}{i}"), "Striker", faction, CardKind::Creature, Rarity::Common, 1)
                .with_attack(attack)
        })
        .collect()
}

fn cheapest(hand: &Pile, mana: u32) -> Option<CardId> {
    hand.iter()
        .filter(|c| c.cost <= mana)
        .min_by_key(|c| c.cost)
        .map(|c| c.id.clone())
}

/// Human plays the cheapest affordable card, otherwise passes.
fn human_turn<P: OpponentPolicy>(battle: &mut Battle<P>) {
    let state = battle.state();
    match cheapest(&state.player.hand, state.player.mana) {
        Some(card) => {
            battle.play_card(&card).unwrap();
        }
        None => battle.pass_turn().unwrap(),
    }
}

fn play_out<P: OpponentPolicy>(battle: &mut Battle<P>, max_turns: u32) {
    while !battle.is_game_over() && battle.state().turn_number <= max_turns {
        human_turn(battle);
        if !battle.is_game_over() {
            battle.resolve_opponent_turn().unwrap();
        }
    }
}

fn starter_battle(seed: u64) -> Battle<RandomAffordable> {
    BattleBuilder::new("neutral_plains")
        .player("Aria", Faction::Angel, create_starter_deck(Faction::Angel, ClassType::Paladin))
        .opponent("Baal", Faction::Demon, create_starter_deck(Faction::Demon, ClassType::Shaman))
        .build(seed)
}

/// The side that hits harder wins and the outcome is handed out once.
#[test]
fn test_stronger_side_wins() {
    let mut battle = BattleBuilder::new("cursed_wasteland")
        .player("Aria", Faction::Angel, attackers("p", Faction::Angel, 5))
        .opponent("Baal", Faction::Demon, attackers("o", Faction::Demon, 1))
        .build_with(GameRng::new(1), cheapest);

    play_out(&mut battle, 50);

    assert_eq!(battle.winner(), Some(Side::Player));
    // 30 health at 5 a turn: the sixth player play is lethal
    assert_eq!(battle.state().turn_number, 6);
    assert_eq!(battle.state().opponent.health, 0);
    assert_eq!(battle.state().player.health, 25);

    let outcome = battle.take_outcome().unwrap();
    assert_eq!(outcome.region.as_str(), "cursed_wasteland");
    assert!(battle.take_outcome().is_none());
}

/// Seeded random matches always finish and never break the health bounds.
#[test]
fn test_random_matches_terminate() {
    for seed in 0..25 {
        let mut battle = starter_battle(seed);
        play_out(&mut battle, 200);

        let state = battle.state();
        assert!(battle.is_game_over(), "seed {seed} did not finish");
        assert!(state.player.health <= 30 && state.opponent.health <= 30);
        assert_eq!(state.player.card_count(), 12);
        assert_eq!(state.opponent.card_count(), 12);
        assert!(state.player.hand.len() <= 7);

        let loser = battle.winner().unwrap().opponent();
        assert_eq!(state.combatant(loser).health, 0);
    }
}

/// The same seed and inputs replay the same log.
#[test]
fn test_replay_is_deterministic() {
    let mut a = starter_battle(314);
    let mut b = starter_battle(314);
    play_out(&mut a, 200);
    play_out(&mut b, 200);

    assert_eq!(a.state().log, b.state().log);
    assert_eq!(a.state().history, b.state().history);
}

/// A restored checkpoint continues exactly like the original.
#[test]
fn test_checkpoint_midgame() {
    let mut a = starter_battle(2024);
    for _ in 0..3 {
        human_turn(&mut a);
        a.resolve_opponent_turn().unwrap();
    }

    let mut b = Battle::restore(&a.checkpoint().unwrap(), RandomAffordable).unwrap();
    play_out(&mut a, 200);
    play_out(&mut b, 200);

    assert_eq!(a.state(), b.state());
}

/// Nothing but surrender is accepted after game over.
#[test]
fn test_actions_after_game_over() {
    let mut battle = starter_battle(5);
    battle.surrender(Side::Player).unwrap();

    assert_eq!(battle.state().phase, Phase::GameOver { winner: Side::Opponent });
    assert_eq!(battle.pass_turn(), Err(ActionError::GameOver));
    assert_eq!(battle.resolve_opponent_turn(), Err(ActionError::GameOver));
    assert_eq!(battle.surrender(Side::Opponent), Err(ActionError::GameOver));
}

/// Mana follows the turn number up to the configured cap.
#[test]
fn test_mana_curve() {
    let config = BattleConfig::default().with_max_mana(4);
    let mut battle = BattleBuilder::new("neutral_plains")
        .config(config)
        .player("Aria", Faction::Angel, attackers("p", Faction::Angel, 0))
        .opponent("Baal", Faction::Demon, attackers("o", Faction::Demon, 0))
        .build(9);

    let mut seen = Vec::new();
    for _ in 0..6 {
        seen.push(battle.state().player.mana);
        battle.pass_turn().unwrap();
        battle.resolve_opponent_turn().unwrap();
    }
    assert_eq!(seen, vec![1, 2, 3, 4, 4, 4]);
}
