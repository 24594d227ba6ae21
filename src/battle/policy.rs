//! Opponent policies: how the scripted seat picks its card.

use crate::cards::{CardId, Pile};
use crate::core::GameRng;

/// Chooses which card the scripted opponent plays.
///
/// Returning `None` means the opponent takes no action this turn. Naming an
/// unaffordable or missing card has the same effect: the engine logs the
/// rejection and the opponent holds back.
pub trait OpponentPolicy {
    fn choose_card(&self, hand: &Pile, mana: u32, rng: &mut GameRng) -> Option<CardId>;
}

/// Uniform choice among affordable cards.
#[derive(Clone, Copy, Debug, Default)]
pub struct RandomAffordable;

impl OpponentPolicy for RandomAffordable {
    fn choose_card(&self, hand: &Pile, mana: u32, rng: &mut GameRng) -> Option<CardId> {
        let affordable: Vec<&CardId> = hand
            .iter()
            .filter(|c| c.cost <= mana)
            .map(|c| &c.id)
            .collect();
        rng.choose(&affordable).map(|id| (*id).clone())
    }
}

impl<F> OpponentPolicy for F
where
    F: Fn(&Pile, u32) -> Option<CardId>,
{
    fn choose_card(&self, hand: &Pile, mana: u32, _rng: &mut GameRng) -> Option<CardId> {
        self(hand, mana)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardKind, Faction, Rarity};

    fn hand() -> Pile {
        [("a", 1), ("b", 4), ("c", 2)]
            .into_iter()
            .map(|(id, cost)| Card::new(id, id, Faction::Demon, CardKind::Creature, Rarity::Common, cost))
            .collect()
    }

    #[test]
    fn test_only_affordable_cards_chosen() {
        let mut rng = GameRng::new(5);
        for _ in 0..50 {
            let id = RandomAffordable.choose_card(&hand(), 2, &mut rng).unwrap();
            assert!(id.as_str() == "a" || id.as_str() == "c");
        }
    }

    #[test]
    fn test_nothing_affordable() {
        let mut rng = GameRng::new(5);
        assert_eq!(RandomAffordable.choose_card(&hand(), 0, &mut rng), None);
    }

    #[test]
    fn test_choice_covers_all_affordable() {
        let mut rng = GameRng::new(8);
        let picks: std::collections::BTreeSet<_> = (0..100)
            .filter_map(|_| RandomAffordable.choose_card(&hand(), 4, &mut rng))
            .collect();
        assert_eq!(picks.len(), 3);
    }

    #[test]
    fn test_closure_policy() {
        let cheapest = |hand: &Pile, mana: u32| {
            hand.iter()
                .filter(|c| c.cost <= mana)
                .min_by_key(|c| c.cost)
                .map(|c| c.id.clone())
        };
        let mut rng = GameRng::new(0);
        assert_eq!(cheapest.choose_card(&hand(), 10, &mut rng), Some(CardId::new("a")));
    }
}
