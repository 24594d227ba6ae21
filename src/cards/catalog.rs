//! Starter card pools and starter-deck construction.
//!
//! Each faction has five base templates; every class adds one class card.
//! Template order is load-bearing: copies are generated in template order and
//! the result is truncated, so list order (not randomness) decides which
//! copies survive the cap.

use super::definition::{Ability, AbilityKind, Card, CardKind, ClassType, Faction, Rarity};
use crate::core::DeckRules;

/// The five base templates for a faction, in declaration order.
///
/// Template ids are placeholders; decks assign real ids per copy.
#[must_use]
pub fn faction_templates(faction: Faction) -> Vec<Card> {
    match faction {
        Faction::Angel => vec![
            Card::new("tpl", "Guardian Angel", faction, CardKind::Creature, Rarity::Common, 2)
                .with_description("A loyal celestial protector")
                .with_attack(2)
                .with_health(3)
                .with_ability(
                    Ability::new("Protection", AbilityKind::Passive, "ally_health_boost")
                        .with_description("+1 health to allies"),
                ),
            Card::new("tpl", "Divine Ray", faction, CardKind::Spell, Rarity::Common, 1)
                .with_description("Purifying light")
                .with_ability(
                    Ability::new("Heal", AbilityKind::Active, "heal_3")
                        .with_description("Restores 3 health"),
                ),
            Card::new("tpl", "Sacred Sword", faction, CardKind::Equipment, Rarity::Rare, 3)
                .with_description("A weapon blessed by the heavens")
                .with_attack(3)
                .with_ability(
                    Ability::new("Blessing", AbilityKind::Passive, "demon_damage_boost")
                        .with_description("+2 damage against demons"),
                ),
            Card::new("tpl", "Seraph", faction, CardKind::Creature, Rarity::Epic, 5)
                .with_description("A high-ranking angel")
                .with_attack(4)
                .with_health(5)
                .with_ability(
                    Ability::new("Flight", AbilityKind::Passive, "unblockable")
                        .with_description("Cannot be blocked"),
                ),
            Card::new("tpl", "Mass Healing", faction, CardKind::Spell, Rarity::Rare, 4)
                .with_description("Heals every ally")
                .with_ability(
                    Ability::new("Global Heal", AbilityKind::Active, "heal_all_2")
                        .with_description("Restores 2 health to all allies"),
                ),
        ],
        Faction::Demon => vec![
            Card::new("tpl", "Imp", faction, CardKind::Creature, Rarity::Common, 1)
                .with_description("A small, spiteful demon")
                .with_attack(2)
                .with_health(1)
                .with_ability(
                    Ability::new("Haste", AbilityKind::Passive, "haste")
                        .with_description("Can attack immediately"),
                ),
            Card::new("tpl", "Infernal Flames", faction, CardKind::Spell, Rarity::Common, 2)
                .with_description("Fire from the abyss")
                .with_ability(
                    Ability::new("Burn", AbilityKind::Active, "damage_3")
                        .with_description("Deals 3 damage"),
                ),
            Card::new("tpl", "Demonic Claw", faction, CardKind::Equipment, Rarity::Rare, 3)
                .with_description("A cursed weapon")
                .with_attack(3)
                .with_ability(
                    Ability::new("Corruption", AbilityKind::Passive, "angel_damage_boost")
                        .with_description("+2 damage against angels"),
                ),
            Card::new("tpl", "Greater Demon", faction, CardKind::Creature, Rarity::Epic, 6)
                .with_description("Lord of the underworld")
                .with_attack(6)
                .with_health(4)
                .with_ability(
                    Ability::new("Intimidate", AbilityKind::Passive, "intimidate")
                        .with_description("Reduces enemy attack by 1"),
                ),
            Card::new("tpl", "Firestorm", faction, CardKind::Spell, Rarity::Rare, 5)
                .with_description("Destroys everything in its path")
                .with_ability(
                    Ability::new("Destruction", AbilityKind::Active, "damage_all_2")
                        .with_description("Deals 2 damage to every enemy"),
                ),
        ],
    }
}

/// The class-specific card added to every starter deck.
///
/// Epic rarity, so exactly one copy lands in the deck.
#[must_use]
pub fn class_card(faction: Faction, class: ClassType) -> Card {
    let bonus = class.bonus();
    Card::new("tpl", format!("{} Special", bonus.name), faction, CardKind::Spell, Rarity::Epic, 2)
        .with_description(bonus.special_ability)
        .with_ability(
            Ability::new(bonus.name, AbilityKind::Active, format!("class_{class}"))
                .with_description(bonus.special_ability),
        )
}

/// Build a starter deck with the default deck rules.
///
/// ```
/// use purge_ccg::cards::{create_starter_deck, ClassType, Faction};
///
/// let deck = create_starter_deck(Faction::Angel, ClassType::Mage);
/// assert!(deck.len() <= 20);
/// assert_eq!(deck.iter().filter(|c| c.first_effect() == Some("class_mage")).count(), 1);
/// ```
#[must_use]
pub fn create_starter_deck(faction: Faction, class: ClassType) -> Vec<Card> {
    create_starter_deck_with(faction, class, &DeckRules::default())
}

/// Build a starter deck: base templates then the class card, each copied by
/// rarity, truncated to `rules.starter_deck_size`.
#[must_use]
pub fn create_starter_deck_with(faction: Faction, class: ClassType, rules: &DeckRules) -> Vec<Card> {
    let mut templates = faction_templates(faction);
    templates.push(class_card(faction, class));

    templates
        .iter()
        .enumerate()
        .flat_map(|(index, template)| {
            (0..template.rarity.starter_copies())
                .map(move |copy| template.with_id(format!("{faction}_{class}_{index}_{copy}")))
        })
        .take(rules.starter_deck_size)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rustc_hash::{FxHashMap, FxHashSet};

    #[test]
    fn test_each_faction_has_five_templates() {
        for faction in Faction::ALL {
            let templates = faction_templates(faction);
            assert_eq!(templates.len(), 5);
            assert!(templates.iter().all(|c| c.faction == faction));
        }
    }

    #[test]
    fn test_starter_deck_composition() {
        let deck = create_starter_deck(Faction::Angel, ClassType::Mage);

        // 3 + 3 + 2 + 1 + 2 + 1
        assert_eq!(deck.len(), 12);
        assert_eq!(deck[0].name, "Guardian Angel");
        assert_eq!(deck[11].name, "Mage Special");

        let class_cards = deck.iter().filter(|c| c.first_effect() == Some("class_mage")).count();
        assert_eq!(class_cards, 1);
    }

    #[test]
    fn test_starter_deck_copy_limit_and_unique_ids() {
        for faction in Faction::ALL {
            for class in ClassType::ALL {
                let deck = create_starter_deck(faction, class);
                assert!(deck.len() <= 20);

                let mut by_name: FxHashMap<&str, usize> = FxHashMap::default();
                for card in &deck {
                    *by_name.entry(card.name.as_str()).or_default() += 1;
                }
                assert!(by_name.values().all(|&n| n <= 3));

                let ids: FxHashSet<_> = deck.iter().map(|c| &c.id).collect();
                assert_eq!(ids.len(), deck.len());
            }
        }
    }

    #[test]
    fn test_starter_deck_is_deterministic() {
        let a = create_starter_deck(Faction::Demon, ClassType::Shaman);
        let b = create_starter_deck(Faction::Demon, ClassType::Shaman);
        assert_eq!(a, b);
    }

    #[test]
    fn test_truncation_keeps_template_order() {
        let rules = DeckRules {
            starter_deck_size: 5,
            ..DeckRules::default()
        };
        let deck = create_starter_deck_with(Faction::Demon, ClassType::Warrior, &rules);

        let names: Vec<_> = deck.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(
            names,
            vec!["Imp", "Imp", "Imp", "Infernal Flames", "Infernal Flames"]
        );
        assert_eq!(deck[4].id.as_str(), "demon_warrior_1_1");
    }
}
