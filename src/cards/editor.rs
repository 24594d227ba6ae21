//! Deck editing: copy limits, size bounds, stats and collection filtering.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardId, CardKind, Rarity};
use crate::core::{DeckError, DeckRules};

/// An in-progress deck edit.
///
/// Edits apply to a working copy; `reset` restores the deck the editor was
/// opened with and `finish` validates the minimum size.
#[derive(Clone, Debug)]
pub struct DeckEditor {
    rules: DeckRules,
    original: Vec<Card>,
    cards: Vec<Card>,
}

impl DeckEditor {
    /// Open an editor on an existing deck.
    #[must_use]
    pub fn new(deck: Vec<Card>, rules: DeckRules) -> Self {
        Self {
            rules,
            original: deck.clone(),
            cards: deck,
        }
    }

    /// Cards currently in the working deck.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Copies of `name` in the working deck.
    #[must_use]
    pub fn copies_of(&self, name: &str) -> usize {
        self.cards.iter().filter(|c| c.name == name).count()
    }

    /// Add a card, enforcing the size cap and per-name copy limit.
    pub fn add(&mut self, card: Card) -> Result<(), DeckError> {
        if self.cards.len() >= self.rules.max_deck_size {
            return Err(DeckError::DeckFull {
                max: self.rules.max_deck_size,
            });
        }
        if self.copies_of(&card.name) >= self.rules.max_copies {
            return Err(DeckError::TooManyCopies {
                name: card.name,
                max: self.rules.max_copies,
            });
        }
        self.cards.push(card);
        Ok(())
    }

    /// Remove the card with this id.
    pub fn remove(&mut self, id: &CardId) -> Result<Card, DeckError> {
        let index = self
            .cards
            .iter()
            .position(|c| &c.id == id)
            .ok_or_else(|| DeckError::CardNotInDeck { card: id.clone() })?;
        Ok(self.cards.remove(index))
    }

    /// Discard all edits.
    pub fn reset(&mut self) {
        self.cards = self.original.clone();
    }

    /// Validate and return the edited deck.
    pub fn finish(self) -> Result<Vec<Card>, DeckError> {
        if self.cards.len() < self.rules.min_deck_size {
            return Err(DeckError::TooFewCards {
                min: self.rules.min_deck_size,
                actual: self.cards.len(),
            });
        }
        Ok(self.cards)
    }
}

/// Summary numbers for a deck.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DeckStats {
    pub total_cards: usize,
    pub average_cost: f64,
    pub by_kind: FxHashMap<CardKind, usize>,
    pub by_rarity: FxHashMap<Rarity, usize>,
}

impl DeckStats {
    #[must_use]
    pub fn of(cards: &[Card]) -> Self {
        let mut stats = Self {
            total_cards: cards.len(),
            ..Self::default()
        };
        if cards.is_empty() {
            return stats;
        }

        let total_cost: u32 = cards.iter().map(|c| c.cost).sum();
        stats.average_cost = f64::from(total_cost) / cards.len() as f64;

        for card in cards {
            *stats.by_kind.entry(card.kind).or_default() += 1;
            *stats.by_rarity.entry(card.rarity).or_default() += 1;
        }
        stats
    }

    #[must_use]
    pub fn count_kind(&self, kind: CardKind) -> usize {
        self.by_kind.get(&kind).copied().unwrap_or(0)
    }

    #[must_use]
    pub fn count_rarity(&self, rarity: Rarity) -> usize {
        self.by_rarity.get(&rarity).copied().unwrap_or(0)
    }
}

/// Sort order for card listings.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    #[default]
    Name,
    Cost,
    /// Rarest first.
    Rarity,
    Kind,
}

/// Listing filter.
#[derive(Clone, Debug, Default)]
pub struct CardFilter {
    pub kind: Option<CardKind>,
    /// Case-insensitive substring of the card name.
    pub query: Option<String>,
    pub sort: SortKey,
}

/// Filter and sort a card listing.
#[must_use]
pub fn filter_cards(cards: &[Card], filter: &CardFilter) -> Vec<Card> {
    let query = filter.query.as_deref().map(str::to_lowercase);

    let mut out: Vec<Card> = cards
        .iter()
        .filter(|c| filter.kind.map_or(true, |k| c.kind == k))
        .filter(|c| {
            query
                .as_deref()
                .map_or(true, |q| q.is_empty() || c.name.to_lowercase().contains(q))
        })
        .cloned()
        .collect();

    match filter.sort {
        SortKey::Name => out.sort_by(|a, b| a.name.cmp(&b.name)),
        SortKey::Cost => out.sort_by_key(|c| c.cost),
        SortKey::Rarity => out.sort_by(|a, b| b.rarity.cmp(&a.rarity)),
        SortKey::Kind => out.sort_by_key(|c| c.kind.as_str()),
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{create_starter_deck, ClassType, Faction};

    fn card(id: &str, name: &str, kind: CardKind, rarity: Rarity, cost: u32) -> Card {
        Card::new(id, name, Faction::Demon, kind, rarity, cost)
    }

    fn filler(n: usize) -> Vec<Card> {
        (0..n)
            .map(|i| card(&format!("f{i}"), &format!("Filler {i}"), CardKind::Creature, Rarity::Common, 1))
            .collect()
    }

    #[test]
    fn test_add_respects_copy_limit() {
        let mut editor = DeckEditor::new(Vec::new(), DeckRules::default());
        for i in 0..3 {
            editor.add(card(&format!("i{i}"), "Imp", CardKind::Creature, Rarity::Common, 1)).unwrap();
        }

        let err = editor
            .add(card("i3", "Imp", CardKind::Creature, Rarity::Common, 1))
            .unwrap_err();
        assert_eq!(err, DeckError::TooManyCopies { name: "Imp".into(), max: 3 });
        assert_eq!(editor.copies_of("Imp"), 3);
    }

    #[test]
    fn test_add_respects_max_size() {
        let mut editor = DeckEditor::new(filler(30), DeckRules::default());
        let err = editor
            .add(card("x", "Extra", CardKind::Spell, Rarity::Rare, 2))
            .unwrap_err();
        assert_eq!(err, DeckError::DeckFull { max: 30 });
    }

    #[test]
    fn test_remove_by_id_with_duplicate_names() {
        let deck = create_starter_deck(Faction::Angel, ClassType::Paladin);
        let target = deck[1].id.clone();
        let mut editor = DeckEditor::new(deck, DeckRules::default());

        let removed = editor.remove(&target).unwrap();
        assert_eq!(removed.id, target);
        assert_eq!(editor.copies_of("Guardian Angel"), 2);
        assert!(editor.remove(&target).is_err());
    }

    #[test]
    fn test_finish_enforces_minimum() {
        let editor = DeckEditor::new(filler(19), DeckRules::default());
        assert_eq!(
            editor.finish().unwrap_err(),
            DeckError::TooFewCards { min: 20, actual: 19 }
        );

        let editor = DeckEditor::new(filler(20), DeckRules::default());
        assert_eq!(editor.finish().unwrap().len(), 20);
    }

    #[test]
    fn test_reset_restores_original() {
        let mut editor = DeckEditor::new(filler(20), DeckRules::default());
        editor.remove(&CardId::new("f0")).unwrap();
        editor.add(card("n", "New", CardKind::Spell, Rarity::Epic, 4)).unwrap();

        editor.reset();
        assert_eq!(editor.cards(), filler(20).as_slice());
    }

    #[test]
    fn test_stats() {
        let deck = create_starter_deck(Faction::Angel, ClassType::Mage);
        let stats = DeckStats::of(&deck);

        assert_eq!(stats.total_cards, 12);
        assert_eq!(stats.count_kind(CardKind::Creature), 4);
        assert_eq!(stats.count_kind(CardKind::Spell), 6);
        assert_eq!(stats.count_kind(CardKind::Equipment), 2);
        assert_eq!(stats.count_rarity(Rarity::Common), 6);
        assert_eq!(stats.count_rarity(Rarity::Legendary), 0);

        // (2*3 + 1*3 + 3*2 + 5 + 4*2 + 2) / 12
        assert!((stats.average_cost - 30.0 / 12.0).abs() < 1e-9);
    }

    #[test]
    fn test_stats_empty() {
        let stats = DeckStats::of(&[]);
        assert_eq!(stats.total_cards, 0);
        assert_eq!(stats.average_cost, 0.0);
    }

    #[test]
    fn test_filter_and_sort() {
        let cards = vec![
            card("a", "Firestorm", CardKind::Spell, Rarity::Rare, 5),
            card("b", "Imp", CardKind::Creature, Rarity::Common, 1),
            card("c", "Infernal Flames", CardKind::Spell, Rarity::Common, 2),
            card("d", "Greater Demon", CardKind::Creature, Rarity::Epic, 6),
        ];

        let spells = filter_cards(
            &cards,
            &CardFilter { kind: Some(CardKind::Spell), sort: SortKey::Cost, ..CardFilter::default() },
        );
        let names: Vec<_> = spells.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Infernal Flames", "Firestorm"]);

        let searched = filter_cards(
            &cards,
            &CardFilter { query: Some("IN".into()), ..CardFilter::default() },
        );
        let names: Vec<_> = searched.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["Infernal Flames"]);

        let by_rarity = filter_cards(&cards, &CardFilter { sort: SortKey::Rarity, ..CardFilter::default() });
        assert_eq!(by_rarity[0].name, "Greater Demon");
        assert_eq!(by_rarity[1].name, "Firestorm");
    }
}
