//! Card definitions - immutable card values.
//!
//! A `Card` is a value object: decks hold copies, and nothing mutates a card
//! after it is built. Physical copies of the same template share a `name` but
//! carry distinct `CardId`s, which is how hands remove the exact card played.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Unique identifier of one physical card.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(pub String);

impl CardId {
    /// Create a new card ID.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// The two warring sides.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Faction {
    Angel,
    Demon,
}

impl Faction {
    /// Both factions, angels first.
    pub const ALL: [Faction; 2] = [Faction::Angel, Faction::Demon];

    /// The other faction.
    #[must_use]
    pub const fn opposite(self) -> Self {
        match self {
            Faction::Angel => Faction::Demon,
            Faction::Demon => Faction::Angel,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Faction::Angel => "angel",
            Faction::Demon => "demon",
        }
    }
}

impl std::fmt::Display for Faction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// What a card does when played.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CardKind {
    Creature,
    Spell,
    Equipment,
}

impl CardKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            CardKind::Creature => "creature",
            CardKind::Spell => "spell",
            CardKind::Equipment => "equipment",
        }
    }
}

/// Card rarity. Ordered from most to least common.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

impl Rarity {
    /// Copies of a template placed in a starter deck.
    #[must_use]
    pub const fn starter_copies(self) -> usize {
        match self {
            Rarity::Common => 3,
            Rarity::Rare => 2,
            Rarity::Epic | Rarity::Legendary => 1,
        }
    }
}

/// When an ability applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AbilityKind {
    /// Declared only; the battle engine never applies passives.
    Passive,
    Active,
    Triggered,
}

/// A named effect carried by a card.
///
/// `effect` is a tag such as `damage_3`, `heal_all_2` or `class_mage`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ability {
    pub name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub kind: AbilityKind,
    pub effect: String,
}

impl Ability {
    /// Create an ability with an empty description.
    pub fn new(name: impl Into<String>, kind: AbilityKind, effect: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            kind,
            effect: effect.into(),
        }
    }

    /// Set the description (builder pattern).
    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A single physical card.
///
/// ## Example
///
/// ```
/// use purge_ccg::cards::{Ability, AbilityKind, Card, CardKind, Faction, Rarity};
///
/// let flames = Card::new("f1", "Infernal Flames", Faction::Demon, CardKind::Spell, Rarity::Common, 2)
///     .with_ability(Ability::new("Burn", AbilityKind::Active, "damage_3"));
///
/// assert_eq!(flames.first_effect(), Some("damage_3"));
/// assert_eq!(flames.attack, None);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Card {
    pub id: CardId,
    pub name: String,
    #[serde(default)]
    pub description: String,
    pub faction: Faction,
    #[serde(rename = "type")]
    pub kind: CardKind,
    pub rarity: Rarity,
    pub cost: u32,
    #[serde(default)]
    pub attack: Option<u32>,
    #[serde(default)]
    pub health: Option<u32>,
    #[serde(default)]
    pub abilities: SmallVec<[Ability; 1]>,
}

impl Card {
    /// Create a card with no stats or abilities.
    pub fn new(
        id: impl Into<CardId>,
        name: impl Into<String>,
        faction: Faction,
        kind: CardKind,
        rarity: Rarity,
        cost: u32,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            description: String::new(),
            faction,
            kind,
            rarity,
            cost,
            attack: None,
            health: None,
            abilities: SmallVec::new(),
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    #[must_use]
    pub fn with_attack(mut self, attack: u32) -> Self {
        self.attack = Some(attack);
        self
    }

    #[must_use]
    pub fn with_health(mut self, health: u32) -> Self {
        self.health = Some(health);
        self
    }

    #[must_use]
    pub fn with_ability(mut self, ability: Ability) -> Self {
        self.abilities.push(ability);
        self
    }

    /// A copy of this card under a different id.
    #[must_use]
    pub fn with_id(&self, id: impl Into<CardId>) -> Self {
        Self {
            id: id.into(),
            ..self.clone()
        }
    }

    /// Effect tag of the first ability, if any.
    #[must_use]
    pub fn first_effect(&self) -> Option<&str> {
        self.abilities.first().map(|a| a.effect.as_str())
    }
}

impl From<String> for CardId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Player classes.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClassType {
    Mage,
    Warrior,
    Paladin,
    Necromancer,
    Shaman,
}

/// Declared class perks. Carried as data; combat does not apply them.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ClassBonus {
    pub name: &'static str,
    pub description: &'static str,
    pub health_bonus: u32,
    pub mana_bonus: u32,
    pub special_ability: &'static str,
}

impl ClassType {
    pub const ALL: [ClassType; 5] = [
        ClassType::Mage,
        ClassType::Warrior,
        ClassType::Paladin,
        ClassType::Necromancer,
        ClassType::Shaman,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            ClassType::Mage => "mage",
            ClassType::Warrior => "warrior",
            ClassType::Paladin => "paladin",
            ClassType::Necromancer => "necromancer",
            ClassType::Shaman => "shaman",
        }
    }

    /// The class perk table.
    #[must_use]
    pub const fn bonus(self) -> ClassBonus {
        match self {
            ClassType::Mage => ClassBonus {
                name: "Mage",
                description: "Master of elemental spells",
                health_bonus: 0,
                mana_bonus: 2,
                special_ability: "Spells +1 damage",
            },
            ClassType::Warrior => ClassBonus {
                name: "Warrior",
                description: "Close-quarters fighter",
                health_bonus: 5,
                mana_bonus: 0,
                special_ability: "Creatures +1 attack",
            },
            ClassType::Paladin => ClassBonus {
                name: "Paladin",
                description: "Sacred protector",
                health_bonus: 3,
                mana_bonus: 1,
                special_ability: "Healing spells +2",
            },
            ClassType::Necromancer => ClassBonus {
                name: "Necromancer",
                description: "Master of the undead",
                health_bonus: 1,
                mana_bonus: 1,
                special_ability: "Summons skeletons",
            },
            ClassType::Shaman => ClassBonus {
                name: "Shaman",
                description: "Balance of nature and magic",
                health_bonus: 2,
                mana_bonus: 1,
                special_ability: "Buffs last +1 turn",
            },
        }
    }
}

impl std::fmt::Display for ClassType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
