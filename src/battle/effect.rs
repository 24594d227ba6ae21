//! Card effect resolution.
//!
//! Only one-shot effects are modelled: creatures and equipment hit for their
//! attack, spells read the first ability's tag. Passive abilities and
//! persistent equipment are carried on cards but never applied here.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardKind};

/// Amount used when a spell tag has no readable number.
pub const DEFAULT_SPELL_AMOUNT: u32 = 3;

/// Damage dealt to the opposing seat and healing granted to the caster.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardEffect {
    pub damage: u32,
    pub healing: u32,
}

/// Resolve the effect of playing `card`.
///
/// Spell tags: a tag containing `damage` deals, else one containing `heal`
/// heals, the leading integer after the first `_` (e.g. `damage_3`).
/// Unreadable amounts fall back to `DEFAULT_SPELL_AMOUNT`, so `damage_all_2`
/// deals 3.
#[must_use]
pub fn apply_card_effect(card: &Card) -> CardEffect {
    match card.kind {
        CardKind::Creature | CardKind::Equipment => CardEffect {
            damage: card.attack.unwrap_or(0),
            healing: 0,
        },
        CardKind::Spell => match card.first_effect() {
            Some(tag) if tag.contains("damage") => CardEffect {
                damage: tag_amount(tag),
                healing: 0,
            },
            Some(tag) if tag.contains("heal") => CardEffect {
                damage: 0,
                healing: tag_amount(tag),
            },
            _ => CardEffect::default(),
        },
    }
}

/// Leading digits of the segment after the first `_`, so `damage_5x` reads 5.
fn tag_amount(tag: &str) -> u32 {
    tag.split('_')
        .nth(1)
        .and_then(|segment| {
            let end = segment
                .find(|c: char| !c.is_ascii_digit())
                .unwrap_or(segment.len());
            segment[..end].parse().ok()
        })
        .unwrap_or(DEFAULT_SPELL_AMOUNT)
}

impl CardEffect {
    /// Battle-log line for `caster` playing `card` with this effect.
    #[must_use]
    pub fn describe(&self, caster: &str, card: &Card) -> String {
        match card.kind {
            CardKind::Creature => {
                format!("{caster} plays {} and attacks for {} damage!", card.name, self.damage)
            }
            CardKind::Equipment => format!(
                "{caster} plays {} and equips a weapon (+{} attack)!",
                card.name, self.damage
            ),
            CardKind::Spell if self.damage > 0 => {
                format!("{caster} plays {} and deals {} damage!", card.name, self.damage)
            }
            CardKind::Spell if self.healing > 0 => {
                format!("{caster} plays {} and heals {} health!", card.name, self.healing)
            }
            CardKind::Spell => format!("{caster} plays {}.", card.name),
        }
    }
}
