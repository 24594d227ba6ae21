//! Scripted opponents.

use serde::{Deserialize, Serialize};

use crate::cards::{create_starter_deck, Card, ClassType, Faction};
use crate::core::GameRng;

const ANGEL_NAMES: [&str; 5] = ["Gabriel", "Michael", "Raphael", "Uriel", "Zadkiel"];
const DEMON_NAMES: [&str; 5] = ["Baal", "Malphas", "Belial", "Asmodeus", "Valefor"];

/// Highest level a generated bot can have.
pub const MAX_BOT_LEVEL: u32 = 10;

/// A generated opponent. Cosmetic apart from its deck.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BotPlayer {
    pub id: String,
    pub username: String,
    pub faction: Faction,
    #[serde(rename = "class")]
    pub class_type: ClassType,
    pub level: u32,
    pub deck: Vec<Card>,
    pub is_bot: bool,
}

impl BotPlayer {
    /// Roll a bot. Without a faction, one is picked by coin flip.
    pub fn generate(faction: Option<Faction>, rng: &mut GameRng) -> Self {
        let faction = faction.unwrap_or_else(|| {
            if rng.gen_bool(0.5) {
                Faction::Angel
            } else {
                Faction::Demon
            }
        });
        let names = match faction {
            Faction::Angel => &ANGEL_NAMES,
            Faction::Demon => &DEMON_NAMES,
        };

        let class_type = ClassType::ALL[rng.gen_range_usize(0..ClassType::ALL.len())];
        let username = names[rng.gen_range_usize(0..names.len())].to_string();
        let level = rng.gen_range(1..MAX_BOT_LEVEL + 1);
        let id = format!("bot_{:08x}", rng.gen_range(0..u32::MAX));

        Self {
            id,
            username,
            faction,
            class_type,
            level,
            deck: create_starter_deck(faction, class_type),
            is_bot: true,
        }
    }
}
