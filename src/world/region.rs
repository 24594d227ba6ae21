//! Regions of the world map and their control scores.

use serde::{Deserialize, Serialize};

use crate::cards::Faction;
use crate::core::WorldConfig;

/// Region identifier, e.g. `neutral_plains`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegionId(String);

impl RegionId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for RegionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for RegionId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for RegionId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Flavour perk attached to a region. Carried as data only.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionBonus {
    pub name: String,
    pub description: String,
    pub effect: String,
    pub value: u32,
}

impl RegionBonus {
    pub fn new(name: &str, description: &str, effect: &str, value: u32) -> Self {
        Self {
            name: name.to_string(),
            description: description.to_string(),
            effect: effect.to_string(),
            value,
        }
    }
}

/// Normalised map position in `[0, 1]`.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub x: f64,
    pub y: f64,
}

/// Rounded percentage shares of a region's control points.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ControlSplit {
    pub angel: u32,
    pub demon: u32,
}

/// A contested map region.
///
/// Scores are `f64` because a loss halves the winner's gain, so odd gains
/// leave half points behind.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Region {
    pub id: RegionId,
    pub name: String,
    pub description: String,
    pub controlling_faction: Option<Faction>,
    pub angel_points: f64,
    pub demon_points: f64,
    pub bonus: RegionBonus,
    pub coordinates: Coordinates,
    pub is_locked: bool,
}

impl Region {
    #[must_use]
    pub fn points(&self, faction: Faction) -> f64 {
        match faction {
            Faction::Angel => self.angel_points,
            Faction::Demon => self.demon_points,
        }
    }

    fn points_mut(&mut self, faction: Faction) -> &mut f64 {
        match faction {
            Faction::Angel => &mut self.angel_points,
            Faction::Demon => &mut self.demon_points,
        }
    }

    /// Credit a victory: the winner gains `points`, the loser drops half as
    /// much, both scores stay within `[0, max_points]`, then control is
    /// recomputed. Non-finite points leave the region untouched.
    pub fn update_control(&mut self, winner: Faction, points: f64, config: &WorldConfig) {
        if !points.is_finite() {
            return;
        }
        let max = config.max_points;

        let gained = self.points_mut(winner);
        *gained = (*gained + points).clamp(0.0, max);

        let lost = self.points_mut(winner.opposite());
        *lost = (*lost - points / 2.0).clamp(0.0, max);

        self.recompute_control(config);
    }

    /// Derive `controlling_faction` from the scores.
    pub fn recompute_control(&mut self, config: &WorldConfig) {
        self.controlling_faction = if self.angel_points > self.demon_points + config.control_margin {
            Some(Faction::Angel)
        } else if self.demon_points > self.angel_points + config.control_margin {
            Some(Faction::Demon)
        } else {
            None
        };
    }

    /// Reset both scores to `score` and clear control.
    pub fn neutralize(&mut self, score: f64) {
        self.angel_points = score;
        self.demon_points = score;
        self.controlling_faction = None;
    }

    /// Rounded share of the combined points held by each faction.
    #[must_use]
    pub fn control_split(&self) -> ControlSplit {
        let total = self.angel_points + self.demon_points;
        if total <= 0.0 {
            return ControlSplit { angel: 50, demon: 50 };
        }
        let share = |points: f64| (points / total * 100.0).round() as u32;
        ControlSplit {
            angel: share(self.angel_points),
            demon: share(self.demon_points),
        }
    }
}

/// Fixed starting map: six regions, the ruins locked.
#[must_use]
pub fn initial_regions() -> Vec<Region> {
    let region = |id: &str,
                  name: &str,
                  description: &str,
                  (angel, demon): (f64, f64),
                  controlling: Option<Faction>,
                  bonus: RegionBonus,
                  (x, y): (f64, f64),
                  is_locked: bool| Region {
        id: RegionId::new(id),
        name: name.to_string(),
        description: description.to_string(),
        controlling_faction: controlling,
        angel_points: angel,
        demon_points: demon,
        bonus,
        coordinates: Coordinates { x, y },
        is_locked,
    };

    vec![
        region(
            "celestial_city",
            "Celestial City",
            "Fortress of the angels above the clouds",
            (80.0, 20.0),
            Some(Faction::Angel),
            RegionBonus::new("Divine Blessing", "All angels gain +1 health", "angel_health_boost", 1),
            (0.2, 0.1),
            false,
        ),
        region(
            "infernal_mountains",
            "Infernal Mountains",
            "Volcanic peaks ruled by demons",
            (15.0, 85.0),
            Some(Faction::Demon),
            RegionBonus::new("Infernal Rage", "All demons gain +1 attack", "demon_attack_boost", 1),
            (0.8, 0.9),
            false,
        ),
        region(
            "neutral_plains",
            "Neutral Plains",
            "Territory disputed between the factions",
            (45.0, 55.0),
            None,
            RegionBonus::new("Balance", "All cards cost 1 less mana", "mana_discount", 1),
            (0.5, 0.5),
            false,
        ),
        region(
            "ethereal_forest",
            "Ethereal Forest",
            "Mystic woods of shifting energies",
            (60.0, 40.0),
            Some(Faction::Angel),
            RegionBonus::new("Magical Growth", "Draw an extra card each turn", "extra_draw", 1),
            (0.3, 0.7),
            false,
        ),
        region(
            "cursed_wasteland",
            "Cursed Wasteland",
            "A desert corrupted by dark magic",
            (25.0, 75.0),
            Some(Faction::Demon),
            RegionBonus::new("Curse", "Spells deal +1 damage", "spell_damage_boost", 1),
            (0.7, 0.3),
            false,
        ),
        region(
            "ancient_ruins",
            "Ancient Ruins",
            "Remains of a forgotten civilisation",
            (50.0, 50.0),
            None,
            RegionBonus::new("Ancient Knowledge", "Gain +50% experience", "experience_boost", 50),
            (0.6, 0.2),
            true,
        ),
    ]
}
