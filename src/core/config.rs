//! Tunable constants for battles, progression, deck building and the world map.
//!
//! Every table has a `Default` matching the shipped game and builder-style
//! setters for tests. `GameConfig` bundles them and can be read from JSON;
//! missing fields fall back to their defaults.

use serde::{Deserialize, Serialize};

/// Rules for a single match.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct BattleConfig {
    /// Health each side starts with; also the healing cap.
    pub starting_health: u32,
    /// Mana available on turn 1.
    pub starting_mana: u32,
    /// Upper bound for per-turn mana.
    pub max_mana: u32,
    /// Draws stop once a hand holds this many cards.
    pub hand_cap: usize,
    /// Cards dealt from the shuffled deck at match start.
    pub initial_hand_size: usize,
    /// Draws per side on each turn advance.
    pub cards_per_turn: usize,
}

impl Default for BattleConfig {
    fn default() -> Self {
        Self {
            starting_health: 30,
            starting_mana: 1,
            max_mana: 10,
            hand_cap: 7,
            initial_hand_size: 4,
            cards_per_turn: 1,
        }
    }
}

impl BattleConfig {
    /// Create the default battle configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set starting (and maximum) health.
    #[must_use]
    pub fn with_starting_health(mut self, health: u32) -> Self {
        self.starting_health = health;
        self
    }

    /// Set the mana cap.
    #[must_use]
    pub fn with_max_mana(mut self, max: u32) -> Self {
        self.max_mana = max;
        self
    }

    /// Set the hand cap.
    #[must_use]
    pub fn with_hand_cap(mut self, cap: usize) -> Self {
        self.hand_cap = cap;
        self
    }

    /// Set the opening hand size.
    #[must_use]
    pub fn with_initial_hand_size(mut self, size: usize) -> Self {
        self.initial_hand_size = size;
        self
    }

    /// Mana granted on a given turn number.
    #[must_use]
    pub fn mana_for_turn(&self, turn_number: u32) -> u32 {
        turn_number.min(self.max_mana)
    }
}

/// Experience and world rewards paid out when a match ends.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ProgressionConfig {
    pub experience_per_win: u32,
    pub experience_per_loss: u32,
    pub experience_per_level: u32,
    /// Region points credited to the player's faction on victory.
    pub victory_region_points: u32,
}

impl Default for ProgressionConfig {
    fn default() -> Self {
        Self {
            experience_per_win: 100,
            experience_per_loss: 25,
            experience_per_level: 1000,
            victory_region_points: 15,
        }
    }
}

/// Deck size and copy limits.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DeckRules {
    pub max_deck_size: usize,
    pub min_deck_size: usize,
    /// Copies allowed per card name.
    pub max_copies: usize,
    /// Starter decks are truncated to this many cards.
    pub starter_deck_size: usize,
}

impl Default for DeckRules {
    fn default() -> Self {
        Self {
            max_deck_size: 30,
            min_deck_size: 20,
            max_copies: 3,
            starter_deck_size: 20,
        }
    }
}

/// Region control and purge thresholds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldConfig {
    /// Ceiling for a faction's region score.
    pub max_points: f64,
    /// A faction controls a region when it leads by more than this.
    pub control_margin: f64,
    /// Share of unlocked regions (percent) that triggers a purge.
    pub purge_threshold_percent: u32,
    /// Score both factions are reset to by a purge.
    pub neutral_points: f64,
}

impl Default for WorldConfig {
    fn default() -> Self {
        Self {
            max_points: 100.0,
            control_margin: 10.0,
            purge_threshold_percent: 80,
            neutral_points: 50.0,
        }
    }
}

impl WorldConfig {
    /// Set the purge threshold.
    #[must_use]
    pub fn with_purge_threshold(mut self, percent: u32) -> Self {
        self.purge_threshold_percent = percent;
        self
    }

    /// Set the control margin.
    #[must_use]
    pub fn with_control_margin(mut self, margin: f64) -> Self {
        self.control_margin = margin;
        self
    }
}

/// Complete configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct GameConfig {
    pub battle: BattleConfig,
    pub progression: ProgressionConfig,
    pub deck: DeckRules,
    pub world: WorldConfig,
}

impl GameConfig {
    /// Parse a configuration from JSON, defaulting anything omitted.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_battle_defaults() {
        let config = BattleConfig::default();
        assert_eq!(config.starting_health, 30);
        assert_eq!(config.max_mana, 10);
        assert_eq!(config.hand_cap, 7);
        assert_eq!(config.initial_hand_size, 4);
    }

    #[test]
    fn test_mana_for_turn_caps() {
        let config = BattleConfig::default();
        assert_eq!(config.mana_for_turn(1), 1);
        assert_eq!(config.mana_for_turn(10), 10);
        assert_eq!(config.mana_for_turn(25), 10);
    }

    #[test]
    fn test_builder() {
        let config = BattleConfig::new()
            .with_starting_health(5)
            .with_hand_cap(3)
            .with_initial_hand_size(2)
            .with_max_mana(4);

        assert_eq!(config.starting_health, 5);
        assert_eq!(config.hand_cap, 3);
        assert_eq!(config.initial_hand_size, 2);
        assert_eq!(config.mana_for_turn(9), 4);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config = GameConfig::from_json(
            r#"{ "battle": { "startingHealth": 40 }, "world": { "purgeThresholdPercent": 75 } }"#,
        )
        .unwrap();

        assert_eq!(config.battle.starting_health, 40);
        assert_eq!(config.battle.max_mana, 10);
        assert_eq!(config.world.purge_threshold_percent, 75);
        assert_eq!(config.world.control_margin, 10.0);
        assert_eq!(config.progression, ProgressionConfig::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        assert_eq!(GameConfig::from_json("{}").unwrap(), GameConfig::default());
    }
}
