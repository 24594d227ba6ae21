//! The persisted human player and match-end progression.

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::battle::MatchOutcome;
use crate::cards::{create_starter_deck, Card, ClassType, Faction};
use crate::core::ProgressionConfig;
use crate::world::RegionDelta;

/// Level reached with `experience`: one level per `per_level` points, from 1.
#[must_use]
pub fn level_for_experience(experience: u32, per_level: u32) -> u32 {
    experience / per_level.max(1) + 1
}

/// The human player's profile.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Player {
    pub id: String,
    pub username: String,
    pub faction: Faction,
    #[serde(rename = "class")]
    pub class_type: ClassType,
    pub level: u32,
    pub experience: u32,
    pub wins: u32,
    pub losses: u32,
    pub deck: Vec<Card>,
    pub collection: Vec<Card>,
    pub reputation: i32,
    pub is_converted: bool,
    /// Unix milliseconds.
    pub created_at: u64,
}

/// What `Player::settle_match` changed.
#[derive(Clone, Debug, PartialEq)]
pub struct Settlement {
    pub won: bool,
    pub experience_gained: u32,
    pub level_before: u32,
    pub level_after: u32,
    /// Region credit to hand to the world, on victory only.
    pub region_delta: Option<RegionDelta>,
}

impl Settlement {
    #[must_use]
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

impl Player {
    /// A fresh level-1 profile holding the starter deck for its faction and class.
    pub fn new(
        id: impl Into<String>,
        username: impl Into<String>,
        faction: Faction,
        class_type: ClassType,
        created_at: u64,
    ) -> Self {
        let deck = create_starter_deck(faction, class_type);
        Self {
            id: id.into(),
            username: username.into(),
            faction,
            class_type,
            level: 1,
            experience: 0,
            wins: 0,
            losses: 0,
            collection: deck.clone(),
            deck,
            reputation: 0,
            is_converted: false,
            created_at,
        }
    }

    /// Apply the end-of-match payout.
    ///
    /// Call once per match; `Battle::take_outcome` hands the outcome out
    /// exactly once for that reason.
    pub fn settle_match(&mut self, outcome: &MatchOutcome, config: &ProgressionConfig) -> Settlement {
        let won = outcome.player_won();
        let experience_gained = if won {
            config.experience_per_win
        } else {
            config.experience_per_loss
        };

        let level_before = self.level;
        self.experience = self.experience.saturating_add(experience_gained);
        if won {
            self.wins += 1;
        } else {
            self.losses += 1;
        }
        self.level = self
            .level
            .max(level_for_experience(self.experience, config.experience_per_level));

        if self.level > level_before {
            info!(player = %self.username, level = self.level, "level up");
        }

        let region_delta = won.then(|| RegionDelta {
            region: outcome.region.clone(),
            faction: self.faction,
            points: f64::from(config.victory_region_points),
        });

        Settlement {
            won,
            experience_gained,
            level_before,
            level_after: self.level,
            region_delta,
        }
    }

    /// Defect to the opposite faction.
    ///
    /// Deck and collection become the new faction's starter deck for the
    /// same class and reputation resets. Level, experience and the win/loss
    /// record carry over.
    pub fn convert_faction(&mut self) -> Faction {
        let faction = self.faction.opposite();
        let deck = create_starter_deck(faction, self.class_type);

        self.faction = faction;
        self.collection = deck.clone();
        self.deck = deck;
        self.reputation = 0;
        self.is_converted = true;

        info!(player = %self.username, %faction, "faction converted");
        faction
    }

    /// Experience total at which the next level starts.
    #[must_use]
    pub fn experience_for_next_level(&self, config: &ProgressionConfig) -> u32 {
        self.level * config.experience_per_level
    }

    /// Progress through the current level, in percent within `[0, 100]`.
    #[must_use]
    pub fn level_progress(&self, config: &ProgressionConfig) -> f64 {
        let per_level = f64::from(config.experience_per_level.max(1));
        let floor = f64::from(self.level.saturating_sub(1)) * per_level;
        let progress = (f64::from(self.experience) - floor) / per_level * 100.0;
        progress.clamp(0.0, 100.0)
    }

    /// Percentage of games won, 0 with none played.
    #[must_use]
    pub fn win_rate(&self) -> f64 {
        let played = self.wins + self.losses;
        if played == 0 {
            return 0.0;
        }
        f64::from(self.wins) / f64::from(played) * 100.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::battle::Side;
    use crate::world::RegionId;

    fn outcome(winner: Side) -> MatchOutcome {
        MatchOutcome {
            winner,
            region: RegionId::new("ethereal_forest"),
            player_faction: Faction::Demon,
            turn_number: 6,
        }
    }

    fn player() -> Player {
        Player::new("p1", "Lilith", Faction::Demon, ClassType::Necromancer, 0)
    }

    #[test]
    fn test_level_for_experience() {
        assert_eq!(level_for_experience(0, 1000), 1);
        assert_eq!(level_for_experience(999, 1000), 1);
        assert_eq!(level_for_experience(1000, 1000), 2);
        assert_eq!(level_for_experience(3500, 1000), 4);
    }

    #[test]
    fn test_new_player() {
        let p = player();
        assert_eq!(p.level, 1);
        assert_eq!(p.deck, p.collection);
        assert_eq!(p.deck, create_starter_deck(Faction::Demon, ClassType::Necromancer));
    }

    #[test]
    fn test_win_pays_and_credits_region() {
        let mut p = player();
        let s = p.settle_match(&outcome(Side::Player), &ProgressionConfig::default());

        assert!(s.won);
        assert_eq!(s.experience_gained, 100);
        assert_eq!(p.wins, 1);
        assert_eq!(
            s.region_delta,
            Some(RegionDelta {
                region: RegionId::new("ethereal_forest"),
                faction: Faction::Demon,
                points: 15.0,
            })
        );
    }

    #[test]
    fn test_loss_pays_consolation() {
        let mut p = player();
        let s = p.settle_match(&outcome(Side::Opponent), &ProgressionConfig::default());

        assert!(!s.won);
        assert_eq!(p.experience, 25);
        assert_eq!(p.losses, 1);
        assert_eq!(s.region_delta, None);
    }

    #[test]
    fn test_level_boundary() {
        let mut p = player();
        p.experience = 899;
        let s = p.settle_match(&outcome(Side::Player), &ProgressionConfig::default());
        assert_eq!(p.experience, 999);
        assert_eq!(p.level, 1);
        assert!(!s.leveled_up());

        p.settle_match(&outcome(Side::Opponent), &ProgressionConfig::default());
        assert_eq!(p.experience, 1024);
        assert_eq!(p.level, 2);
    }

    #[test]
    fn test_multi_level_jump() {
        let mut p = player();
        let config = ProgressionConfig {
            experience_per_win: 2500,
            ..ProgressionConfig::default()
        };
        let s = p.settle_match(&outcome(Side::Player), &config);
        assert_eq!((s.level_before, s.level_after), (1, 3));
    }

    #[test]
    fn test_convert_faction() {
        let mut p = player();
        p.settle_match(&outcome(Side::Player), &ProgressionConfig::default());
        p.experience = 2100;
        p.level = 3;
        p.reputation = 40;

        assert_eq!(p.convert_faction(), Faction::Angel);

        assert_eq!(p.faction, Faction::Angel);
        assert_eq!((p.level, p.experience, p.wins), (3, 2100, 1));
        assert_eq!(p.reputation, 0);
        assert!(p.is_converted);
        assert_eq!(p.class_type, ClassType::Necromancer);
        assert_eq!(p.deck, create_starter_deck(Faction::Angel, ClassType::Necromancer));
        assert_eq!(p.collection, p.deck);
        assert!(p.deck.iter().all(|c| c.faction == Faction::Angel));
    }

    #[test]
    fn test_level_progress_and_win_rate() {
        let config = ProgressionConfig::default();
        let mut p = player();
        assert_eq!(p.win_rate(), 0.0);
        assert_eq!(p.experience_for_next_level(&config), 1000);

        p.experience = 1250;
        p.level = 2;
        assert_eq!(p.level_progress(&config), 25.0);

        p.level = 5;
        assert_eq!(p.level_progress(&config), 0.0);

        p.wins = 3;
        p.losses = 1;
        assert_eq!(p.win_rate(), 75.0);
    }

    #[test]
    fn test_json_shape() {
        let json = serde_json::to_value(player()).unwrap();
        assert_eq!(json["class"], "necromancer");
        assert_eq!(json["faction"], "demon");
        assert_eq!(json["isConverted"], false);
        assert_eq!(json["createdAt"], 0);
    }
}
