//! The world aggregate: regions plus global stats, and the purge machine.
//!
//! Every mutation goes through `WorldState`, and `apply_victory` works on a
//! copy so a caller never observes scores without their derived control or
//! the purge reset that goes with them.

use serde::{Deserialize, Serialize};
use tracing::{debug, info};

use super::region::{initial_regions, Region, RegionBonus, RegionId};
use crate::cards::Faction;
use crate::core::{WorldConfig, WorldError};

/// Global counters persisted alongside the region list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct WorldStats {
    pub total_angels: u32,
    pub total_demons: u32,
    pub purge_count: u32,
    pub current_purge_winner: Option<Faction>,
    /// Unix milliseconds of the last purge.
    #[serde(rename = "lastPurgeDate")]
    pub last_purge_at: Option<u64>,
    /// World events. Not interpreted here.
    pub active_events: Vec<serde_json::Value>,
}

/// A region-control change produced by a match victory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct RegionDelta {
    pub region: RegionId,
    pub faction: Faction,
    pub points: f64,
}

/// A purge that just happened.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PurgeEvent {
    pub winner: Faction,
    /// Purge count after this purge.
    pub purge_count: u32,
    pub at: u64,
}

/// Result of `WorldState::apply_victory`.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldUpdate {
    /// The credited region after control was recomputed, before any purge.
    pub region: Region,
    pub purge: Option<PurgeEvent>,
}

/// Who the player faces when entering a region.
#[derive(Clone, Debug, PartialEq)]
pub struct Engagement {
    pub region: RegionId,
    pub opponent_faction: Faction,
    pub bonus: RegionBonus,
}

/// Regions and stats, updated as one unit.
#[derive(Clone, Debug, PartialEq)]
pub struct WorldState {
    pub regions: Vec<Region>,
    pub stats: WorldStats,
    config: WorldConfig,
}

impl Default for WorldState {
    fn default() -> Self {
        Self::initial()
    }
}

impl WorldState {
    /// The six-region starting map with zeroed stats.
    #[must_use]
    pub fn initial() -> Self {
        Self::from_parts(initial_regions(), WorldStats::default())
    }

    /// Rebuild from persisted parts.
    #[must_use]
    pub fn from_parts(regions: Vec<Region>, stats: WorldStats) -> Self {
        Self {
            regions,
            stats,
            config: WorldConfig::default(),
        }
    }

    #[must_use]
    pub fn with_config(mut self, config: WorldConfig) -> Self {
        self.config = config;
        self
    }

    #[must_use]
    pub fn config(&self) -> &WorldConfig {
        &self.config
    }

    #[must_use]
    pub fn region(&self, id: &RegionId) -> Option<&Region> {
        self.regions.iter().find(|r| &r.id == id)
    }

    fn region_mut(&mut self, id: &RegionId) -> Result<&mut Region, WorldError> {
        self.regions
            .iter_mut()
            .find(|r| &r.id == id)
            .ok_or_else(|| WorldError::UnknownRegion(id.clone()))
    }

    /// Number of unlocked regions controlled by `faction`.
    #[must_use]
    pub fn controlled_by(&self, faction: Faction) -> usize {
        self.unlocked()
            .filter(|r| r.controlling_faction == Some(faction))
            .count()
    }

    fn unlocked(&self) -> impl Iterator<Item = &Region> {
        self.regions.iter().filter(|r| !r.is_locked)
    }

    /// Credit `points` to `winner` in one region and recompute its control.
    ///
    /// Does not run the purge check; `apply_victory` does both.
    pub fn update_region_control(
        &mut self,
        id: &RegionId,
        winner: Faction,
        points: f64,
    ) -> Result<&Region, WorldError> {
        if !points.is_finite() || points < 0.0 {
            return Err(WorldError::InvalidPoints(points));
        }
        let config = self.config.clone();
        let region = self.region_mut(id)?;
        let before = region.controlling_faction;
        region.update_control(winner, points, &config);

        if region.controlling_faction != before {
            info!(
                region = %region.id,
                from = ?before,
                to = ?region.controlling_faction,
                "region control changed"
            );
        }
        debug!(
            region = %region.id,
            angel = region.angel_points,
            demon = region.demon_points,
            "region scores updated"
        );
        Ok(&*region)
    }

    /// Faction that has reached the purge threshold, if any.
    ///
    /// Only unlocked regions count. With no unlocked regions nothing purges.
    /// If both factions reach the threshold the strictly larger share wins
    /// and an exact tie purges nobody.
    #[must_use]
    pub fn purge_candidate(&self) -> Option<Faction> {
        let total = self.unlocked().count();
        if total == 0 {
            return None;
        }
        let threshold = self.config.purge_threshold_percent as usize;
        let reached = |count: usize| count * 100 >= threshold * total;

        let angels = self.controlled_by(Faction::Angel);
        let demons = self.controlled_by(Faction::Demon);
        match (reached(angels), reached(demons)) {
            (false, false) => None,
            (true, false) => Some(Faction::Angel),
            (false, true) => Some(Faction::Demon),
            (true, true) if angels > demons => Some(Faction::Angel),
            (true, true) if demons > angels => Some(Faction::Demon),
            (true, true) => None,
        }
    }

    /// Purge if a faction has reached the threshold.
    pub fn check_purge_condition(&mut self, now: u64) -> Option<PurgeEvent> {
        let winner = self.purge_candidate()?;
        Some(self.trigger_purge(winner, now))
    }

    /// Reset every unlocked region to neutral and record the purge.
    pub fn trigger_purge(&mut self, winner: Faction, now: u64) -> PurgeEvent {
        let neutral = self.config.neutral_points;
        for region in self.regions.iter_mut().filter(|r| !r.is_locked) {
            region.neutralize(neutral);
        }

        self.stats.purge_count += 1;
        self.stats.current_purge_winner = Some(winner);
        self.stats.last_purge_at = Some(now);

        info!(%winner, purge_count = self.stats.purge_count, "purge triggered");

        PurgeEvent {
            winner,
            purge_count: self.stats.purge_count,
            at: now,
        }
    }

    /// Apply a match victory: update the region, recompute control, and run
    /// the purge check. Either all of it lands or none of it does.
    pub fn apply_victory(&mut self, delta: &RegionDelta, now: u64) -> Result<WorldUpdate, WorldError> {
        let mut next = self.clone();

        let region = next.region(&delta.region).ok_or_else(|| WorldError::UnknownRegion(delta.region.clone()))?;
        if region.is_locked {
            return Err(WorldError::RegionLocked(delta.region.clone()));
        }

        let region = next
            .update_region_control(&delta.region, delta.faction, delta.points)?
            .clone();
        let purge = next.check_purge_condition(now);

        *self = next;
        Ok(WorldUpdate { region, purge })
    }

    /// Pick the opposing faction for a match in region `id`.
    ///
    /// The region's controller defends it, unless the player's own faction
    /// holds it or it is contested; then the player faces their opposite.
    pub fn engage(&self, id: &RegionId, player_faction: Faction) -> Result<Engagement, WorldError> {
        let region = self
            .region(id)
            .ok_or_else(|| WorldError::UnknownRegion(id.clone()))?;
        if region.is_locked {
            return Err(WorldError::RegionLocked(id.clone()));
        }

        let opponent_faction = match region.controlling_faction {
            Some(controller) if controller != player_faction => controller,
            _ => player_faction.opposite(),
        };

        Ok(Engagement {
            region: region.id.clone(),
            opponent_faction,
            bonus: region.bonus.clone(),
        })
    }
}
