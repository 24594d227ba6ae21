//! World map control and the purge cycle.
//!
//! ## Key Types
//!
//! - `Region`: Per-region control scores and derived controlling faction
//! - `WorldState`: Regions plus `WorldStats`, mutated as one unit
//! - `RegionDelta`: The region credit a victory reports
//! - `PurgeEvent`: Emitted when a faction's dominance resets the map

pub mod region;
pub mod state;

pub use region::{initial_regions, ControlSplit, Coordinates, Region, RegionBonus, RegionId};
pub use state::{Engagement, PurgeEvent, RegionDelta, WorldState, WorldStats, WorldUpdate};
