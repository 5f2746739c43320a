//! The decision agent driven by the engine
//!
//! One call per simulation tick: select the phase from elapsed time, run the
//! per-base build order, steer tanks and ships, acquire the power-ranked
//! target, send the jets. All effects are command calls on the snapshot; the
//! agent keeps only uid-keyed bookkeeping between ticks.

mod build;
pub mod ledger;
mod movement;
pub mod phases;
pub mod targeting;

pub use phases::Phase;

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::core::config::StrategyConfig;
use crate::world::{TerrainMap, WorldSnapshot};
use ledger::{BuildLedger, PositionLedger};

/// Team name the engine reads off the agent for display and bookkeeping
pub const CREATOR: &str = "The Wise Riders";

/// Uniform heading in [0, 360) degrees
pub(crate) fn random_heading(rng: &mut StdRng) -> f32 {
    rng.gen::<f32>() * 360.0
}

pub struct PlayerAgent {
    /// Mandatory attribute, set before the first invocation
    pub team: String,
    config: StrategyConfig,
    positions: PositionLedger,
    builds: BuildLedger,
    rng: StdRng,
}

impl PlayerAgent {
    pub fn new() -> Self {
        Self::with_config(StrategyConfig::default())
    }

    pub fn with_config(config: StrategyConfig) -> Self {
        Self {
            team: CREATOR.to_string(),
            config,
            positions: PositionLedger::new(),
            builds: BuildLedger::new(),
            rng: StdRng::from_entropy(),
        }
    }

    /// Deterministic agent for tests and replays
    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
            ..Self::new()
        }
    }

    /// One simulation tick
    ///
    /// `t` is elapsed match time in seconds, `dt` the step. Never panics on
    /// host data: a missing own-team record degrades to a no-op and refused
    /// navigation commands are discarded so the remaining units still run.
    pub fn run(&mut self, t: f32, _dt: f32, info: &mut WorldSnapshot, _terrain: &TerrainMap) {
        let phase = Phase::at(t, &self.config);
        tracing::debug!(?phase, t, "tick");

        if let Some(my) = info.team_mut(&self.team) {
            for base in my.bases.iter_mut() {
                build::issue_construction(
                    phase,
                    base.as_mut(),
                    &mut self.builds,
                    &mut self.rng,
                    &self.config,
                );
            }
        }

        let enemy_bases = info.enemy_base_positions(&self.team);
        if let Some(my) = info.team_mut(&self.team) {
            movement::steer_tanks(&mut my.tanks, &enemy_bases, &mut self.positions, &mut self.rng);
            movement::steer_ships(&mut my.ships, &mut self.positions, &mut self.rng, &self.config);
        }

        let target = targeting::acquire_target(info, &self.team, &self.config);
        if let Some(my) = info.team_mut(&self.team) {
            movement::steer_jets(&mut my.jets, target);
        }
    }
}

impl Default for PlayerAgent {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::world::TeamRecord;

    #[test]
    fn test_creator_is_set_before_first_run() {
        let agent = PlayerAgent::new();
        assert_eq!(agent.team, CREATOR);
        assert_eq!(CREATOR, "The Wise Riders");
    }

    #[test]
    fn test_missing_own_team_is_a_no_op() {
        let mut agent = PlayerAgent::with_seed(3);
        let mut snapshot = WorldSnapshot::new();
        snapshot.insert_team("Somebody Else", TeamRecord::new());
        let terrain = TerrainMap::unknown(100, 100);

        // Must not panic
        agent.run(0.0, 0.1, &mut snapshot, &terrain);
    }
}
