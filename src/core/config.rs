//! Strategy configuration with documented constants
//!
//! All tunable numbers of the build orders and steering heuristics are
//! collected here. The defaults reproduce the tournament build of the bot.

use serde::{Deserialize, Serialize};

use crate::core::error::{Result, StrategyError};
use crate::core::types::Vec2;

/// Tunable constants for the strategy
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct StrategyConfig {
    // === PHASES ===
    /// Elapsed seconds at which the early game ends (exclusive)
    pub early_phase_end: f32,

    /// Elapsed seconds at which the midgame ends (exclusive)
    ///
    /// From here on every base spends everything on jets.
    pub mid_phase_end: f32,

    // === EARLY BUILD ORDER ===
    /// Mines each base builds before anything else in the early game
    pub early_mine_cap: u32,

    /// Tanks issued per base before switching to ships
    pub early_tank_cap: u32,

    /// Ships issued per base before tank production resumes
    pub early_ship_cap: u32,

    /// Tank ceiling per base once the ship cap is reached
    pub early_tank_cap_expanded: u32,

    // === MIDGAME BUILD ORDER ===
    /// Mine floor per base in the midgame (lower than early: income is set
    /// up, crystal goes to the army)
    pub mid_mine_cap: u32,

    /// Tanks issued per base in the midgame
    pub mid_tank_cap: u32,

    /// Ships issued per base in the midgame
    pub mid_ship_cap: u32,

    // === STEERING ===
    /// Distance from its owning base beyond which a stationary ship settles
    /// into a new base instead of re-rolling its heading
    pub ship_settle_distance: f32,

    /// Where jets head when the strongest enemy holds no bases
    ///
    /// Roughly the middle of the competition map; keeps the air force massed
    /// instead of idling while the enemy rebuilds.
    pub fallback_target: Vec2,
}

impl Default for StrategyConfig {
    fn default() -> Self {
        Self {
            // Phases: 3 minutes of economy, 3 of consolidation, then jets
            early_phase_end: 180.0,
            mid_phase_end: 360.0,

            // Early: economy first, a token ground force, then expansion
            early_mine_cap: 3,
            early_tank_cap: 2,
            early_ship_cap: 6,
            early_tank_cap_expanded: 5,

            // Midgame: cheaper mine floor, minimal tanks/ships
            mid_mine_cap: 2,
            mid_tank_cap: 2,
            mid_ship_cap: 2,

            // Steering
            ship_settle_distance: 20.0,
            fallback_target: Vec2::new(75.0, 75.0),
        }
    }
}

impl StrategyConfig {
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a config from TOML, then validate it
    pub fn from_toml_str(raw: &str) -> Result<Self> {
        let config: Self = toml::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Validate configuration for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.early_phase_end <= 0.0 || self.mid_phase_end <= self.early_phase_end {
            return Err(StrategyError::InvalidConfig(format!(
                "phase boundaries must satisfy 0 < early ({}) < mid ({})",
                self.early_phase_end, self.mid_phase_end
            )));
        }

        // The expanded tank cap only makes sense above the base cap
        if self.early_tank_cap_expanded < self.early_tank_cap {
            return Err(StrategyError::InvalidConfig(format!(
                "early_tank_cap_expanded ({}) must be >= early_tank_cap ({})",
                self.early_tank_cap_expanded, self.early_tank_cap
            )));
        }

        if self.ship_settle_distance <= 0.0 {
            return Err(StrategyError::InvalidConfig(
                "ship_settle_distance must be positive".into(),
            ));
        }

        Ok(())
    }
}
