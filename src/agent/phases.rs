//! Match phases
//!
//! Phase is a pure function of elapsed time, no hysteresis: the same `t`
//! always maps to the same phase regardless of what happened before.

use serde::{Deserialize, Serialize};

use crate::core::config::StrategyConfig;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Phase {
    Early,
    Mid,
    Late,
}

impl Phase {
    /// Phase for elapsed match time `t` in seconds
    pub fn at(t: f32, config: &StrategyConfig) -> Self {
        if t < config.early_phase_end {
            Phase::Early
        } else if t < config.mid_phase_end {
            Phase::Mid
        } else {
            Phase::Late
        }
    }
}
