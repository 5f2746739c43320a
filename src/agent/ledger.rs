//! Per-match bookkeeping
//!
//! Both ledgers live for exactly one match: initialized empty when the agent
//! is constructed, populated lazily per observed uid, dropped with the agent.
//! Nothing is persisted across matches.

use ahash::AHashMap;

use crate::core::types::{UnitId, Vec2};

/// Last observed position per mobile unit, for stuck detection
#[derive(Debug, Default)]
pub struct PositionLedger {
    positions: AHashMap<UnitId, Vec2>,
}

impl PositionLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Position recorded on the previous tick, if the unit was seen before
    pub fn previous(&self, uid: UnitId) -> Option<Vec2> {
        self.positions.get(&uid).copied()
    }

    pub fn record(&mut self, uid: UnitId, position: Vec2) {
        self.positions.insert(uid, position);
    }
}

/// Tanks and ships issued per base
///
/// Advisory build-order caps, not fleet truth: counts only what this agent
/// ordered, and is never decremented when units are lost. The drift from
/// reality under attrition is intended.
#[derive(Debug, Default)]
pub struct BuildLedger {
    tanks: AHashMap<UnitId, u32>,
    ships: AHashMap<UnitId, u32>,
}

impl BuildLedger {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ensure a newly seen base starts at zero counts
    pub fn register(&mut self, base: UnitId) {
        self.tanks.entry(base).or_insert(0);
        self.ships.entry(base).or_insert(0);
    }

    pub fn tanks_built(&self, base: UnitId) -> u32 {
        self.tanks.get(&base).copied().unwrap_or(0)
    }

    pub fn ships_built(&self, base: UnitId) -> u32 {
        self.ships.get(&base).copied().unwrap_or(0)
    }

    pub fn note_tank(&mut self, base: UnitId) {
        *self.tanks.entry(base).or_insert(0) += 1;
    }

    pub fn note_ship(&mut self, base: UnitId) {
        *self.ships.entry(base).or_insert(0) += 1;
    }
}
