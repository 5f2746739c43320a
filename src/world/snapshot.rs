//! Typed per-tick world snapshot
//!
//! The engine hands the strategy a fresh snapshot every tick. Team records it
//! assembles may omit unit lists entirely; the typed shape defaults those to
//! empty vectors instead of optional fields.

use ahash::AHashMap;

use crate::command::{BaseCommands, JetCommands, ShipCommands, TankCommands};
use crate::core::types::Vec2;

/// Everything one team owns this tick
#[derive(Default)]
pub struct TeamRecord {
    pub bases: Vec<Box<dyn BaseCommands>>,
    pub tanks: Vec<Box<dyn TankCommands>>,
    pub ships: Vec<Box<dyn ShipCommands>>,
    pub jets: Vec<Box<dyn JetCommands>>,
}

impl TeamRecord {
    pub fn new() -> Self {
        Self::default()
    }
}

/// Mapping from team name to its record, fresh each tick
///
/// Only `uid` fields are stable across snapshots; everything else, including
/// the boxed entities themselves, is rebuilt by the engine every tick.
#[derive(Default)]
pub struct WorldSnapshot {
    teams: AHashMap<String, TeamRecord>,
}

impl WorldSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_team(&mut self, name: impl Into<String>, record: TeamRecord) {
        self.teams.insert(name.into(), record);
    }

    pub fn team(&self, name: &str) -> Option<&TeamRecord> {
        self.teams.get(name)
    }

    pub fn team_mut(&mut self, name: &str) -> Option<&mut TeamRecord> {
        self.teams.get_mut(name)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    /// All teams that are not `my_team`
    pub fn enemies<'a>(&'a self, my_team: &'a str) -> impl Iterator<Item = (&'a str, &'a TeamRecord)> {
        self.teams
            .iter()
            .filter(move |(name, _)| name.as_str() != my_team)
            .map(|(name, record)| (name.as_str(), record))
    }

    /// Positions of every enemy base, in snapshot iteration order
    pub fn enemy_base_positions(&self, my_team: &str) -> Vec<Vec2> {
        self.enemies(my_team)
            .flat_map(|(_, record)| record.bases.iter().map(|base| base.position()))
            .collect()
    }
}
