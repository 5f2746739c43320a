//! Host command surface
//!
//! The engine owns every entity; the strategy only ever touches them through
//! these traits. Each trait method maps one-to-one onto a command the engine
//! exposes on its objects, so the engine-side adapter is mechanical.
//!
//! `goto` is the one fallible command: the engine may refuse a destination it
//! cannot path to. The strategy discards that failure on purpose.

pub mod stubs;

use crate::core::error::NavigationError;
use crate::core::types::{UnitId, UnitKind, Vec2};

/// A stationary base: accumulates crystal, constructs mines and units
pub trait BaseCommands {
    fn uid(&self) -> UnitId;
    fn position(&self) -> Vec2;

    /// Current crystal balance
    fn crystal(&self) -> f32;

    /// Number of mines already built at this base
    fn mines(&self) -> u32;

    /// Construction cost for a unit kind at this base
    fn cost(&self, kind: UnitKind) -> f32;

    fn build_mine(&mut self);
    fn build_tank(&mut self, heading: f32) -> UnitId;
    fn build_ship(&mut self, heading: f32) -> UnitId;
    fn build_jet(&mut self, heading: f32) -> UnitId;
}

/// Commands common to every mobile unit
pub trait VehicleCommands {
    fn uid(&self) -> UnitId;
    fn position(&self) -> Vec2;

    /// Point the unit at a compass heading in degrees
    fn set_heading(&mut self, degrees: f32);

    /// Ask the engine to path the unit to (x, y)
    fn goto(&mut self, x: f32, y: f32) -> Result<(), NavigationError>;

    /// Distance from the unit to (x, y)
    fn get_distance(&self, x: f32, y: f32) -> f32;
}

pub trait TankCommands: VehicleCommands {
    /// True while the engine has parked the tank (e.g. at a shoreline)
    fn stopped(&self) -> bool;
}

pub trait ShipCommands: VehicleCommands {
    /// Position of the base that built this ship
    fn owner_position(&self) -> Vec2;

    /// Turn the ship into a new base at its current location
    fn convert_to_base(&mut self);
}

pub trait JetCommands: VehicleCommands {}
