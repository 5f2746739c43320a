//! The Wise Riders - drop-in strategy module for the crystal RTS competition
//!
//! The host engine owns the simulation; it instantiates [`PlayerAgent`] once
//! per match and calls [`PlayerAgent::run`] every tick with a fresh
//! [`world::WorldSnapshot`] and the [`world::TerrainMap`]. The agent answers
//! by issuing commands through the [`command`] traits.

pub mod agent;
pub mod command;
pub mod core;
pub mod world;

pub use agent::{PlayerAgent, CREATOR};
