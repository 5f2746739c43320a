//! World state as seen by the strategy each tick

pub mod snapshot;
pub mod terrain;

pub use snapshot::{TeamRecord, WorldSnapshot};
pub use terrain::{TerrainMap, Tile};
