use thiserror::Error;

/// Why a navigation command was refused by the engine
///
/// The strategy discards these at the call site: a unit that cannot reach its
/// target this tick simply keeps its current heading.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum NavigationError {
    #[error("No path to ({x}, {y})")]
    Unreachable { x: f32, y: f32 },

    #[error("Target ({x}, {y}) is outside the map")]
    OutOfBounds { x: f32, y: f32 },
}

#[derive(Error, Debug)]
pub enum StrategyError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),

    #[error("Navigation error: {0}")]
    Navigation(#[from] NavigationError),

    #[error("Terrain grid has {got} tiles, expected {width}x{height}")]
    TerrainShape { width: usize, height: usize, got: usize },
}

pub type Result<T> = std::result::Result<T, StrategyError>;
