//! Enemy target selection
//!
//! Two independent mechanisms, kept deliberately asymmetric:
//! - jets chase the power-ranked target (strongest base of the strongest
//!   enemy team, or the fallback point if that team holds no bases);
//! - tanks chase whatever enemy base is nearest to them, and simply have no
//!   candidate when there are no enemy bases at all.

use ordered_float::OrderedFloat;

use crate::command::BaseCommands;
use crate::core::config::StrategyConfig;
use crate::core::types::Vec2;
use crate::world::{TeamRecord, WorldSnapshot};

/// Heuristic worth of a single base
pub fn base_power(base: &dyn BaseCommands) -> f32 {
    base.mines() as f32 * 10.0 + base.crystal() / 10.0
}

/// Heuristic worth of a whole team: a flat bonus per base plus the bases' own
/// worth
pub fn team_power(record: &TeamRecord) -> f32 {
    100.0 * record.bases.len() as f32
        + record
            .bases
            .iter()
            .map(|base| base_power(base.as_ref()))
            .sum::<f32>()
}

/// Power-ranked target for the air force
///
/// `None` when there are no enemy teams at all; the configured fallback point
/// when the strongest enemy has no bases left.
pub fn acquire_target(
    snapshot: &WorldSnapshot,
    my_team: &str,
    config: &StrategyConfig,
) -> Option<Vec2> {
    let (_, strongest) = snapshot
        .enemies(my_team)
        .max_by_key(|(_, record)| OrderedFloat(team_power(record)))?;

    let target = strongest
        .bases
        .iter()
        .max_by_key(|base| OrderedFloat(base_power(base.as_ref())))
        .map(|base| base.position())
        .unwrap_or(config.fallback_target);

    Some(target)
}

/// Nearest enemy base to `from` by squared Euclidean distance
pub fn nearest_base(enemy_bases: &[Vec2], from: Vec2) -> Option<Vec2> {
    enemy_bases
        .iter()
        .copied()
        .min_by_key(|base| OrderedFloat(from.distance_squared(base)))
}
