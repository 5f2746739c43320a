//! Per-unit steering heuristics
//!
//! "Stuck" is reconstructed every tick from position equality against the
//! ledger; there is no stored state machine. Previous positions are recorded
//! for every unit every tick, whichever branch ran.

use rand::rngs::StdRng;

use crate::agent::ledger::PositionLedger;
use crate::agent::random_heading;
use crate::agent::targeting::nearest_base;
use crate::command::{JetCommands, ShipCommands, TankCommands};
use crate::core::config::StrategyConfig;
use crate::core::types::Vec2;

/// Tanks push toward whatever enemy base is nearest to each of them
///
/// A tank that sat still since last tick (and was not parked by the engine)
/// gets a fresh random heading instead; a refused `goto` is logged and
/// dropped so the rest of the column still gets its orders.
pub(crate) fn steer_tanks(
    tanks: &mut [Box<dyn TankCommands>],
    enemy_bases: &[Vec2],
    positions: &mut PositionLedger,
    rng: &mut StdRng,
) {
    for tank in tanks.iter_mut() {
        let uid = tank.uid();
        let here = tank.position();
        let candidate = nearest_base(enemy_bases, here);

        if let Some(previous) = positions.previous(uid) {
            if !tank.stopped() {
                if here == previous {
                    tank.set_heading(random_heading(rng));
                } else if let Some(target) = candidate {
                    if let Err(err) = tank.goto(target.x, target.y) {
                        tracing::debug!(tank = %uid, "navigation refused: {err}");
                    }
                }
            }
        }

        positions.record(uid, here);
    }
}

/// A ship that stalls far from home becomes a new base; one that stalls near
/// home re-rolls its heading and keeps exploring
pub(crate) fn steer_ships(
    ships: &mut [Box<dyn ShipCommands>],
    positions: &mut PositionLedger,
    rng: &mut StdRng,
    config: &StrategyConfig,
) {
    for ship in ships.iter_mut() {
        let uid = ship.uid();
        let here = ship.position();

        if let Some(previous) = positions.previous(uid) {
            if here == previous {
                let owner = ship.owner_position();
                if ship.get_distance(owner.x, owner.y) > config.ship_settle_distance {
                    tracing::debug!(ship = %uid, "settling into a new base");
                    ship.convert_to_base();
                } else {
                    ship.set_heading(random_heading(rng));
                }
            }
        }

        positions.record(uid, here);
    }
}

/// Jets all converge on the power-ranked target; no stuck detection
pub(crate) fn steer_jets(jets: &mut [Box<dyn JetCommands>], target: Option<Vec2>) {
    let Some(target) = target else {
        return;
    };
    for jet in jets.iter_mut() {
        // Air navigation never fails in practice; result dropped either way
        let _ = jet.goto(target.x, target.y);
    }
}
