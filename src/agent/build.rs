//! Per-base build orders
//!
//! One construction at most per base per tick; the first matching arm wins.
//! An under-cap mine count claims the tick even when the mine itself is not
//! yet affordable, so a base saving up for a mine builds nothing else.

use rand::rngs::StdRng;

use crate::agent::ledger::BuildLedger;
use crate::agent::phases::Phase;
use crate::agent::random_heading;
use crate::command::BaseCommands;
use crate::core::config::StrategyConfig;
use crate::core::types::UnitKind;

fn affordable(base: &dyn BaseCommands, kind: UnitKind) -> bool {
    base.crystal() > base.cost(kind)
}

/// Run the build order for one base in the given phase
pub(crate) fn issue_construction(
    phase: Phase,
    base: &mut dyn BaseCommands,
    ledger: &mut BuildLedger,
    rng: &mut StdRng,
    config: &StrategyConfig,
) {
    let uid = base.uid();
    ledger.register(uid);

    match phase {
        Phase::Early => {
            if base.mines() < config.early_mine_cap {
                if affordable(base, UnitKind::Mine) {
                    base.build_mine();
                }
            } else if affordable(base, UnitKind::Tank)
                && ledger.tanks_built(uid) < config.early_tank_cap
            {
                base.build_tank(random_heading(rng));
                ledger.note_tank(uid);
            } else if affordable(base, UnitKind::Ship)
                && ledger.ships_built(uid) < config.early_ship_cap
            {
                base.build_ship(random_heading(rng));
                ledger.note_ship(uid);
            } else if affordable(base, UnitKind::Tank)
                && ledger.tanks_built(uid) < config.early_tank_cap_expanded
                && ledger.ships_built(uid) >= config.early_ship_cap
            {
                // Ship line is full; top the tank line up to the expanded cap
                base.build_tank(random_heading(rng));
                ledger.note_tank(uid);
            } else if affordable(base, UnitKind::Jet) {
                base.build_jet(random_heading(rng));
            }
        }
        Phase::Mid => {
            if base.mines() < config.mid_mine_cap {
                if affordable(base, UnitKind::Mine) {
                    base.build_mine();
                }
            } else if affordable(base, UnitKind::Tank)
                && ledger.tanks_built(uid) < config.mid_tank_cap
            {
                base.build_tank(random_heading(rng));
                ledger.note_tank(uid);
            } else if affordable(base, UnitKind::Ship)
                && ledger.ships_built(uid) < config.mid_ship_cap
            {
                base.build_ship(random_heading(rng));
                ledger.note_ship(uid);
            } else if affordable(base, UnitKind::Jet) {
                base.build_jet(random_heading(rng));
            }
        }
        Phase::Late => {
            // Everything goes into the air force
            if affordable(base, UnitKind::Jet) {
                base.build_jet(random_heading(rng));
            }
        }
    }
}
