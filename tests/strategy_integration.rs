//! End-to-end scenarios: a full agent driven over stub snapshots

use wise_riders::command::stubs::{
    shared_log, CostTable, IssuedCommand, SharedLog, StubBase, StubJet, StubShip, StubTank,
};
use wise_riders::core::types::UnitId;
use wise_riders::world::{TeamRecord, TerrainMap, WorldSnapshot};
use wise_riders::{PlayerAgent, CREATOR};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

fn terrain() -> TerrainMap {
    TerrainMap::unknown(150, 150)
}

fn heading_commands(log: &SharedLog) -> Vec<f32> {
    log.borrow()
        .commands()
        .iter()
        .filter_map(|c| match c {
            IssuedCommand::SetHeading { degrees, .. } => Some(*degrees),
            _ => None,
        })
        .collect()
}

#[test]
fn first_tick_builds_a_mine_and_nothing_else() {
    init_tracing();
    let log = shared_log();
    let mut snapshot = WorldSnapshot::new();

    let my_base = UnitId::new();
    let mut mine_record = TeamRecord::new();
    mine_record.bases.push(Box::new(
        StubBase::new(my_base, log.clone())
            .with_crystal(100.0)
            .with_mines(0)
            .with_costs(CostTable::uniform(50.0)),
    ));
    snapshot.insert_team(CREATOR, mine_record);

    let mut enemy = TeamRecord::new();
    enemy.bases.push(Box::new(
        StubBase::new(UnitId::new(), log.clone())
            .at(10.0, 10.0)
            .with_mines(1)
            .with_crystal(20.0),
    ));
    snapshot.insert_team("Enemy", enemy);

    let mut agent = PlayerAgent::with_seed(42);
    agent.run(0.0, 0.1, &mut snapshot, &terrain());

    assert_eq!(
        log.borrow().commands(),
        &[IssuedCommand::BuildMine { base: my_base }]
    );
}

#[test]
fn phase_switches_exactly_at_the_boundaries() {
    // A rich zero-mine base distinguishes the phases: early and mid build a
    // mine, late builds a jet.
    let expectations = [
        (179.9, "mine"),
        (180.0, "mine"),
        (359.9, "mine"),
        (360.0, "jet"),
    ];

    for (t, expected) in expectations {
        let log = shared_log();
        let mut snapshot = WorldSnapshot::new();
        let mut record = TeamRecord::new();
        record.bases.push(Box::new(
            StubBase::new(UnitId::new(), log.clone())
                .with_crystal(1000.0)
                .with_costs(CostTable::uniform(50.0)),
        ));
        snapshot.insert_team(CREATOR, record);

        let mut agent = PlayerAgent::with_seed(42);
        agent.run(t, 0.1, &mut snapshot, &terrain());

        let log = log.borrow();
        match expected {
            "mine" => assert!(
                matches!(log.commands(), [IssuedCommand::BuildMine { .. }]),
                "t={t}: expected a mine, got {:?}",
                log.commands()
            ),
            _ => assert!(
                matches!(log.commands(), [IssuedCommand::BuildJet { .. }]),
                "t={t}: expected a jet, got {:?}",
                log.commands()
            ),
        }
    }
}

#[test]
fn build_counters_persist_across_ticks() {
    let log = shared_log();
    let base_uid = UnitId::new();
    let mut agent = PlayerAgent::with_seed(42);

    // Same base uid across ten early-game ticks, mines already capped
    for _ in 0..10 {
        let mut snapshot = WorldSnapshot::new();
        let mut record = TeamRecord::new();
        record.bases.push(Box::new(
            StubBase::new(base_uid, log.clone())
                .with_mines(3)
                .with_crystal(1000.0)
                .with_costs(CostTable::uniform(50.0)),
        ));
        snapshot.insert_team(CREATOR, record);
        agent.run(10.0, 0.1, &mut snapshot, &terrain());
    }

    let log = log.borrow();
    let tanks = log
        .commands()
        .iter()
        .filter(|c| matches!(c, IssuedCommand::BuildTank { .. }))
        .count();
    let ships = log
        .commands()
        .iter()
        .filter(|c| matches!(c, IssuedCommand::BuildShip { .. }))
        .count();
    // 2 tanks first, then ships up to the cap of 6, across ticks
    assert_eq!((tanks, ships), (2, 6));
    assert_eq!(log.commands().len(), 10);
}

#[test]
fn stuck_tank_rerolls_heading_each_tick_independently() {
    init_tracing();
    let log = shared_log();
    let tank_uid = UnitId::new();
    let mut agent = PlayerAgent::with_seed(7);

    // Three ticks, identical position, never stopped. The first sighting only
    // records; each later tick must issue one fresh random heading.
    for tick in 0..3 {
        let mut snapshot = WorldSnapshot::new();
        let mut record = TeamRecord::new();
        record
            .tanks
            .push(Box::new(StubTank::new(tank_uid, log.clone()).at(42.0, 17.0)));
        snapshot.insert_team(CREATOR, record);
        agent.run(tick as f32, 0.1, &mut snapshot, &terrain());
    }

    let headings = heading_commands(&log);
    assert_eq!(headings.len(), 2);
    for h in &headings {
        assert!((0.0..360.0).contains(h));
    }
    // Independent draws, not a cached heading
    assert_ne!(headings[0], headings[1]);
}

#[test]
fn moved_tank_gets_no_reroll() {
    let log = shared_log();
    let tank_uid = UnitId::new();
    let mut agent = PlayerAgent::with_seed(7);

    for (tick, x) in [(0.0f32, 10.0f32), (1.0, 11.0), (2.0, 12.0)] {
        let mut snapshot = WorldSnapshot::new();
        let mut record = TeamRecord::new();
        record
            .tanks
            .push(Box::new(StubTank::new(tank_uid, log.clone()).at(x, 5.0)));
        snapshot.insert_team(CREATOR, record);
        agent.run(tick, 0.1, &mut snapshot, &terrain());
    }

    // No enemy bases, so a moving tank receives nothing at all
    assert!(log.borrow().commands().is_empty());
}

#[test]
fn stalled_ship_settles_far_from_home_and_rerolls_near_it() {
    let log = shared_log();
    let far = UnitId::new();
    let near = UnitId::new();
    let mut agent = PlayerAgent::with_seed(11);

    for tick in 0..2 {
        let mut snapshot = WorldSnapshot::new();
        let mut record = TeamRecord::new();
        record.ships.push(Box::new(
            StubShip::new(far, log.clone()).at(30.0, 0.0).owned_by(0.0, 0.0),
        ));
        record.ships.push(Box::new(
            StubShip::new(near, log.clone()).at(10.0, 0.0).owned_by(0.0, 0.0),
        ));
        snapshot.insert_team(CREATOR, record);
        agent.run(tick as f32, 0.1, &mut snapshot, &terrain());
    }

    let log = log.borrow();
    assert_eq!(log.commands().len(), 2);
    assert_eq!(log.commands()[0], IssuedCommand::ConvertToBase { unit: far });
    assert!(matches!(
        log.commands()[1],
        IssuedCommand::SetHeading { unit, degrees }
            if unit == near && (0.0..360.0).contains(&degrees)
    ));
}

#[test]
fn jets_idle_without_enemy_teams() {
    let log = shared_log();
    let mut snapshot = WorldSnapshot::new();
    let mut record = TeamRecord::new();
    record
        .jets
        .push(Box::new(StubJet::new(UnitId::new(), log.clone()).at(0.0, 0.0)));
    snapshot.insert_team(CREATOR, record);

    let mut agent = PlayerAgent::with_seed(5);
    agent.run(400.0, 0.1, &mut snapshot, &terrain());

    assert!(log.borrow().commands().is_empty());
}

#[test]
fn jets_converge_on_the_strongest_enemy_base() {
    let log = shared_log();
    let mut snapshot = WorldSnapshot::new();

    let jet_a = UnitId::new();
    let jet_b = UnitId::new();
    let mut record = TeamRecord::new();
    record.jets.push(Box::new(StubJet::new(jet_a, log.clone()).at(0.0, 0.0)));
    record.jets.push(Box::new(StubJet::new(jet_b, log.clone()).at(5.0, 5.0)));
    snapshot.insert_team(CREATOR, record);

    // Two enemies; "Rich" outranks "Poor", and its mined-up base outranks its
    // crystal stash
    let mut poor = TeamRecord::new();
    poor.bases
        .push(Box::new(StubBase::new(UnitId::new(), log.clone()).at(20.0, 20.0)));
    snapshot.insert_team("Poor", poor);

    let mut rich = TeamRecord::new();
    rich.bases.push(Box::new(
        StubBase::new(UnitId::new(), log.clone()).at(80.0, 90.0).with_mines(4),
    ));
    rich.bases.push(Box::new(
        StubBase::new(UnitId::new(), log.clone()).at(70.0, 70.0).with_crystal(100.0),
    ));
    snapshot.insert_team("Rich", rich);

    let mut agent = PlayerAgent::with_seed(5);
    agent.run(400.0, 0.1, &mut snapshot, &terrain());

    assert_eq!(
        log.borrow().commands(),
        &[
            IssuedCommand::Goto { unit: jet_a, x: 80.0, y: 90.0 },
            IssuedCommand::Goto { unit: jet_b, x: 80.0, y: 90.0 },
        ]
    );
}

#[test]
fn jets_head_for_the_fallback_point_when_the_enemy_is_baseless() {
    let log = shared_log();
    let mut snapshot = WorldSnapshot::new();

    let jet = UnitId::new();
    let mut record = TeamRecord::new();
    record.jets.push(Box::new(StubJet::new(jet, log.clone()).at(0.0, 0.0)));
    snapshot.insert_team(CREATOR, record);
    snapshot.insert_team("Routed", TeamRecord::new());

    let mut agent = PlayerAgent::with_seed(5);
    agent.run(400.0, 0.1, &mut snapshot, &terrain());

    assert_eq!(
        log.borrow().commands(),
        &[IssuedCommand::Goto { unit: jet, x: 75.0, y: 75.0 }]
    );
}

#[test]
fn full_tick_with_every_unit_kind_does_not_panic() {
    init_tracing();
    let log = shared_log();
    let mut agent = PlayerAgent::with_seed(99);

    for tick in 0..5 {
        let mut snapshot = WorldSnapshot::new();
        let mut record = TeamRecord::new();
        record.bases.push(Box::new(
            StubBase::new(UnitId::new(), log.clone())
                .with_crystal(200.0)
                .with_costs(CostTable::uniform(50.0)),
        ));
        record
            .tanks
            .push(Box::new(StubTank::new(UnitId::new(), log.clone()).at(1.0, 1.0)));
        record.ships.push(Box::new(
            StubShip::new(UnitId::new(), log.clone()).at(2.0, 2.0).owned_by(0.0, 0.0),
        ));
        record
            .jets
            .push(Box::new(StubJet::new(UnitId::new(), log.clone()).at(3.0, 3.0)));
        snapshot.insert_team(CREATOR, record);

        let mut enemy = TeamRecord::new();
        enemy.bases.push(Box::new(
            StubBase::new(UnitId::new(), log.clone()).at(100.0, 100.0).with_mines(2),
        ));
        snapshot.insert_team("Enemy", enemy);

        agent.run(tick as f32 * 100.0, 0.1, &mut snapshot, &terrain());
    }
}
