//! Scripted stub entities
//!
//! Reference implementations of the command surface backed by a shared call
//! log. They let the strategy run without the engine: tests (and offline
//! experiments) assemble a snapshot out of stubs, run the agent, and assert
//! on the commands it issued.

use std::cell::RefCell;
use std::rc::Rc;

use crate::command::{BaseCommands, JetCommands, ShipCommands, TankCommands, VehicleCommands};
use crate::core::error::NavigationError;
use crate::core::types::{UnitId, UnitKind, Vec2};

/// One command as issued against a stub entity
#[derive(Debug, Clone, PartialEq)]
pub enum IssuedCommand {
    BuildMine { base: UnitId },
    BuildTank { base: UnitId, heading: f32 },
    BuildShip { base: UnitId, heading: f32 },
    BuildJet { base: UnitId, heading: f32 },
    SetHeading { unit: UnitId, degrees: f32 },
    Goto { unit: UnitId, x: f32, y: f32 },
    ConvertToBase { unit: UnitId },
}

/// Ordered log of every command issued during a tick
#[derive(Debug, Default)]
pub struct CommandLog {
    commands: Vec<IssuedCommand>,
}

impl CommandLog {
    fn record(&mut self, command: IssuedCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[IssuedCommand] {
        &self.commands
    }

    pub fn clear(&mut self) {
        self.commands.clear();
    }
}

/// Log handle shared between the test and its stubs
pub type SharedLog = Rc<RefCell<CommandLog>>;

pub fn shared_log() -> SharedLog {
    Rc::new(RefCell::new(CommandLog::default()))
}

/// Per-kind construction costs for a stub base
#[derive(Debug, Clone, Copy)]
pub struct CostTable {
    pub mine: f32,
    pub tank: f32,
    pub ship: f32,
    pub jet: f32,
}

impl CostTable {
    /// Same cost for every kind
    pub fn uniform(cost: f32) -> Self {
        Self {
            mine: cost,
            tank: cost,
            ship: cost,
            jet: cost,
        }
    }

    fn get(&self, kind: UnitKind) -> f32 {
        match kind {
            UnitKind::Mine => self.mine,
            UnitKind::Tank => self.tank,
            UnitKind::Ship => self.ship,
            UnitKind::Jet => self.jet,
        }
    }
}

impl Default for CostTable {
    fn default() -> Self {
        Self::uniform(100.0)
    }
}

pub struct StubBase {
    pub uid: UnitId,
    pub position: Vec2,
    pub crystal: f32,
    pub mines: u32,
    pub costs: CostTable,
    log: SharedLog,
}

impl StubBase {
    pub fn new(uid: UnitId, log: SharedLog) -> Self {
        Self {
            uid,
            position: Vec2::default(),
            crystal: 0.0,
            mines: 0,
            costs: CostTable::default(),
            log,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn with_crystal(mut self, crystal: f32) -> Self {
        self.crystal = crystal;
        self
    }

    pub fn with_mines(mut self, mines: u32) -> Self {
        self.mines = mines;
        self
    }

    pub fn with_costs(mut self, costs: CostTable) -> Self {
        self.costs = costs;
        self
    }
}

impl BaseCommands for StubBase {
    fn uid(&self) -> UnitId {
        self.uid
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn crystal(&self) -> f32 {
        self.crystal
    }

    fn mines(&self) -> u32 {
        self.mines
    }

    fn cost(&self, kind: UnitKind) -> f32 {
        self.costs.get(kind)
    }

    fn build_mine(&mut self) {
        self.log.borrow_mut().record(IssuedCommand::BuildMine { base: self.uid });
    }

    fn build_tank(&mut self, heading: f32) -> UnitId {
        self.log
            .borrow_mut()
            .record(IssuedCommand::BuildTank { base: self.uid, heading });
        UnitId::new()
    }

    fn build_ship(&mut self, heading: f32) -> UnitId {
        self.log
            .borrow_mut()
            .record(IssuedCommand::BuildShip { base: self.uid, heading });
        UnitId::new()
    }

    fn build_jet(&mut self, heading: f32) -> UnitId {
        self.log
            .borrow_mut()
            .record(IssuedCommand::BuildJet { base: self.uid, heading });
        UnitId::new()
    }
}

pub struct StubTank {
    pub uid: UnitId,
    pub position: Vec2,
    pub stopped: bool,
    /// When set, `goto` refuses with `Unreachable`
    pub unreachable: bool,
    log: SharedLog,
}

impl StubTank {
    pub fn new(uid: UnitId, log: SharedLog) -> Self {
        Self {
            uid,
            position: Vec2::default(),
            stopped: false,
            unreachable: false,
            log,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    /// Mark the tank as parked by the engine
    pub fn parked(mut self, stopped: bool) -> Self {
        self.stopped = stopped;
        self
    }

    pub fn unreachable(mut self) -> Self {
        self.unreachable = true;
        self
    }
}

impl VehicleCommands for StubTank {
    fn uid(&self) -> UnitId {
        self.uid
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_heading(&mut self, degrees: f32) {
        self.log
            .borrow_mut()
            .record(IssuedCommand::SetHeading { unit: self.uid, degrees });
    }

    fn goto(&mut self, x: f32, y: f32) -> Result<(), NavigationError> {
        if self.unreachable {
            return Err(NavigationError::Unreachable { x, y });
        }
        self.log.borrow_mut().record(IssuedCommand::Goto { unit: self.uid, x, y });
        Ok(())
    }

    fn get_distance(&self, x: f32, y: f32) -> f32 {
        self.position.distance(&Vec2::new(x, y))
    }
}

impl TankCommands for StubTank {
    fn stopped(&self) -> bool {
        self.stopped
    }
}

pub struct StubShip {
    pub uid: UnitId,
    pub position: Vec2,
    pub owner_position: Vec2,
    log: SharedLog,
}

impl StubShip {
    pub fn new(uid: UnitId, log: SharedLog) -> Self {
        Self {
            uid,
            position: Vec2::default(),
            owner_position: Vec2::default(),
            log,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }

    pub fn owned_by(mut self, x: f32, y: f32) -> Self {
        self.owner_position = Vec2::new(x, y);
        self
    }
}

impl VehicleCommands for StubShip {
    fn uid(&self) -> UnitId {
        self.uid
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_heading(&mut self, degrees: f32) {
        self.log
            .borrow_mut()
            .record(IssuedCommand::SetHeading { unit: self.uid, degrees });
    }

    fn goto(&mut self, x: f32, y: f32) -> Result<(), NavigationError> {
        self.log.borrow_mut().record(IssuedCommand::Goto { unit: self.uid, x, y });
        Ok(())
    }

    fn get_distance(&self, x: f32, y: f32) -> f32 {
        self.position.distance(&Vec2::new(x, y))
    }
}

impl ShipCommands for StubShip {
    fn owner_position(&self) -> Vec2 {
        self.owner_position
    }

    fn convert_to_base(&mut self) {
        self.log
            .borrow_mut()
            .record(IssuedCommand::ConvertToBase { unit: self.uid });
    }
}

pub struct StubJet {
    pub uid: UnitId,
    pub position: Vec2,
    log: SharedLog,
}

impl StubJet {
    pub fn new(uid: UnitId, log: SharedLog) -> Self {
        Self {
            uid,
            position: Vec2::default(),
            log,
        }
    }

    pub fn at(mut self, x: f32, y: f32) -> Self {
        self.position = Vec2::new(x, y);
        self
    }
}

impl VehicleCommands for StubJet {
    fn uid(&self) -> UnitId {
        self.uid
    }

    fn position(&self) -> Vec2 {
        self.position
    }

    fn set_heading(&mut self, degrees: f32) {
        self.log
            .borrow_mut()
            .record(IssuedCommand::SetHeading { unit: self.uid, degrees });
    }

    fn goto(&mut self, x: f32, y: f32) -> Result<(), NavigationError> {
        self.log.borrow_mut().record(IssuedCommand::Goto { unit: self.uid, x, y });
        Ok(())
    }

    fn get_distance(&self, x: f32, y: f32) -> f32 {
        self.position.distance(&Vec2::new(x, y))
    }
}

impl JetCommands for StubJet {}
