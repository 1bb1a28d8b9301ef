// src/repositories/robot_repo.rs

use log::{info, warn};

use crate::error::{InventoryError, Result};
use crate::models::robot::{ParameterUpdate, Robot, RobotKind};
use crate::storage::store::{persist, RecordStore};

/// Owns the robot collection and keeps every record mirrored into the
/// backing store. Lookups are linear over insertion order, so a duplicate
/// id always resolves to the earliest record carrying it.
pub struct RobotRepository {
	robots: Vec<Robot>,
	store: Box<dyn RecordStore>,
}

impl RobotRepository {
	pub fn new(store: Box<dyn RecordStore>) -> Self {
		Self {
			robots: Vec::new(),
			store,
		}
	}

	/// Build a robot from a raw type selector and add it to the collection.
	pub fn create_robot(&mut self, name: String, id: i32, weight: f32, selector: u8) -> Result<()> {
		let kind = RobotKind::from_selector(selector)
			.ok_or(InventoryError::UnknownKind(selector))?;
		self.add_robot(Robot::new(name, id, weight, kind))
	}

	/// Add a robot and persist its record.
	///
	/// The robot joins the collection even when the store rejects the
	/// write; the error is still returned so callers can surface it.
	pub fn add_robot(&mut self, robot: Robot) -> Result<()> {
		info!("Adding robot {} with id {}", robot.name(), robot.id());
		let persisted = persist(&robot, self.store.as_mut());
		if let Err(ref err) = persisted {
			warn!("Failed to persist record for {}: {}", robot.name(), err);
		}
		self.robots.push(robot);
		persisted
	}

	/// Look up a robot by id.
	pub fn find_by_id(&self, id: i32) -> Option<&Robot> {
		self.robots.iter().find(|robot| robot.id() == id)
	}

	/// Mutable lookup. Parameter edits made through the returned reference
	/// become durable on the next persist of that record; `modify_by_id`
	/// bundles the edit and the persist for the common path.
	pub fn find_by_id_mut(&mut self, id: i32) -> Option<&mut Robot> {
		self.robots.iter_mut().find(|robot| robot.id() == id)
	}

	/// Apply a parameter update to the robot with this id and persist the
	/// refreshed record.
	pub fn modify_by_id(&mut self, id: i32, update: ParameterUpdate) -> Result<()> {
		let robot = self
			.robots
			.iter_mut()
			.find(|robot| robot.id() == id)
			.ok_or(InventoryError::NotFound(id))?;
		robot.apply_parameter_update(update)?;
		info!("Updated parameters for robot {} (id {})", robot.name(), id);
		persist(robot, self.store.as_mut())
	}

	/// Rendered record blocks in insertion order. The iterator borrows the
	/// collection, so listing is restartable.
	pub fn list_all(&self) -> impl Iterator<Item = String> + '_ {
		self.robots.iter().map(Robot::to_string)
	}

	/// All robots in insertion order.
	pub fn robots(&self) -> &[Robot] {
		&self.robots
	}

	pub fn len(&self) -> usize {
		self.robots.len()
	}

	pub fn is_empty(&self) -> bool {
		self.robots.is_empty()
	}
}
