// src/models/robot.rs

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::{InventoryError, Result};

/// The kind-specific half of a robot record. Line followers and maze solvers
/// carry the same parameter shape but stay distinct kinds: their tuning
/// evolves independently.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum RobotKind {
	LineFollower { speed: f32, pid: [f32; 3] },
	MazeSolver { speed: f32, pid: [f32; 3] },
	Drone { speed: f32, location: [f32; 2] },
}

impl RobotKind {
	/// Maps the numeric type selector (1, 2 or 3) to a kind with zeroed
	/// parameters. Any other selector is unknown.
	pub fn from_selector(selector: u8) -> Option<RobotKind> {
		match selector {
			1 => Some(RobotKind::LineFollower {
				speed: 0.0,
				pid: [0.0; 3],
			}),
			2 => Some(RobotKind::MazeSolver {
				speed: 0.0,
				pid: [0.0; 3],
			}),
			3 => Some(RobotKind::Drone {
				speed: 0.0,
				location: [0.0; 2],
			}),
			_ => None,
		}
	}

	pub fn type_name(&self) -> &'static str {
		match self {
			RobotKind::LineFollower { .. } => "Line Follower",
			RobotKind::MazeSolver { .. } => "Maze Solver",
			RobotKind::Drone { .. } => "Drone",
		}
	}
}

impl fmt::Display for RobotKind {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.type_name())
	}
}

/// Variant-appropriate numeric inputs for a parameter edit: speed plus PID
/// gains for line followers and maze solvers, speed plus a coordinate pair
/// for drones.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum ParameterUpdate {
	Pid { speed: f32, pid: [f32; 3] },
	Location { speed: f32, location: [f32; 2] },
}

/// One robot record: the shared header plus the kind payload.
///
/// `name`, `id` and `weight` are fixed at construction; only the tunable
/// parameters inside `kind` change afterwards, through
/// [`Robot::apply_parameter_update`]. The kind itself never changes.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Robot {
	name: String,
	id: i32,
	weight: f32,
	kind: RobotKind,
}

impl Robot {
	pub fn new(name: String, id: i32, weight: f32, kind: RobotKind) -> Self {
		Self {
			name,
			id,
			weight,
			kind,
		}
	}

	/// The record name, also the persistence key.
	pub fn name(&self) -> &str {
		&self.name
	}

	pub fn id(&self) -> i32 {
		self.id
	}

	pub fn weight(&self) -> f32 {
		self.weight
	}

	pub fn kind(&self) -> &RobotKind {
		&self.kind
	}

	pub fn type_name(&self) -> &'static str {
		self.kind.type_name()
	}

	/// Overwrites the tunable parameters in place. Any real value is
	/// accepted, negative speed included. An update shape that does not fit
	/// this record's kind is rejected without touching any field.
	pub fn apply_parameter_update(&mut self, update: ParameterUpdate) -> Result<()> {
		let kind_name = self.type_name();
		match (&mut self.kind, update) {
			(
				RobotKind::LineFollower { speed, pid } | RobotKind::MazeSolver { speed, pid },
				ParameterUpdate::Pid {
					speed: new_speed,
					pid: new_pid,
				},
			) => {
				*speed = new_speed;
				*pid = new_pid;
				Ok(())
			}
			(
				RobotKind::Drone { speed, location },
				ParameterUpdate::Location {
					speed: new_speed,
					location: new_location,
				},
			) => {
				*speed = new_speed;
				*location = new_location;
				Ok(())
			}
			_ => Err(InventoryError::WrongParameters { kind: kind_name }),
		}
	}
}

impl fmt::Display for Robot {
	/// Renders the full record block: common fields first, then the kind
	/// lines. This text is both the on-screen form and the persisted file
	/// content, so it must stay deterministic.
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		writeln!(f, "Name: {}", self.name)?;
		writeln!(f, "ID: {}", self.id)?;
		writeln!(f, "Weight: {:.1}", self.weight)?;
		writeln!(f, "Type: {}", self.kind)?;
		match &self.kind {
			RobotKind::LineFollower { speed, pid } | RobotKind::MazeSolver { speed, pid } => {
				writeln!(f, "Speed: {}", speed)?;
				writeln!(f, "PID: {}, {}, {}", pid[0], pid[1], pid[2])
			}
			RobotKind::Drone { speed, location } => {
				writeln!(f, "Speed: {}", speed)?;
				writeln!(f, "Location: ({}, {})", location[0], location[1])
			}
		}
	}
}
