//! Error types for the robot inventory core.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum InventoryError {
	#[error("no robot with id {0}")]
	NotFound(i32),

	#[error("unknown robot type selector {0}")]
	UnknownKind(u8),

	#[error("parameter set does not fit a {kind} robot")]
	WrongParameters { kind: &'static str },

	#[error("failed to persist robot record: {0}")]
	Persistence(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, InventoryError>;
