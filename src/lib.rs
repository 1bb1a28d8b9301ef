//! # robot_inventory
//!
//! A terminal inventory manager for robot records. Each record is one of a
//! fixed set of robot kinds (line follower, maze solver, drone) carrying
//! kind-specific tunable parameters, owned by a repository that mirrors
//! every change into a file-per-record store.
//!
//! The interactive shell in [`ui`] only drives the repository; the record
//! model, lookup, and persistence live below it and run against any
//! [`RecordStore`], so the same logic is exercised by scripted buffers in
//! tests and by stdin/stdout in the binary.

pub mod error;
pub mod models;
pub mod repositories;
pub mod storage;
pub mod ui;
pub mod utils;

pub use error::{InventoryError, Result};
pub use models::robot::{ParameterUpdate, Robot, RobotKind};
pub use repositories::robot_repo::RobotRepository;
pub use storage::store::{FileStore, MemoryStore, RecordStore};
