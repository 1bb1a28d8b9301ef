// src/storage/store.rs

use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

use log::{debug, info};

use crate::error::Result;
use crate::models::robot::Robot;

/// Destination for serialized robot records, keyed by record name.
///
/// Persisting through a sink instead of writing files directly keeps the
/// record format independent of where it lands: the filesystem in the
/// running tool, a plain map in tests, or some future backend.
pub trait RecordStore {
	/// Stores `contents` under `name`, replacing whatever was there before.
	fn write(&mut self, name: &str, contents: &str) -> io::Result<()>;
}

/// Filesystem sink: one `<name>_robot.txt` per record under a root
/// directory, overwritten on every persist.
///
/// The record name goes into the file name unescaped, so a name containing
/// a path separator produces an invalid path and the write fails.
pub struct FileStore {
	root: PathBuf,
}

impl FileStore {
	/// Opens a store rooted at `root`, creating the directory if needed.
	pub fn open(root: impl Into<PathBuf>) -> io::Result<FileStore> {
		let root = root.into();
		fs::create_dir_all(&root)?;
		info!("Robot records will be stored under {:?}", root);
		Ok(FileStore { root })
	}

	/// The path a record with this name is written to.
	pub fn record_path(&self, name: &str) -> PathBuf {
		self.root.join(format!("{}_robot.txt", name))
	}
}

impl RecordStore for FileStore {
	fn write(&mut self, name: &str, contents: &str) -> io::Result<()> {
		let path = self.record_path(name);
		fs::write(&path, contents)?;
		debug!("Wrote {} bytes to {:?}", contents.len(), path);
		Ok(())
	}
}

/// In-memory sink. Backs the unit tests, where round-trips are asserted
/// against map entries instead of real files.
#[derive(Debug, Default)]
pub struct MemoryStore {
	records: HashMap<String, String>,
}

impl MemoryStore {
	pub fn new() -> MemoryStore {
		MemoryStore::default()
	}

	pub fn get(&self, name: &str) -> Option<&str> {
		self.records.get(name).map(String::as_str)
	}

	pub fn len(&self) -> usize {
		self.records.len()
	}

	pub fn is_empty(&self) -> bool {
		self.records.is_empty()
	}
}

impl RecordStore for MemoryStore {
	fn write(&mut self, name: &str, contents: &str) -> io::Result<()> {
		self.records.insert(name.to_string(), contents.to_string());
		Ok(())
	}
}

/// Serializes `robot` into its record block and writes it through `store`
/// under the robot's name.
pub fn persist(robot: &Robot, store: &mut dyn RecordStore) -> Result<()> {
	store.write(robot.name(), &robot.to_string())?;
	Ok(())
}
