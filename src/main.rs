// src/main.rs

use std::io;

use anyhow::{Context, Result};
use log::info;

use robot_inventory::ui::menu::Shell;
use robot_inventory::utils;
use robot_inventory::{FileStore, RobotRepository};

struct App {
	repository: RobotRepository,
}

impl App {
	fn new() -> Result<Self> {
		utils::logger::init();
		info!("Starting robot inventory manager");

		// Records land next to the binary's working directory, one
		// <name>_robot.txt per robot.
		let store = FileStore::open(".")
			.context("Failed to open the robot record directory")?;

		Ok(App {
			repository: RobotRepository::new(Box::new(store)),
		})
	}

	fn run(self) -> Result<()> {
		let stdin = io::stdin();
		let stdout = io::stdout();

		let mut shell = Shell::new(stdin.lock(), stdout.lock(), self.repository);
		shell
			.run()
			.context("Failed to run the interactive shell")?;

		info!("Robot inventory manager shutting down");
		Ok(())
	}
}

fn main() -> Result<()> {
	App::new()?.run()
}
