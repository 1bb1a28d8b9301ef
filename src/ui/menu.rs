use std::io::{self, BufRead, Write};
use std::str::FromStr;

use crate::error::InventoryError;
use crate::models::robot::{ParameterUpdate, RobotKind};
use crate::repositories::robot_repo::RobotRepository;

use super::views;

/// Menu-driven shell over a repository. Input and output are injected so
/// the same loop runs against stdin/stdout or against scripted buffers.
pub struct Shell<R, W> {
    input: R,
    output: W,
    repository: RobotRepository,
}

impl<R: BufRead, W: Write> Shell<R, W> {
    pub fn new(input: R, output: W, repository: RobotRepository) -> Self {
        Self {
            input,
            output,
            repository,
        }
    }

    pub fn repository(&self) -> &RobotRepository {
        &self.repository
    }

    /// Runs the menu loop until the user exits or input runs dry.
    pub fn run(&mut self) -> io::Result<()> {
        loop {
            views::render_menu(&mut self.output)?;
            let choice = match self.read_line()? {
                Some(choice) => choice,
                None => break,
            };
            match choice.as_str() {
                "1" => self.add_robot()?,
                "2" => self.display_robots()?,
                "3" => self.modify_parameters()?,
                "4" => break,
                _ => writeln!(self.output, "Please select an option between 1 and 4.")?,
            }
            writeln!(self.output)?;
        }
        Ok(())
    }

    fn add_robot(&mut self) -> io::Result<()> {
        writeln!(self.output, "Add New Robot")?;
        writeln!(self.output)?;

        let name = match self.prompt("Enter Robot Name: ")? {
            Some(name) => name,
            None => return Ok(()),
        };
        let id = match self.prompt_parsed::<i32>("Enter Robot ID: ")? {
            Some(id) => id,
            None => return Ok(()),
        };
        let weight = match self.prompt_parsed::<f32>("Enter Robot Weight: ")? {
            Some(weight) => weight,
            None => return Ok(()),
        };

        views::render_kind_menu(&mut self.output)?;
        // The selector goes to the repository unchecked; anything that is
        // not a known type comes back as an error rendered below.
        let selector = match self.read_line()? {
            Some(line) => line.parse::<u8>().unwrap_or(0),
            None => return Ok(()),
        };

        match self.repository.create_robot(name, id, weight, selector) {
            Ok(()) => writeln!(self.output, "Robot added successfully!")?,
            Err(InventoryError::UnknownKind(_)) => {
                writeln!(self.output, "Invalid type selected. Returning to menu.")?
            }
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    fn display_robots(&mut self) -> io::Result<()> {
        views::render_robot_list(self.repository.list_all(), &mut self.output)
    }

    fn modify_parameters(&mut self) -> io::Result<()> {
        let id = match self.prompt_parsed::<i32>("Enter Robot ID to modify parameters: ")? {
            Some(id) => id,
            None => return Ok(()),
        };

        let kind = match self.repository.find_by_id(id) {
            Some(robot) => robot.kind().clone(),
            None => {
                writeln!(self.output, "Robot ID not found.")?;
                return Ok(());
            }
        };

        writeln!(self.output, "Modify {} Parameters:", kind.type_name())?;
        let update = match kind {
            RobotKind::LineFollower { .. } | RobotKind::MazeSolver { .. } => {
                let speed = match self.prompt_parsed::<f32>("Enter new speed: ")? {
                    Some(speed) => speed,
                    None => return Ok(()),
                };
                let pid = match self.prompt_floats("Enter PID values (P, I, D): ", 3)? {
                    Some(pid) => pid,
                    None => return Ok(()),
                };
                ParameterUpdate::Pid {
                    speed,
                    pid: [pid[0], pid[1], pid[2]],
                }
            }
            RobotKind::Drone { .. } => {
                let speed = match self.prompt_parsed::<f32>("Enter new speed: ")? {
                    Some(speed) => speed,
                    None => return Ok(()),
                };
                let location = match self.prompt_floats("Enter new location (x, y): ", 2)? {
                    Some(location) => location,
                    None => return Ok(()),
                };
                ParameterUpdate::Location {
                    speed,
                    location: [location[0], location[1]],
                }
            }
        };

        match self.repository.modify_by_id(id, update) {
            Ok(()) => writeln!(self.output, "Parameters updated successfully!")?,
            Err(err) => writeln!(self.output, "Error: {}", err)?,
        }
        Ok(())
    }

    /// Reads one trimmed line, or `None` once input is exhausted.
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt(&mut self, message: &str) -> io::Result<Option<String>> {
        write!(self.output, "{}", message)?;
        self.output.flush()?;
        self.read_line()
    }

    fn prompt_parsed<T: FromStr>(&mut self, message: &str) -> io::Result<Option<T>> {
        loop {
            let line = match self.prompt(message)? {
                Some(line) => line,
                None => return Ok(None),
            };
            match line.parse::<T>() {
                Ok(value) => return Ok(Some(value)),
                Err(_) => writeln!(self.output, "Please enter a valid number.")?,
            }
        }
    }

    /// Prompts for exactly `count` floats on one line, comma or whitespace
    /// separated, reprompting until the line parses.
    fn prompt_floats(&mut self, message: &str, count: usize) -> io::Result<Option<Vec<f32>>> {
        loop {
            let line = match self.prompt(message)? {
                Some(line) => line,
                None => return Ok(None),
            };
            let values: Vec<f32> = line
                .split(|c: char| c == ',' || c.is_whitespace())
                .filter(|part| !part.is_empty())
                .filter_map(|part| part.parse().ok())
                .collect();
            if values.len() == count {
                return Ok(Some(values));
            }
            writeln!(self.output, "Please enter {} numbers.", count)?;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::robot::Robot;
    use crate::storage::store::MemoryStore;
    use std::io::Cursor;

    fn run_script(script: &str) -> (String, Vec<Robot>) {
        let mut out = Vec::new();
        let robots;
        {
            let repository = RobotRepository::new(Box::new(MemoryStore::new()));
            let mut shell = Shell::new(Cursor::new(script.to_string()), &mut out, repository);
            shell.run().unwrap();
            robots = shell.repository().robots().to_vec();
        }
        (String::from_utf8(out).unwrap(), robots)
    }

    #[test]
    fn test_exit_leaves_collection_empty() {
        let (transcript, robots) = run_script("4\n");

        assert!(transcript.contains("Robot Management System"));
        assert!(transcript.contains("Select an option: "));
        assert!(robots.is_empty());
    }

    #[test]
    fn test_add_flow_creates_robot() {
        let (transcript, robots) = run_script("1\nRex\n1\n2.5\n1\n4\n");

        assert!(transcript.contains("Add New Robot"));
        assert!(transcript.contains("Enter Robot Name: "));
        assert!(transcript.contains("Select Robot Type:"));
        assert!(transcript.contains("Robot added successfully!"));
        assert_eq!(robots.len(), 1);
        assert_eq!(robots[0].name(), "Rex");
        assert_eq!(robots[0].type_name(), "Line Follower");
    }

    #[test]
    fn test_invalid_type_selector_returns_to_menu() {
        let (transcript, robots) = run_script("1\nGhost\n5\n1.5\n7\n4\n");

        assert!(transcript.contains("Invalid type selected. Returning to menu."));
        assert!(robots.is_empty());
    }

    #[test]
    fn test_non_numeric_selector_is_treated_as_invalid() {
        let (transcript, robots) = run_script("1\nGhost\n5\n1.5\nwheeled\n4\n");

        assert!(transcript.contains("Invalid type selected. Returning to menu."));
        assert!(robots.is_empty());
    }

    #[test]
    fn test_display_on_empty_inventory_shows_notice() {
        let (transcript, _) = run_script("2\n4\n");

        assert!(transcript.contains("All Robots:\n\nNo robots found.\n"));
    }

    #[test]
    fn test_display_renders_full_blocks() {
        let (transcript, _) = run_script("1\nRex\n1\n2.5\n1\n2\n4\n");

        assert!(transcript.contains("All Robots:"));
        assert!(transcript.contains(
            "Name: Rex\nID: 1\nWeight: 2.5\nType: Line Follower\nSpeed: 0\nPID: 0, 0, 0\n\
             -------------------------\n"
        ));
    }

    #[test]
    fn test_modify_updates_pid_parameters() {
        let (transcript, robots) = run_script("1\nRex\n1\n2.5\n1\n3\n1\n3.2\n1 0.5 0.1\n4\n");

        assert!(transcript.contains("Modify Line Follower Parameters:"));
        assert!(transcript.contains("Parameters updated successfully!"));
        assert!(robots[0]
            .to_string()
            .contains("Speed: 3.2\nPID: 1, 0.5, 0.1\n"));
    }

    #[test]
    fn test_modify_accepts_comma_separated_values() {
        let (_, robots) = run_script("1\nRex\n1\n2.5\n2\n3\n1\n3.2\n1, 0.5, 0.1\n4\n");

        assert!(robots[0]
            .to_string()
            .contains("Speed: 3.2\nPID: 1, 0.5, 0.1\n"));
    }

    #[test]
    fn test_modify_drone_prompts_for_location() {
        let (transcript, robots) = run_script("1\nHawk\n2\n6\n3\n3\n2\n4.5\n12 -3.5\n4\n");

        assert!(transcript.contains("Modify Drone Parameters:"));
        assert!(transcript.contains("Enter new location (x, y): "));
        assert!(robots[0]
            .to_string()
            .contains("Speed: 4.5\nLocation: (12, -3.5)\n"));
    }

    #[test]
    fn test_modify_unknown_id_reports_not_found() {
        let (transcript, _) = run_script("3\n99\n4\n");

        assert!(transcript.contains("Robot ID not found."));
    }

    #[test]
    fn test_bad_number_reprompts() {
        let (transcript, robots) = run_script("1\nRex\nabc\n1\n2.5\n1\n4\n");

        assert!(transcript.contains("Please enter a valid number."));
        assert_eq!(robots[0].id(), 1);
    }

    #[test]
    fn test_wrong_float_count_reprompts() {
        let (transcript, robots) = run_script("1\nRex\n1\n2.5\n1\n3\n1\n2\n1 2\n1 2 3\n4\n");

        assert!(transcript.contains("Please enter 3 numbers."));
        assert!(robots[0].to_string().contains("PID: 1, 2, 3\n"));
    }

    #[test]
    fn test_unknown_menu_option_is_reported() {
        let (transcript, _) = run_script("9\n4\n");

        assert!(transcript.contains("Please select an option between 1 and 4."));
    }

    #[test]
    fn test_eof_mid_flow_exits_cleanly() {
        let (transcript, robots) = run_script("1\nRex\n");

        assert!(transcript.contains("Enter Robot ID: "));
        assert!(robots.is_empty());
    }
}
