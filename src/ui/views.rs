use std::io::{self, Write};

const LIST_SEPARATOR: &str = "-------------------------";

/// Renders the top-level menu and leaves the cursor on the option prompt.
pub fn render_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Robot Management System")?;
    writeln!(out)?;
    writeln!(out, "1. Add Robot")?;
    writeln!(out, "2. Display All Robots")?;
    writeln!(out, "3. Modify Robot Parameters")?;
    writeln!(out, "4. Exit")?;
    writeln!(out)?;
    write!(out, "Select an option: ")?;
    out.flush()
}

pub fn render_kind_menu<W: Write>(out: &mut W) -> io::Result<()> {
    writeln!(out, "Select Robot Type:")?;
    writeln!(out, "1. Line Follower")?;
    writeln!(out, "2. Maze Solver")?;
    writeln!(out, "3. Drone")?;
    out.flush()
}

/// Renders every record block in insertion order, each closed by a
/// separator rule, or a notice when the inventory is empty.
pub fn render_robot_list<W, I>(blocks: I, out: &mut W) -> io::Result<()>
where
    W: Write,
    I: Iterator<Item = String>,
{
    writeln!(out, "All Robots:")?;
    writeln!(out)?;
    let mut blocks = blocks.peekable();
    if blocks.peek().is_none() {
        return writeln!(out, "No robots found.");
    }
    for block in blocks {
        write!(out, "{}", block)?;
        writeln!(out, "{}", LIST_SEPARATOR)?;
    }
    Ok(())
}
