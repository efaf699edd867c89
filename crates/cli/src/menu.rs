/// Main menu shown before every command prompt.
pub const MENU_TEXT: &str = "Main Menu

1) Load Stations from Disk
2) Write Stations to Disk
3) Add New Station
4) List All Stations
q) Quit

";

/// Commands selectable from the main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Load,
    Write,
    Add,
    List,
    Quit,
}

impl Command {
    /// Map a menu selection to its command.
    pub fn parse(selection: &str) -> Option<Self> {
        match selection {
            "1" => Some(Command::Load),
            "2" => Some(Command::Write),
            "3" => Some(Command::Add),
            "4" => Some(Command::List),
            "q" | "Q" => Some(Command::Quit),
            _ => None,
        }
    }
}
