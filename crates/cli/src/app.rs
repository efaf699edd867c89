use std::{
    io::{self, BufRead, Write},
    path::PathBuf,
};

use anyhow::Result;
use ksm_core::{Console, LoadOutcome, StationStore};
use tracing::{error, info};

use crate::menu::{Command, MENU_TEXT};

/// Top-level command loop over a line-oriented console.
pub struct KsmApp<R, W> {
    console: Console<R, W>,
    store: StationStore,
    data_file: PathBuf,
}

impl<R: BufRead, W: Write> KsmApp<R, W> {
    pub fn new(input: R, output: W, data_file: impl Into<PathBuf>) -> Self {
        Self {
            console: Console::new(input, output),
            store: StationStore::new(),
            data_file: data_file.into(),
        }
    }

    /// Run until the operator quits or input is exhausted.
    pub fn run(&mut self) -> Result<()> {
        loop {
            self.console.say("")?;
            self.console.prompt(MENU_TEXT)?;
            self.console.prompt("Enter Your Selection: ")?;

            let selection = match self.console.next_token("menu selection") {
                Ok(selection) => selection,
                Err(err) if err.kind() == io::ErrorKind::UnexpectedEof => {
                    info!("Input closed, leaving station manager");
                    return Ok(());
                }
                Err(err) => return Err(err.into()),
            };

            match Command::parse(&selection) {
                Some(Command::Quit) => return Ok(()),
                Some(command) => self.execute(command)?,
                None => self.console.say("Error reading selection.")?,
            }
        }
    }

    fn execute(&mut self, command: Command) -> Result<()> {
        match command {
            Command::Load => self.load_stations(),
            Command::Write => self.write_stations(),
            Command::Add => {
                let station = self.console.collect_station()?;
                info!(station_id = station.id(), "Added station");
                self.store.push(station);
                Ok(())
            }
            Command::List => {
                if self.store.is_empty() {
                    self.console.say("No stations loaded.")?;
                } else {
                    let listing = self.store.listing();
                    self.console.prompt(&listing)?;
                }
                Ok(())
            }
            Command::Quit => Ok(()),
        }
    }

    fn load_stations(&mut self) -> Result<()> {
        let path = self.data_file.display().to_string();
        match self.store.load_from(&self.data_file) {
            Ok(LoadOutcome::Loaded(count)) => {
                self.console
                    .say(format_args!("Read in {count} stations from file {path}."))?;
            }
            Ok(LoadOutcome::Missing) => {
                self.console.say(format_args!("Error: {path} not found."))?;
                self.console.say("Aborting.")?;
            }
            Err(err) => {
                error!("Failed to load stations: {err:#}");
                self.console.say(format_args!("Error: {err:#}"))?;
                self.console.say("Aborting.")?;
            }
        }
        Ok(())
    }

    fn write_stations(&mut self) -> Result<()> {
        match self.store.write_to(&self.data_file) {
            Ok(_) => {
                self.console.say("Wrote stations list to file.")?;
                self.console.say("")?;
            }
            Err(err) => {
                error!("Failed to write stations: {err:#}");
                self.console.say(format_args!("Error: {err:#}"))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::{fs, io::Cursor};

    use ksm_core::OrbitedBody;
    use tempfile::tempdir;

    const ADD_STATION: &str = "3\nKSS-1\nKerbin Orbital\n6\ny\n150000\n120000\nmun\na\n2\nf\ni\n1\nj\nJebediah\n\n";

    fn run_script(script: &str, data_file: PathBuf) -> Result<(StationStore, String)> {
        run_bytes(script.as_bytes(), data_file)
    }

    fn run_bytes(script: &[u8], data_file: PathBuf) -> Result<(StationStore, String)> {
        let mut app = KsmApp::new(Cursor::new(script.to_vec()), Vec::new(), data_file);
        app.run()?;
        let KsmApp { store, console, .. } = app;
        let (_, output) = console.into_inner();
        Ok((store, String::from_utf8(output)?))
    }

    #[test]
    fn add_write_and_reload() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stations.json");

        let script = format!("{ADD_STATION}4\n2\nq\n");
        let (store, output) = run_script(&script, path.clone())?;
        assert_eq!(store.len(), 1);
        assert_eq!(store.stations()[0].orbiting_body(), OrbitedBody::Mun);
        assert!(output.contains("0) Station Information"));
        assert!(output.contains("Wrote stations list to file."));
        assert!(path.exists());

        let (reloaded, output) = run_script("1\nq\n", path.clone())?;
        assert_eq!(reloaded.stations(), store.stations());
        assert!(output.contains(&format!("Read in 1 stations from file {}.", path.display())));
        Ok(())
    }

    #[test]
    fn missing_file_is_reported_and_loop_continues() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("absent.json");
        let (store, output) = run_script("1\n4\nq\n", path.clone())?;
        assert!(store.is_empty());
        assert!(output.contains(&format!("Error: {} not found.\nAborting.", path.display())));
        assert!(output.contains("No stations loaded."));
        Ok(())
    }

    #[test]
    fn malformed_file_is_reported_without_exiting() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stations.json");
        fs::write(&path, "[{\"id\": \"KSS-1\"}]")?;
        let (store, output) = run_script("1\nq\n", path)?;
        assert!(store.is_empty());
        assert!(output.contains("missing field"));
        assert!(output.contains("Aborting."));
        Ok(())
    }

    #[test]
    fn write_failure_is_reported_without_exiting() -> Result<()> {
        let dir = tempdir()?;
        // A directory cannot be overwritten as a file.
        let (_, output) = run_script("2\n4\nq\n", dir.path().to_path_buf())?;
        assert!(output.contains("failed to write"));
        assert!(output.contains("No stations loaded."));
        Ok(())
    }

    #[test]
    fn unknown_selection_is_rejected() -> Result<()> {
        let dir = tempdir()?;
        let (_, output) = run_script("7\nq\n", dir.path().join("stations.json"))?;
        assert!(output.contains("Error reading selection."));
        Ok(())
    }

    #[test]
    fn invalid_utf8_input_keeps_the_loop_running() -> Result<()> {
        let dir = tempdir()?;
        let script = b"\xff\xfe\n3\nKSS-1\n\xff\nName\n2\ny\n1\n1\nKerbin\nf\nj\n\n4\nq\n";
        let (store, output) = run_bytes(script, dir.path().join("stations.json"))?;
        assert!(output.contains("Error reading selection."));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stations()[0].name(), "Name");
        assert!(output.contains("0) Station Information"));
        Ok(())
    }

    #[test]
    fn end_of_input_exits_cleanly() -> Result<()> {
        let dir = tempdir()?;
        let (store, output) = run_script("", dir.path().join("stations.json"))?;
        assert!(store.is_empty());
        assert!(output.contains("Main Menu"));
        Ok(())
    }
}
