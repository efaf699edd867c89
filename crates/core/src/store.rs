//! In-memory station collection and its on-disk persistence.

use std::{fs, io, path::Path};

use anyhow::{Context, Result};
use serde_json::Value;
use tracing::{info, warn};

use crate::{codec, station::Station};

/// Default file stations are read from and written to.
pub const DEFAULT_STATIONS_FILE: &str = "stations.json";

/// Result of a load attempt that did not fail outright.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadOutcome {
    /// The file was read and replaced the collection with this many stations.
    Loaded(usize),
    /// The file does not exist; the collection was left untouched.
    Missing,
}

/// Ordered collection of stations owned by the command loop.
#[derive(Debug, Default)]
pub struct StationStore {
    stations: Vec<Station>,
}

impl StationStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a finished station.
    pub fn push(&mut self, station: Station) {
        self.stations.push(station);
    }

    /// All stations in insertion order.
    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    /// Number of stations held.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Whether the store holds no stations.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// Render every station prefixed by its index.
    pub fn listing(&self) -> String {
        self.stations
            .iter()
            .enumerate()
            .map(|(index, station)| format!("{index}) {station}\n"))
            .collect()
    }

    /// Replace the collection with the stations stored at `path`.
    ///
    /// A missing file is reported as [`LoadOutcome::Missing`]. Any read or
    /// decode failure is returned and leaves the collection unchanged.
    pub fn load_from(&mut self, path: impl AsRef<Path>) -> Result<LoadOutcome> {
        let path = path.as_ref();
        let content = match fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                warn!("Station file {} not found", path.display());
                return Ok(LoadOutcome::Missing);
            }
            Err(err) => {
                return Err(err).with_context(|| format!("failed to read {}", path.display()))
            }
        };

        let document: Value = serde_json::from_str(&content)
            .with_context(|| format!("failed to parse {}", path.display()))?;
        let stations = codec::list_from_value(&document)
            .with_context(|| format!("{} does not contain a valid station list", path.display()))?;

        self.stations = stations;
        info!(count = self.stations.len(), "Loaded stations from {}", path.display());
        Ok(LoadOutcome::Loaded(self.stations.len()))
    }

    /// Overwrite `path` with every station, returning how many were written.
    pub fn write_to(&self, path: impl AsRef<Path>) -> Result<usize> {
        let path = path.as_ref();
        if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create {}", parent.display()))?;
        }
        let document = codec::list_to_value(&self.stations);
        let mut serialised =
            codec::to_pretty_string(&document).context("failed to serialise stations")?;
        serialised.push('\n');
        fs::write(path, serialised)
            .with_context(|| format!("failed to write {}", path.display()))?;
        info!(count = self.stations.len(), "Wrote stations to {}", path.display());
        Ok(self.stations.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        error::StationError,
        models::{CommDevice, DockingPortSize, OrbitedBody},
        station::StationBuilder,
    };
    use serde_json::json;
    use tempfile::tempdir;

    fn sample_store() -> Result<StationStore> {
        let mut store = StationStore::new();
        store.push(
            StationBuilder::new("KSS-1")?
                .set_name("Kerbin Orbital")
                .add_docking_ports(2, DockingPortSize::Small)
                .add_comms_device(CommDevice::Communotron16)
                .add_kerbal("Jebediah")
                .build(),
        );
        store.push(
            StationBuilder::new("KSS-2")?
                .set_orbiting_body(OrbitedBody::Duna)
                .set_active(false)
                .build(),
        );
        Ok(store)
    }

    #[test]
    fn write_then_load_round_trip() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stations.json");
        let store = sample_store()?;

        assert_eq!(store.write_to(&path)?, 2);
        let text = fs::read_to_string(&path)?;
        assert!(text.starts_with("[\n    {\n        \""));
        assert!(text.ends_with("]\n"));

        let mut loaded = StationStore::new();
        assert_eq!(loaded.load_from(&path)?, LoadOutcome::Loaded(2));
        assert_eq!(loaded.stations(), store.stations());
        Ok(())
    }

    #[test]
    fn write_creates_parent_directories() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("nested").join("stations.json");
        sample_store()?.write_to(&path)?;
        assert!(path.exists());
        Ok(())
    }

    #[test]
    fn missing_file_leaves_collection_untouched() -> Result<()> {
        let dir = tempdir()?;
        let mut store = sample_store()?;
        let outcome = store.load_from(dir.path().join("absent.json"))?;
        assert_eq!(outcome, LoadOutcome::Missing);
        assert_eq!(store.len(), 2);

        let mut empty = StationStore::new();
        assert_eq!(
            empty.load_from(dir.path().join("absent.json"))?,
            LoadOutcome::Missing
        );
        assert!(empty.is_empty());
        Ok(())
    }

    #[test]
    fn malformed_file_is_an_error_and_keeps_collection() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stations.json");
        let mut document = codec::list_to_value(sample_store()?.stations());
        if let Some(object) = document[1].as_object_mut() {
            object.remove("kerbals");
        }
        fs::write(&path, document.to_string())?;

        let mut store = StationStore::new();
        store.push(StationBuilder::new("keep-me")?.build());
        let err = store.load_from(&path).unwrap_err();

        let station_err = err
            .downcast_ref::<StationError>()
            .expect("expected a station error");
        assert!(matches!(station_err, StationError::Record { index: 1, .. }));
        assert!(format!("{err:#}").contains("missing field `kerbals`"));
        assert_eq!(store.len(), 1);
        assert_eq!(store.stations()[0].id(), "keep-me");
        Ok(())
    }

    #[test]
    fn invalid_json_is_an_error() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stations.json");
        fs::write(&path, "[{\"id\": ")?;
        let mut store = StationStore::new();
        assert!(store.load_from(&path).is_err());

        fs::write(&path, json!({"id": "x"}).to_string())?;
        assert!(store.load_from(&path).is_err());
        Ok(())
    }

    #[test]
    fn empty_array_loads_zero_stations() -> Result<()> {
        let dir = tempdir()?;
        let path = dir.path().join("stations.json");
        fs::write(&path, "[]")?;
        let mut store = sample_store()?;
        assert_eq!(store.load_from(&path)?, LoadOutcome::Loaded(0));
        assert!(store.is_empty());
        Ok(())
    }

    #[test]
    fn listing_prefixes_index() -> Result<()> {
        let listing = sample_store()?.listing();
        assert!(listing.starts_with("0) Station Information\n"));
        assert!(listing.contains("1) Station Information\n\nStation ID: KSS-2\n"));
        Ok(())
    }
}
