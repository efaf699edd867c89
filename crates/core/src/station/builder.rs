use std::iter;

use tracing::{debug, warn};

use super::models::Station;
use crate::{
    error::{StationError, StationResult},
    models::{CommDevice, DockingPortSize, OrbitalParameters, OrbitedBody},
};

/// Most units of one item a single repeated add may install.
pub const MAX_QUANTITY: usize = 10_000;

fn capped(quantity: usize, item: &str) -> usize {
    if quantity > MAX_QUANTITY {
        warn!(quantity, max = MAX_QUANTITY, item, "quantity capped");
    }
    quantity.min(MAX_QUANTITY)
}

/// Step-wise constructor for a single [`Station`].
///
/// The id is fixed when the builder is created and every other field starts at
/// its default. Setters consume and return the builder so calls chain, and
/// [`build`](Self::build) consumes it, so a builder yields exactly one station.
///
/// The `add_*` methods append, while the `set_*` list methods replace the whole
/// list, dropping anything appended earlier.
#[derive(Debug)]
#[must_use = "a builder does nothing until `build` is called"]
pub struct StationBuilder {
    station: Station,
}

impl StationBuilder {
    /// Start a new station with the given id.
    pub fn new(id: impl Into<String>) -> StationResult<Self> {
        let id = id.into();
        if id.trim().is_empty() {
            return Err(StationError::EmptyId);
        }
        Ok(Self {
            station: Station::with_id(id),
        })
    }

    /// Set the display name.
    pub fn set_name(mut self, name: impl Into<String>) -> Self {
        self.station.name = name.into();
        self
    }

    /// Set the orbit from an apoapsis/periapsis pair.
    pub fn set_orbit_details(self, apoapsis: u64, periapsis: u64) -> Self {
        self.set_orbit(OrbitalParameters::new(apoapsis, periapsis))
    }

    /// Set the orbit.
    pub fn set_orbit(mut self, orbit: OrbitalParameters) -> Self {
        self.station.orbit = orbit;
        self
    }

    /// Set the crew capacity.
    pub fn set_capacity(mut self, capacity: u64) -> Self {
        self.station.capacity = capacity;
        self
    }

    /// Mark the station as active or inactive.
    pub fn set_active(mut self, active: bool) -> Self {
        self.station.active = active;
        self
    }

    /// Append a single comms device.
    pub fn add_comms_device(mut self, device: CommDevice) -> Self {
        self.station.comms_devices.push(device);
        self
    }

    /// Append `quantity` units of `device`, at most [`MAX_QUANTITY`].
    pub fn add_comms_devices(mut self, quantity: usize, device: CommDevice) -> Self {
        let quantity = capped(quantity, "comms device");
        self.station
            .comms_devices
            .extend(iter::repeat(device).take(quantity));
        self
    }

    /// Replace the installed comms devices with `devices`.
    pub fn set_comms_devices(mut self, devices: Vec<CommDevice>) -> Self {
        self.station.comms_devices = devices;
        self
    }

    /// Append a single docking port.
    pub fn add_docking_port(mut self, port: DockingPortSize) -> Self {
        self.station.docking_ports.push(port);
        self
    }

    /// Append `quantity` ports of the given size, at most [`MAX_QUANTITY`].
    pub fn add_docking_ports(mut self, quantity: usize, port: DockingPortSize) -> Self {
        let quantity = capped(quantity, "docking port");
        self.station
            .docking_ports
            .extend(iter::repeat(port).take(quantity));
        self
    }

    /// Replace the installed docking ports with `ports`.
    pub fn set_docking_ports(mut self, ports: Vec<DockingPortSize>) -> Self {
        self.station.docking_ports = ports;
        self
    }

    /// Add a crew member. Empty names are ignored.
    pub fn add_kerbal(mut self, name: impl Into<String>) -> Self {
        let name = name.into();
        if !name.is_empty() {
            self.station.kerbals.push(name);
        }
        self
    }

    /// Replace the crew list. Empty names are dropped.
    pub fn set_kerbals(mut self, kerbals: Vec<String>) -> Self {
        self.station.kerbals = kerbals.into_iter().filter(|name| !name.is_empty()).collect();
        self
    }

    /// Set the body the station orbits.
    pub fn set_orbiting_body(mut self, body: OrbitedBody) -> Self {
        self.station.orbiting = body;
        self
    }

    /// Finish the station and hand it to the caller.
    pub fn build(self) -> Station {
        debug!(station_id = %self.station.id, "station built");
        self.station
    }
}
