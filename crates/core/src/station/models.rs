use std::fmt;

use crate::models::{CommDevice, DockingPortSize, OrbitalParameters, OrbitedBody};

/// Name given to stations that were never named.
pub const DEFAULT_STATION_NAME: &str = "Unknown Station";

/// Crew capacity of a station unless set explicitly.
pub const DEFAULT_CAPACITY: u64 = 3;

/// A space station record.
///
/// Stations are produced by [`StationBuilder`](super::StationBuilder) or decoded
/// by [`codec`](crate::codec); once handed out they are read-only.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Station {
    pub(crate) id: String,
    pub(crate) name: String,
    pub(crate) orbit: OrbitalParameters,
    pub(crate) capacity: u64,
    pub(crate) active: bool,
    pub(crate) comms_devices: Vec<CommDevice>,
    pub(crate) docking_ports: Vec<DockingPortSize>,
    pub(crate) kerbals: Vec<String>,
    pub(crate) orbiting: OrbitedBody,
}

impl Station {
    /// Station with every field at its default. Callers must supply a non-empty id.
    pub(crate) fn with_id(id: String) -> Self {
        Self {
            id,
            name: DEFAULT_STATION_NAME.to_string(),
            orbit: OrbitalParameters::default(),
            capacity: DEFAULT_CAPACITY,
            active: true,
            comms_devices: Vec::new(),
            docking_ports: Vec::new(),
            kerbals: Vec::new(),
            orbiting: OrbitedBody::HOME,
        }
    }

    /// Station identifier; never empty.
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Human readable station name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Orbit apoapsis and periapsis.
    pub fn orbit(&self) -> OrbitalParameters {
        self.orbit
    }

    /// Number of kerbals the station can host.
    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    /// Whether the station is currently in service.
    pub fn is_active(&self) -> bool {
        self.active
    }

    /// Installed communication devices, one entry per unit.
    pub fn comms_devices(&self) -> &[CommDevice] {
        &self.comms_devices
    }

    /// Installed docking ports, one entry per port.
    pub fn docking_ports(&self) -> &[DockingPortSize] {
        &self.docking_ports
    }

    /// Kerbals currently on board.
    pub fn kerbals(&self) -> &[String] {
        &self.kerbals
    }

    /// Body the station orbits.
    pub fn orbiting_body(&self) -> OrbitedBody {
        self.orbiting
    }
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "Yes"
    } else {
        "No"
    }
}

impl fmt::Display for Station {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Station Information")?;
        writeln!(f)?;
        writeln!(f, "Station ID: {}", self.id)?;
        writeln!(f, "Station Name: {}", self.name)?;
        writeln!(f, "Orbiting Planet: {}", self.orbiting)?;
        writeln!(f, "Orbit Details: ")?;
        writeln!(f, "\t Apoapsis: {}", self.orbit.apoapsis)?;
        writeln!(f, "\tPeriapsis: {}", self.orbit.periapsis)?;
        writeln!(f, "Capacity: {} kerbals", self.capacity)?;
        writeln!(f, "Station Currently Active: {}", yes_no(self.active))?;
        if !self.comms_devices.is_empty() {
            writeln!(f, "Communication Equipment: ")?;
            for device in &self.comms_devices {
                writeln!(f, "\t{device}")?;
            }
        }
        if !self.docking_ports.is_empty() {
            writeln!(f, "Docking Ports: ")?;
            for port in &self.docking_ports {
                writeln!(f, "\t{port}")?;
            }
        }
        if !self.kerbals.is_empty() {
            writeln!(f, "Kerbals Present: ")?;
            for kerbal in &self.kerbals {
                writeln!(f, "\t{kerbal}")?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_omits_empty_sections() {
        let station = Station::with_id("KSS-1".to_string());
        let text = station.to_string();
        assert!(text.starts_with("Station Information\n\nStation ID: KSS-1\n"));
        assert!(text.contains("Station Name: Unknown Station\n"));
        assert!(text.contains("Orbiting Planet: Kerbin\n"));
        assert!(text.contains("\t Apoapsis: 100000\n\tPeriapsis: 100000\n"));
        assert!(text.contains("Capacity: 3 kerbals\n"));
        assert!(text.contains("Station Currently Active: Yes\n"));
        assert!(!text.contains("Communication Equipment"));
        assert!(!text.contains("Docking Ports"));
        assert!(!text.contains("Kerbals Present"));
    }

    #[test]
    fn display_lists_equipment_and_crew_in_order() {
        let mut station = Station::with_id("KSS-2".to_string());
        station.active = false;
        station.comms_devices = vec![CommDevice::Ra100, CommDevice::Ra2];
        station.docking_ports = vec![DockingPortSize::Large];
        station.kerbals = vec!["Jebediah".to_string(), "Valentina".to_string()];

        let text = station.to_string();
        assert!(text.contains("Station Currently Active: No\n"));
        assert!(text.contains("Communication Equipment: \n\tRA-100\n\tRA-2\n"));
        assert!(text.contains("Docking Ports: \n\tLarge Docking Port\n"));
        assert!(text.ends_with("Kerbals Present: \n\tJebediah\n\tValentina\n"));
    }
}
