//! JSON encoding of station records.
//!
//! A station is an object with ten keys; enum values are written as their
//! declaration ordinal. Decoding requires every key with the right type and
//! never fills in defaults.

use serde::{Deserialize, Serialize};
use serde_json::{json, ser::PrettyFormatter, Serializer, Value};

use crate::{
    error::{StationError, StationResult},
    models::{CommDevice, DockingPortSize, OrbitalParameters, OrbitedBody},
    station::Station,
};

/// Wire shape of a single station object.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct StationDocument {
    id: String,
    name: String,
    active: bool,
    docking_ports: Vec<DockingPortSize>,
    capacity: u64,
    comms_devs: Vec<CommDevice>,
    kerbals: Vec<String>,
    apoapsis: u64,
    periapsis: u64,
    orbiting: OrbitedBody,
}

impl TryFrom<StationDocument> for Station {
    type Error = StationError;

    fn try_from(document: StationDocument) -> StationResult<Self> {
        if document.id.trim().is_empty() {
            return Err(StationError::EmptyId);
        }
        Ok(Station {
            id: document.id,
            name: document.name,
            orbit: OrbitalParameters::new(document.apoapsis, document.periapsis),
            capacity: document.capacity,
            active: document.active,
            comms_devices: document.comms_devs,
            docking_ports: document.docking_ports,
            kerbals: document.kerbals,
            orbiting: document.orbiting,
        })
    }
}

/// Encode a station as a JSON object.
pub fn to_value(station: &Station) -> Value {
    json!({
        "id": station.id,
        "name": station.name,
        "active": station.active,
        "dockingPorts": station.docking_ports,
        "capacity": station.capacity,
        "commsDevs": station.comms_devices,
        "kerbals": station.kerbals,
        "apoapsis": station.orbit.apoapsis,
        "periapsis": station.orbit.periapsis,
        "orbiting": station.orbiting,
    })
}

/// Decode a single station object.
pub fn from_value(value: &Value) -> StationResult<Station> {
    let document = StationDocument::deserialize(value)
        .map_err(|source| StationError::Malformed { source })?;
    Station::try_from(document)
}

/// Encode stations as a JSON array, preserving order.
pub fn list_to_value(stations: &[Station]) -> Value {
    Value::Array(stations.iter().map(to_value).collect())
}

/// Decode a JSON array of stations. The first bad element fails the whole list.
pub fn list_from_value(value: &Value) -> StationResult<Vec<Station>> {
    let elements = value.as_array().ok_or(StationError::NotAnArray {
        found: json_type_name(value),
    })?;
    elements
        .iter()
        .enumerate()
        .map(|(index, element)| {
            from_value(element).map_err(|source| StationError::Record {
                index,
                source: Box::new(source),
            })
        })
        .collect()
}

/// Render a document with four-space indentation.
pub fn to_pretty_string(value: &Value) -> serde_json::Result<String> {
    let mut buffer = Vec::new();
    let mut serializer =
        Serializer::with_formatter(&mut buffer, PrettyFormatter::with_indent(b"    "));
    value.serialize(&mut serializer)?;
    String::from_utf8(buffer).map_err(<serde_json::Error as serde::ser::Error>::custom)
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
