#![warn(clippy::all, missing_docs)]

//! Core domain logic for the Kerbal space station manager.
//!
//! This crate hosts the station models, the builder and interactive
//! collector used to create stations, the JSON codec, the in-memory
//! store with its file persistence, and configuration handling.

pub mod codec;
pub mod config;
pub mod error;
pub mod models;
pub mod station;
pub mod store;

pub use crate::config::AppConfig;
pub use error::{StationError, StationResult};
pub use models::{CommDevice, DockingPortSize, OrbitalParameters, OrbitedBody};
pub use station::{collect_station, Console, Station, StationBuilder};
pub use store::{LoadOutcome, StationStore};
