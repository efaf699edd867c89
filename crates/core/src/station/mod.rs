//! Station records, their builder and the interactive collector.

mod builder;
mod models;
pub mod prompt;

pub use builder::{StationBuilder, MAX_QUANTITY};
pub use models::{Station, DEFAULT_CAPACITY, DEFAULT_STATION_NAME};
pub use prompt::{collect_station, Console};
