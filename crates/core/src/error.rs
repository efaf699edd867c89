//! Typed errors raised by station construction and decoding.

use thiserror::Error;

/// Result alias for operations that fail with [`StationError`].
pub type StationResult<T> = std::result::Result<T, StationError>;

/// Failures that can occur while building or decoding a station record.
#[derive(Error, Debug)]
pub enum StationError {
    /// A station was given an empty (or whitespace-only) identifier.
    #[error("station id must not be empty")]
    EmptyId,

    /// An enum ordinal did not correspond to any declared variant.
    #[error("unknown {kind} ordinal {value}")]
    UnknownOrdinal {
        /// Name of the enumeration being decoded.
        kind: &'static str,
        /// Offending ordinal.
        value: u64,
    },

    /// A station object did not match the expected document shape.
    #[error("malformed station document: {source}")]
    Malformed {
        /// Underlying decode error; names the missing or mis-typed field.
        #[source]
        source: serde_json::Error,
    },

    /// The top-level document was not a JSON array.
    #[error("expected a JSON array of stations, found {found}")]
    NotAnArray {
        /// JSON type that was found instead.
        found: &'static str,
    },

    /// A single element of a station list failed to decode.
    #[error("station at index {index} could not be decoded")]
    Record {
        /// Position of the failing element in the array.
        index: usize,
        /// Why the element was rejected.
        #[source]
        source: Box<StationError>,
    },
}
