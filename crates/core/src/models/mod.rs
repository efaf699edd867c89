//! Shared domain models.

mod body;
mod equipment;

use serde::{Deserialize, Serialize};

pub use body::OrbitedBody;
pub use equipment::{CommDevice, DockingPortSize};

/// Apoapsis and periapsis altitudes of a station's orbit, in metres.
///
/// No ordering is enforced between the two values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct OrbitalParameters {
    /// Highest point of the orbit.
    pub apoapsis: u64,
    /// Lowest point of the orbit.
    pub periapsis: u64,
}

impl OrbitalParameters {
    /// Pair an apoapsis with a periapsis.
    pub fn new(apoapsis: u64, periapsis: u64) -> Self {
        Self {
            apoapsis,
            periapsis,
        }
    }
}

impl Default for OrbitalParameters {
    fn default() -> Self {
        Self::new(100_000, 100_000)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_orbit_is_circular_at_100km() {
        let orbit = OrbitalParameters::default();
        assert_eq!(orbit.apoapsis, 100_000);
        assert_eq!(orbit.periapsis, 100_000);
    }

    #[test]
    fn periapsis_may_exceed_apoapsis() {
        let orbit = OrbitalParameters::new(80_000, 250_000);
        assert!(orbit.periapsis > orbit.apoapsis);
    }
}
