#![allow(missing_docs)]

use std::{collections::HashMap, fmt};

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

use crate::error::StationError;

/// Celestial body a station can orbit. Declaration order is the persisted ordinal.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
#[repr(u8)]
pub enum OrbitedBody {
    Kerbol,
    Moho,
    Eve,
    Gilly,
    #[default]
    Kerbin,
    Mun,
    Minmus,
    Duna,
    Ike,
    Dres,
    Jool,
    Laythe,
    Vall,
    Tylo,
    Bop,
    Pol,
    Eloo,
}

static BODIES_BY_NAME: Lazy<HashMap<String, OrbitedBody>> = Lazy::new(|| {
    OrbitedBody::ALL
        .iter()
        .map(|body| (body.name().to_lowercase(), *body))
        .collect()
});

impl OrbitedBody {
    /// Every body in declaration order.
    pub const ALL: [OrbitedBody; 17] = [
        OrbitedBody::Kerbol,
        OrbitedBody::Moho,
        OrbitedBody::Eve,
        OrbitedBody::Gilly,
        OrbitedBody::Kerbin,
        OrbitedBody::Mun,
        OrbitedBody::Minmus,
        OrbitedBody::Duna,
        OrbitedBody::Ike,
        OrbitedBody::Dres,
        OrbitedBody::Jool,
        OrbitedBody::Laythe,
        OrbitedBody::Vall,
        OrbitedBody::Tylo,
        OrbitedBody::Bop,
        OrbitedBody::Pol,
        OrbitedBody::Eloo,
    ];

    /// Body a new station orbits unless told otherwise.
    pub const HOME: OrbitedBody = OrbitedBody::Kerbin;

    /// Canonical display name.
    pub fn name(self) -> &'static str {
        match self {
            OrbitedBody::Kerbol => "Kerbol",
            OrbitedBody::Moho => "Moho",
            OrbitedBody::Eve => "Eve",
            OrbitedBody::Gilly => "Gilly",
            OrbitedBody::Kerbin => "Kerbin",
            OrbitedBody::Mun => "Mun",
            OrbitedBody::Minmus => "Minmus",
            OrbitedBody::Duna => "Duna",
            OrbitedBody::Ike => "Ike",
            OrbitedBody::Dres => "Dres",
            OrbitedBody::Jool => "Jool",
            OrbitedBody::Laythe => "Laythe",
            OrbitedBody::Vall => "Vall",
            OrbitedBody::Tylo => "Tylo",
            OrbitedBody::Bop => "Bop",
            OrbitedBody::Pol => "Pol",
            OrbitedBody::Eloo => "Eloo",
        }
    }

    /// Look up a body by name, ignoring case. Only whole names match.
    pub fn from_name(name: &str) -> Option<Self> {
        BODIES_BY_NAME.get(&name.to_lowercase()).copied()
    }

    pub fn ordinal(self) -> u64 {
        self as u64
    }

    pub fn from_ordinal(value: u64) -> Option<Self> {
        usize::try_from(value)
            .ok()
            .and_then(|index| Self::ALL.get(index).copied())
    }
}

impl fmt::Display for OrbitedBody {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<OrbitedBody> for u64 {
    fn from(body: OrbitedBody) -> Self {
        body.ordinal()
    }
}

impl TryFrom<u64> for OrbitedBody {
    type Error = StationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(StationError::UnknownOrdinal {
            kind: "orbited body",
            value,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ordinals_follow_declaration_order() {
        for (index, body) in OrbitedBody::ALL.iter().enumerate() {
            assert_eq!(body.ordinal(), index as u64);
            assert_eq!(OrbitedBody::from_ordinal(index as u64), Some(*body));
        }
        assert_eq!(OrbitedBody::Kerbin.ordinal(), 4);
        assert_eq!(OrbitedBody::Eloo.ordinal(), 16);
        assert_eq!(OrbitedBody::from_ordinal(17), None);
    }

    #[test]
    fn name_lookup_is_case_insensitive_and_exact() {
        assert_eq!(OrbitedBody::from_name("kerbin"), Some(OrbitedBody::Kerbin));
        assert_eq!(OrbitedBody::from_name("JOOL"), Some(OrbitedBody::Jool));
        assert_eq!(OrbitedBody::from_name("MiNmUs"), Some(OrbitedBody::Minmus));
        assert_eq!(OrbitedBody::from_name("ker"), None);
        assert_eq!(OrbitedBody::from_name("kerbin "), None);
        assert_eq!(OrbitedBody::from_name("Vulkin"), None);
    }

    #[test]
    fn home_planet_is_kerbin() {
        assert_eq!(OrbitedBody::default(), OrbitedBody::Kerbin);
        assert_eq!(OrbitedBody::Kerbin.to_string(), "Kerbin");
    }

    #[test]
    fn rejects_unknown_ordinal() {
        let err = OrbitedBody::try_from(42).unwrap_err();
        assert_eq!(err.to_string(), "unknown orbited body ordinal 42");
    }
}
