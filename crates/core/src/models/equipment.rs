#![allow(missing_docs)]

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::StationError;

/// Communication antenna model installed on a station.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
#[repr(u8)]
pub enum CommDevice {
    Communotron16,
    Communotron16S,
    Ra15,
    Ra2,
    Communotron88,
    CommunotronDtsM1,
    CommunotronHg5,
    CommunotronHg55,
    Ra100,
}

impl CommDevice {
    pub const ALL: [CommDevice; 9] = [
        CommDevice::Communotron16,
        CommDevice::Communotron16S,
        CommDevice::Ra15,
        CommDevice::Ra2,
        CommDevice::Communotron88,
        CommDevice::CommunotronDtsM1,
        CommDevice::CommunotronHg5,
        CommDevice::CommunotronHg55,
        CommDevice::Ra100,
    ];

    pub fn name(self) -> &'static str {
        match self {
            CommDevice::Communotron16 => "Communotron 16",
            CommDevice::Communotron16S => "Communotron 16-S",
            CommDevice::Ra15 => "RA-15",
            CommDevice::Ra2 => "RA-2",
            CommDevice::Communotron88 => "Communotron 88-88",
            CommDevice::CommunotronDtsM1 => "Communotron DTS-M1",
            CommDevice::CommunotronHg5 => "Communotron HG-5",
            CommDevice::CommunotronHg55 => "Communotron HG-55",
            CommDevice::Ra100 => "RA-100",
        }
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

impl fmt::Display for CommDevice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl From<CommDevice> for u64 {
    fn from(device: CommDevice) -> Self {
        device.ordinal()
    }
}

impl TryFrom<u64> for CommDevice {
    type Error = StationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(StationError::UnknownOrdinal {
            kind: "comms device",
            value,
        })
    }
}

/// Docking port size class, smallest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u64", try_from = "u64")]
#[repr(u8)]
pub enum DockingPortSize {
    XSmall,
    Small,
    Medium,
    Large,
    XLarge,
}

impl DockingPortSize {
    pub const ALL: [DockingPortSize; 5] = [
        DockingPortSize::XSmall,
        DockingPortSize::Small,
        DockingPortSize::Medium,
        DockingPortSize::Large,
        DockingPortSize::XLarge,
    ];

    /// Size label without the "Docking Port" suffix.
    pub fn size_label(self) -> &'static str {
        match self {
            DockingPortSize::XSmall => "Extra Small",
            DockingPortSize::Small => "Small",
            DockingPortSize::Medium => "Medium",
            DockingPortSize::Large => "Large",
            DockingPortSize::XLarge => "Extra Large",
        }
    }

    /// Short label used in the selection menu.
    pub fn menu_label(self) -> &'static str {
        match self {
            DockingPortSize::XSmall => "XSmall",
            DockingPortSize::Small => "Small",
            DockingPortSize::Medium => "Medium",
            DockingPortSize::Large => "Large",
            DockingPortSize::XLarge => "XLarge",
        }
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

impl fmt::Display for DockingPortSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} Docking Port", self.size_label())
    }
}

impl From<DockingPortSize> for u64 {
    fn from(size: DockingPortSize) -> Self {
        size.ordinal()
    }
}

impl TryFrom<u64> for DockingPortSize {
    type Error = StationError;

    fn try_from(value: u64) -> Result<Self, Self::Error> {
        Self::from_ordinal(value).ok_or(StationError::UnknownOrdinal {
            kind: "docking port",
            value,
        })
    }
}
