use std::fmt::{Display, Formatter};
use rs_can::CanError;
use crate::constant::*;

/// The standard bus speeds the VCI driver has timing registers for.
#[derive(Debug, Copy, Clone, Eq, PartialEq, Hash)]
pub enum BitrateProfile {
    Kbps10,
    Kbps20,
    Kbps50,
    Kbps100,
    Kbps125,
    Kbps250,
    Kbps500,
    Kbps800,
    Kbps1000,
}

impl BitrateProfile {
    pub const ALL: [Self; 9] = [
        Self::Kbps10,
        Self::Kbps20,
        Self::Kbps50,
        Self::Kbps100,
        Self::Kbps125,
        Self::Kbps250,
        Self::Kbps500,
        Self::Kbps800,
        Self::Kbps1000,
    ];

    /// `(bt0, bt1)` bus timing register values.
    pub const fn timing(&self) -> (u8, u8) {
        match self {
            Self::Kbps10 => (CAN_BT0_10KB, CAN_BT1_10KB),
            Self::Kbps20 => (CAN_BT0_20KB, CAN_BT1_20KB),
            Self::Kbps50 => (CAN_BT0_50KB, CAN_BT1_50KB),
            Self::Kbps100 => (CAN_BT0_100KB, CAN_BT1_100KB),
            Self::Kbps125 => (CAN_BT0_125KB, CAN_BT1_125KB),
            Self::Kbps250 => (CAN_BT0_250KB, CAN_BT1_250KB),
            Self::Kbps500 => (CAN_BT0_500KB, CAN_BT1_500KB),
            Self::Kbps800 => (CAN_BT0_800KB, CAN_BT1_800KB),
            Self::Kbps1000 => (CAN_BT0_1000KB, CAN_BT1_1000KB),
        }
    }

    /// Bus speed in bit/s.
    pub const fn bitrate(&self) -> u32 {
        match self {
            Self::Kbps10 => 10_000,
            Self::Kbps20 => 20_000,
            Self::Kbps50 => 50_000,
            Self::Kbps100 => 100_000,
            Self::Kbps125 => 125_000,
            Self::Kbps250 => 250_000,
            Self::Kbps500 => 500_000,
            Self::Kbps800 => 800_000,
            Self::Kbps1000 => 1_000_000,
        }
    }
}

impl TryFrom<u32> for BitrateProfile {
    type Error = CanError;
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::ALL.into_iter()
            .find(|p| p.bitrate() == value)
            .ok_or(CanError::DeviceConfigError(format!("bitrate: {} is not supported", value)))
    }
}

impl Display for BitrateProfile {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}kbit/s", self.bitrate() / 1000)
    }
}

#[inline]
pub fn bitrate_to_timing(profile: BitrateProfile) -> (u8, u8) {
    profile.timing()
}
