use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use crate::constant::{
    CAN_OPMODE_ERRFRAME, CAN_OPMODE_EXTENDED, CAN_OPMODE_LISTONLY, CAN_OPMODE_LOWSPEED,
    CAN_OPMODE_STANDARD, CAN_STATUS_BUSCERR, CAN_STATUS_BUSOFF, CAN_STATUS_ERRLIM,
    CAN_STATUS_ININIT, CAN_STATUS_OVRRUN, CAN_STATUS_TXPEND,
};

bitflags! {
    /// Raw bits of the controller status byte.
    #[repr(transparent)]
    #[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
    pub struct ControllerStatus: u8 {
        const TX_PENDING = CAN_STATUS_TXPEND;
        const OVERRUN = CAN_STATUS_OVRRUN;
        const ERROR_LIMIT = CAN_STATUS_ERRLIM;
        const BUS_OFF = CAN_STATUS_BUSOFF;
        const INITIALIZING = CAN_STATUS_ININIT;
        const BUS_COUPLING_ERROR = CAN_STATUS_BUSCERR;
    }
}

bitflags! {
    /// How a controller channel was opened. The empty set is the driver's
    /// `CAN_OPMODE_UNDEFINED`.
    ///
    /// In human-readable formats the flags are written as text,
    /// e.g. `STANDARD | EXTENDED`.
    #[repr(transparent)]
    #[derive(Debug, Copy, Clone, Eq, PartialEq, Hash, Serialize, Deserialize)]
    #[serde(transparent)]
    pub struct OperatingMode: u8 {
        /// 11-bit identifiers.
        const STANDARD = CAN_OPMODE_STANDARD;
        /// 29-bit identifiers.
        const EXTENDED = CAN_OPMODE_EXTENDED;
        /// Error frames are delivered as messages.
        const ERROR_FRAME = CAN_OPMODE_ERRFRAME;
        const LISTEN_ONLY = CAN_OPMODE_LISTONLY;
        const LOW_SPEED = CAN_OPMODE_LOWSPEED;
    }
}

impl Default for OperatingMode {
    fn default() -> Self {
        Self::STANDARD
    }
}

/// The state of a CAN controller, decoded from its status byte.
///
/// Every flag is independent, any combination may be reported.
#[derive(Debug, Default, Copy, Clone, Eq, PartialEq, Hash)]
pub struct BusState {
    pub tx_pending: bool,
    pub overrun: bool,
    pub error_limit_reached: bool,
    pub bus_off: bool,
    pub initializing: bool,
    pub bus_coupling_error: bool,
}

impl BusState {
    /// Bits above `CAN_STATUS_BUSCERR` are ignored.
    pub fn decode(raw: u8) -> Self {
        let status = ControllerStatus::from_bits_truncate(raw);
        Self {
            tx_pending: status.contains(ControllerStatus::TX_PENDING),
            overrun: status.contains(ControllerStatus::OVERRUN),
            error_limit_reached: status.contains(ControllerStatus::ERROR_LIMIT),
            bus_off: status.contains(ControllerStatus::BUS_OFF),
            initializing: status.contains(ControllerStatus::INITIALIZING),
            bus_coupling_error: status.contains(ControllerStatus::BUS_COUPLING_ERROR),
        }
    }

    /// The controller is neither bus-off nor still initializing.
    #[inline]
    pub fn is_operational(&self) -> bool {
        !self.bus_off && !self.initializing
    }

    pub fn status(&self) -> ControllerStatus {
        let mut status = ControllerStatus::empty();
        status.set(ControllerStatus::TX_PENDING, self.tx_pending);
        status.set(ControllerStatus::OVERRUN, self.overrun);
        status.set(ControllerStatus::ERROR_LIMIT, self.error_limit_reached);
        status.set(ControllerStatus::BUS_OFF, self.bus_off);
        status.set(ControllerStatus::INITIALIZING, self.initializing);
        status.set(ControllerStatus::BUS_COUPLING_ERROR, self.bus_coupling_error);
        status
    }

    #[inline]
    pub fn raw(&self) -> u8 {
        self.status().bits()
    }
}

impl From<u8> for BusState {
    #[inline]
    fn from(raw: u8) -> Self {
        Self::decode(raw)
    }
}
